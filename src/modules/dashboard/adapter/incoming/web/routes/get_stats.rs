use actix_web::{get, web, Responder};

use crate::{
    accounts::application::domain::entities::UserId,
    accounts::application::helpers::RoleGuardError,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    dashboard::application::ports::incoming::use_cases::GetDashboardStatsError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/admin/stats")]
pub async fn get_stats_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(err) = data.role_guard.require_admin(UserId::from(user.user_id)).await {
        return map_guard_error(err);
    }

    match data.dashboard.get_stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetDashboardStatsError::RepositoryError(msg)) => {
            tracing::error!("Dashboard stats failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn map_guard_error(err: RoleGuardError) -> actix_web::HttpResponse {
    match err {
        RoleGuardError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Admin privileges required")
        }
        RoleGuardError::ProfileNotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        RoleGuardError::RepositoryError(msg) => {
            tracing::error!("Role guard lookup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
