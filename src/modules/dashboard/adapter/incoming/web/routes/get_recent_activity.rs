use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    accounts::application::domain::entities::UserId,
    accounts::application::helpers::RoleGuardError,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    dashboard::application::ports::incoming::use_cases::GetRecentActivityError,
    shared::api::ApiResponse,
    AppState,
};

const DEFAULT_LIMIT: u64 = 5;

#[derive(Debug, Deserialize)]
struct ActivityParams {
    limit: Option<u64>,
}

#[get("/api/admin/activity")]
pub async fn get_recent_activity_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    params: web::Query<ActivityParams>,
) -> impl Responder {
    if let Err(err) = data.role_guard.require_admin(UserId::from(user.user_id)).await {
        return map_guard_error(err);
    }

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    match data.dashboard.get_recent_activity.execute(limit).await {
        Ok(feed) => ApiResponse::success(feed),
        Err(GetRecentActivityError::RepositoryError(msg)) => {
            tracing::error!("Activity feed failed: {}", msg);
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
