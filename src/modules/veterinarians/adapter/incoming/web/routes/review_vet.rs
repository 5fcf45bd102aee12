use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::UserId,
    accounts::application::helpers::RoleGuardError,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    veterinarians::application::domain::entities::ReviewDecision,
    veterinarians::application::ports::incoming::use_cases::{ReviewVetCommand, ReviewVetError},
    AppState,
};

#[derive(Debug, Deserialize)]
struct ReviewVetRequest {
    pub decision: ReviewDecision,
}

#[post("/api/veterinarians/{vet_id}/review")]
pub async fn review_vet_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<ReviewVetRequest>,
) -> impl Responder {
    if let Err(err) = data.role_guard.require_admin(UserId::from(user.user_id)).await {
        return map_guard_error(err);
    }

    let command = ReviewVetCommand {
        vet_id: path.into_inner(),
        decision: payload.decision,
    };

    match data.veterinarians.review_vet.execute(command).await {
        Ok(vet) => ApiResponse::success(vet),
        Err(ReviewVetError::VetNotFound) => {
            ApiResponse::not_found("VET_NOT_FOUND", "Veterinarian not found")
        }
        Err(ReviewVetError::RepositoryError(msg)) => {
            tracing::error!("Review vet failed: {}", msg);
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
