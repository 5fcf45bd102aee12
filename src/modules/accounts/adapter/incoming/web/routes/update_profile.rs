use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::UserId,
    accounts::application::ports::incoming::use_cases::{
        UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError,
    },
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct UpdateProfileRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub farm_type: Option<String>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
    pub vet_profile_id: Option<Uuid>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[patch("/api/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let command = match UpdateProfileCommand::new(
        UserId::from(user.user_id),
        payload.name.clone(),
        payload.location.clone(),
        payload.farm_type.clone(),
        payload.bio.clone(),
        payload.contact_number.clone(),
        payload.vet_profile_id,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.accounts.update_profile.execute(command).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => map_update_profile_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: UpdateProfileCommandError) -> actix_web::HttpResponse {
    match err {
        UpdateProfileCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        UpdateProfileCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 100 characters")
        }
        UpdateProfileCommandError::NoFields => {
            ApiResponse::bad_request("NOTHING_TO_UPDATE", "At least one field must be provided")
        }
    }
}

fn map_update_profile_error(err: UpdateProfileError) -> actix_web::HttpResponse {
    match err {
        UpdateProfileError::ProfileNotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        UpdateProfileError::RepositoryError(msg) => {
            tracing::error!("Update profile failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
