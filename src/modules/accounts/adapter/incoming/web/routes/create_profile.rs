use actix_web::{post, web, Responder};
use serde::Deserialize;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::{UserId, UserRole},
    accounts::application::ports::incoming::use_cases::{
        CreateProfileCommand, CreateProfileCommandError, CreateProfileError,
    },
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProfileRequest {
    /// Display name
    #[schema(example = "Siti Rahma")]
    pub name: String,

    /// Email address
    #[schema(example = "siti@example.com")]
    pub email: String,

    /// One of: farmer, pet_owner, veterinarian, admin
    #[schema(example = "farmer")]
    pub role: String,

    #[schema(example = "Bandung, West Java")]
    pub location: Option<String>,

    #[schema(example = "dairy")]
    pub farm_type: Option<String>,

    pub bio: Option<String>,

    #[schema(example = "+62-812-000-1234")]
    pub contact_number: Option<String>,

    pub vet_profile_id: Option<Uuid>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create the caller's profile
///
/// Creates the profile row tied to the authenticated user id. One profile per user.
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "profile",
    request_body = CreateProfileRequest,
    security(("BearerAuth" = [])),
    responses(
        (
            status = 201,
            description = "Profile created",
        ),
        (
            status = 400,
            description = "Invalid payload",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMPTY_NAME",
                    "message": "Name cannot be empty"
                }
            })
        ),
        (
            status = 409,
            description = "Profile already exists for this user",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROFILE_ALREADY_EXISTS",
                    "message": "Profile already exists"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/profile")]
pub async fn create_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateProfileRequest>,
) -> impl Responder {
    let role = match UserRole::from_str(&payload.role) {
        Ok(role) => role,
        Err(_) => {
            return ApiResponse::bad_request(
                "INVALID_ROLE",
                "Role must be one of: farmer, pet_owner, veterinarian, admin",
            )
        }
    };

    let command = match CreateProfileCommand::new(
        UserId::from(user.user_id),
        payload.name.clone(),
        payload.email.clone(),
        role,
        payload.location.clone(),
        payload.farm_type.clone(),
        payload.bio.clone(),
        payload.contact_number.clone(),
        payload.vet_profile_id,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.accounts.create_profile.execute(command).await {
        Ok(profile) => ApiResponse::created(profile),
        Err(err) => map_create_profile_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateProfileCommandError) -> actix_web::HttpResponse {
    match err {
        CreateProfileCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        CreateProfileCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 100 characters")
        }
        CreateProfileCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Email is not valid")
        }
    }
}

fn map_create_profile_error(err: CreateProfileError) -> actix_web::HttpResponse {
    match err {
        CreateProfileError::ProfileAlreadyExists => {
            ApiResponse::conflict("PROFILE_ALREADY_EXISTS", "Profile already exists")
        }
        CreateProfileError::RepositoryError(msg) => {
            tracing::error!("Create profile failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
