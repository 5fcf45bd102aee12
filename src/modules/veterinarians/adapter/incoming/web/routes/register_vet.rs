use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    accounts::application::domain::entities::UserId,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    veterinarians::application::ports::incoming::use_cases::{
        RegisterVetCommand, RegisterVetCommandError, RegisterVetError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct RegisterVetRequest {
    pub qualifications: String,
    pub specialization: String,
    pub service_regions: Vec<String>,
    #[serde(default)]
    pub animal_types: Vec<String>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/veterinarians")]
pub async fn register_vet_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<RegisterVetRequest>,
) -> impl Responder {
    let command = match RegisterVetCommand::new(
        UserId::from(user.user_id),
        payload.qualifications.clone(),
        payload.specialization.clone(),
        payload.service_regions.clone(),
        payload.animal_types.clone(),
        payload.bio.clone(),
        payload.contact_number.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.veterinarians.register_vet.execute(command).await {
        Ok(vet) => ApiResponse::created(vet),
        Err(RegisterVetError::AlreadyRegistered) => ApiResponse::conflict(
            "VET_ALREADY_REGISTERED",
            "User already has a veterinarian listing",
        ),
        Err(RegisterVetError::RepositoryError(msg)) => {
            tracing::error!("Register vet failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: RegisterVetCommandError) -> actix_web::HttpResponse {
    match err {
        RegisterVetCommandError::EmptyQualifications => {
            ApiResponse::bad_request("EMPTY_QUALIFICATIONS", "Qualifications cannot be empty")
        }
        RegisterVetCommandError::EmptySpecialization => {
            ApiResponse::bad_request("EMPTY_SPECIALIZATION", "Specialization cannot be empty")
        }
        RegisterVetCommandError::SpecializationTooLong => ApiResponse::bad_request(
            "SPECIALIZATION_TOO_LONG",
            "Specialization must not exceed 100 characters",
        ),
        RegisterVetCommandError::NoServiceRegions => ApiResponse::bad_request(
            "NO_SERVICE_REGIONS",
            "At least one service region is required",
        ),
    }
}
