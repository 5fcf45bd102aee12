use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::UserId,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    veterinarians::application::ports::incoming::use_cases::{
        UpdateVetProfileCommand, UpdateVetProfileCommandError, UpdateVetProfileError,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateVetProfileRequest {
    pub qualifications: Option<String>,
    pub specialization: Option<String>,
    pub service_regions: Option<Vec<String>>,
    pub animal_types: Option<Vec<String>>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
}

#[patch("/api/veterinarians/{vet_id}")]
pub async fn update_vet_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateVetProfileRequest>,
) -> impl Responder {
    let command = match UpdateVetProfileCommand::new(
        path.into_inner(),
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

    match data.veterinarians.update_vet_profile.execute(command).await {
        Ok(vet) => ApiResponse::success(vet),
        Err(UpdateVetProfileError::VetNotFound) => {
            ApiResponse::not_found("VET_NOT_FOUND", "Veterinarian not found")
        }
        Err(UpdateVetProfileError::NotOwner) => {
            ApiResponse::forbidden("NOT_LISTING_OWNER", "Only the listing owner may update it")
        }
        Err(UpdateVetProfileError::RepositoryError(msg)) => {
            tracing::error!("Update vet profile failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: UpdateVetProfileCommandError) -> actix_web::HttpResponse {
    match err {
        UpdateVetProfileCommandError::NoFields => {
            ApiResponse::bad_request("NOTHING_TO_UPDATE", "At least one field must be provided")
        }
        UpdateVetProfileCommandError::NoServiceRegions => ApiResponse::bad_request(
            "NO_SERVICE_REGIONS",
            "At least one service region is required",
        ),
    }
}
