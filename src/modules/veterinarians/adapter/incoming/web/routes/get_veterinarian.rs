use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    veterinarians::application::ports::incoming::use_cases::GetVeterinarianError,
    AppState,
};

#[get("/api/veterinarians/{vet_id}")]
pub async fn get_veterinarian_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .veterinarians
        .get_veterinarian
        .execute(path.into_inner())
        .await
    {
        Ok(vet) => ApiResponse::success(vet),
        Err(GetVeterinarianError::VetNotFound) => {
            ApiResponse::not_found("VET_NOT_FOUND", "Veterinarian not found")
        }
        Err(GetVeterinarianError::RepositoryError(msg)) => {
            tracing::error!("Get veterinarian failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
