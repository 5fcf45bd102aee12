use actix_web::{get, web, Responder};
use serde::Deserialize;
use std::str::FromStr;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    veterinarians::application::domain::entities::VerificationStatus,
    veterinarians::application::ports::incoming::use_cases::GetVeterinariansError,
    AppState,
};

#[derive(Debug, Deserialize)]
struct ListVetsQuery {
    status: Option<String>,
}

#[get("/api/veterinarians")]
pub async fn get_veterinarians_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    query: web::Query<ListVetsQuery>,
) -> impl Responder {
    let status = match &query.status {
        Some(raw) => match VerificationStatus::from_str(raw) {
            Ok(status) => Some(status),
            Err(_) => {
                return ApiResponse::bad_request(
                    "INVALID_STATUS",
                    "Status must be one of: pending, verified, rejected",
                )
            }
        },
        None => None,
    };

    match data.veterinarians.get_veterinarians.execute(status).await {
        Ok(vets) => ApiResponse::success(vets),
        Err(GetVeterinariansError::RepositoryError(msg)) => {
            tracing::error!("List veterinarians failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
