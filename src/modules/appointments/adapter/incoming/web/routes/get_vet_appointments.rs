use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    appointments::application::ports::incoming::use_cases::GetVetAppointmentsError,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    AppState,
};

/// A veterinarian's schedule, soonest first.
#[get("/api/appointments/vet/{vet_id}")]
pub async fn get_vet_appointments_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .appointments
        .get_vet_appointments
        .execute(path.into_inner())
        .await
    {
        Ok(appointments) => ApiResponse::success(appointments),
        Err(GetVetAppointmentsError::RepositoryError(msg)) => {
            tracing::error!("List vet appointments failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
