use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    appointments::application::ports::incoming::use_cases::GetAppointmentError,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/appointments/{id}")]
pub async fn get_appointment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .appointments
        .get_appointment
        .execute(path.into_inner())
        .await
    {
        Ok(appointment) => ApiResponse::success(appointment),
        Err(GetAppointmentError::AppointmentNotFound) => {
            ApiResponse::not_found("APPOINTMENT_NOT_FOUND", "Appointment not found")
        }
        Err(GetAppointmentError::RepositoryError(msg)) => {
            tracing::error!("Fetch appointment failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
