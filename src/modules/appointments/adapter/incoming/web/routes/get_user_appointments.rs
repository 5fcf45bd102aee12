use actix_web::{get, web, Responder};

use crate::{
    accounts::application::domain::entities::UserId,
    appointments::application::ports::incoming::use_cases::GetUserAppointmentsError,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    AppState,
};

/// The caller's own appointment history, newest first.
#[get("/api/appointments")]
pub async fn get_user_appointments_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .appointments
        .get_user_appointments
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(appointments) => ApiResponse::success(appointments),
        Err(GetUserAppointmentsError::RepositoryError(msg)) => {
            tracing::error!("List appointments failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
