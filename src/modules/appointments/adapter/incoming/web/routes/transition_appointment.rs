use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    appointments::application::domain::entities::AppointmentAction,
    appointments::application::ports::incoming::use_cases::{
        TransitionAppointmentCommand, TransitionAppointmentCommandError,
        TransitionAppointmentError,
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
struct RescheduleRequest {
    pub date_time: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Shared Transition Handling
// ──────────────────────────────────────────────────────────
//

async fn transition(
    data: web::Data<AppState>,
    appointment_id: Uuid,
    action: AppointmentAction,
    new_date_time: Option<DateTime<Utc>>,
) -> HttpResponse {
    let command = match TransitionAppointmentCommand::new(appointment_id, action, new_date_time) {
        Ok(cmd) => cmd,
        Err(TransitionAppointmentCommandError::MissingRescheduleDate) => {
            return ApiResponse::bad_request(
                "MISSING_DATE_TIME",
                "Reschedule requires a new date_time",
            );
        }
    };

    match data.appointments.transition_appointment.execute(command).await {
        Ok(appointment) => ApiResponse::success(appointment),
        Err(TransitionAppointmentError::AppointmentNotFound) => {
            ApiResponse::not_found("APPOINTMENT_NOT_FOUND", "Appointment not found")
        }
        Err(err @ TransitionAppointmentError::InvalidTransition { .. }) => {
            ApiResponse::conflict("INVALID_TRANSITION", &err.to_string())
        }
        Err(TransitionAppointmentError::RepositoryError(msg)) => {
            tracing::error!("Appointment transition failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[post("/api/appointments/{id}/approve")]
pub async fn approve_appointment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    transition(data, path.into_inner(), AppointmentAction::Approve, None).await
}

#[post("/api/appointments/{id}/confirm")]
pub async fn confirm_appointment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    transition(data, path.into_inner(), AppointmentAction::Confirm, None).await
}

#[post("/api/appointments/{id}/complete")]
pub async fn complete_appointment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    transition(data, path.into_inner(), AppointmentAction::Complete, None).await
}

#[post("/api/appointments/{id}/cancel")]
pub async fn cancel_appointment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    transition(data, path.into_inner(), AppointmentAction::Cancel, None).await
}

#[post("/api/appointments/{id}/reschedule")]
pub async fn reschedule_appointment_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<RescheduleRequest>,
) -> impl Responder {
    transition(
        data,
        path.into_inner(),
        AppointmentAction::Reschedule,
        Some(payload.date_time),
    )
    .await
}
