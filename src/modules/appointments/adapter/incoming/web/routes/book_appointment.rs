use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::UserId,
    api::schemas::ErrorResponse,
    appointments::application::ports::incoming::use_cases::{
        BookAppointmentCommand, BookAppointmentCommandError, BookAppointmentError,
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

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookAppointmentRequest {
    /// Veterinarian profile id
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub vet_id: Uuid,

    /// Requested slot, UTC
    #[schema(example = "2026-09-01T09:30:00Z")]
    pub date_time: DateTime<Utc>,

    /// Reason for the visit
    #[schema(example = "Calf vaccination")]
    pub reason: String,

    pub notes: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Book an appointment
///
/// Books a pending appointment with the given veterinarian for the authenticated user.
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "appointments",
    request_body = BookAppointmentRequest,
    security(("BearerAuth" = [])),
    responses(
        (
            status = 201,
            description = "Appointment booked with status pending",
        ),
        (
            status = 400,
            description = "Invalid payload",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMPTY_REASON",
                    "message": "Reason cannot be empty"
                }
            })
        ),
        (
            status = 404,
            description = "Veterinarian does not exist",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VET_NOT_FOUND",
                    "message": "Veterinarian not found"
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
#[post("/api/appointments")]
pub async fn book_appointment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<BookAppointmentRequest>,
) -> impl Responder {
    let command = match BookAppointmentCommand::new(
        UserId::from(user.user_id),
        payload.vet_id,
        payload.date_time,
        payload.reason.clone(),
        payload.notes.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(BookAppointmentCommandError::EmptyReason) => {
            return ApiResponse::bad_request("EMPTY_REASON", "Reason cannot be empty");
        }
    };

    match data.appointments.book_appointment.execute(command).await {
        Ok(appointment) => ApiResponse::created(appointment),
        Err(BookAppointmentError::VetNotFound) => {
            ApiResponse::not_found("VET_NOT_FOUND", "Veterinarian not found")
        }
        Err(BookAppointmentError::RepositoryError(msg)) => {
            tracing::error!("Book appointment failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::{
        appointments::application::ports::incoming::use_cases::BookAppointmentUseCase,
        appointments::application::ports::outgoing::AppointmentRecord,
        auth::application::ports::outgoing::token_provider::TokenProvider,
        tests::support::app_state_builder::TestAppStateBuilder,
        tests::support::stubs::{sample_appointment, StubTokenProvider},
    };

    #[derive(Clone)]
    struct MockBookAppointmentUseCase {
        result: Result<AppointmentRecord, BookAppointmentError>,
    }

    #[async_trait]
    impl BookAppointmentUseCase for MockBookAppointmentUseCase {
        async fn execute(
            &self,
            _command: BookAppointmentCommand,
        ) -> Result<AppointmentRecord, BookAppointmentError> {
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn bearer() -> (&'static str, &'static str) {
        ("Authorization", "Bearer test-token")
    }

    #[actix_web::test]
    async fn booking_returns_created() {
        // Arrange
        let user_id = Uuid::new_v4();
        let appointment = sample_appointment(UserId::from(user_id));

        let state = TestAppStateBuilder::default()
            .with_book_appointment(MockBookAppointmentUseCase {
                result: Ok(appointment),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::new(user_id));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(book_appointment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .insert_header(bearer())
            .set_json(serde_json::json!({
                "vet_id": Uuid::new_v4(),
                "date_time": "2026-09-14T09:00:00Z",
                "reason": "Calf vaccination"
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = read_json(resp).await;
        assert_eq!(json["data"]["status"], "pending");
    }

    #[actix_web::test]
    async fn blank_reason_returns_bad_request() {
        // Arrange
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default().build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::new(user_id));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(book_appointment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .insert_header(bearer())
            .set_json(serde_json::json!({
                "vet_id": Uuid::new_v4(),
                "date_time": "2026-09-14T09:00:00Z",
                "reason": "   "
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "EMPTY_REASON");
    }

    #[actix_web::test]
    async fn booking_against_unknown_vet_returns_not_found() {
        // Arrange
        let user_id = Uuid::new_v4();

        let state = TestAppStateBuilder::default()
            .with_book_appointment(MockBookAppointmentUseCase {
                result: Err(BookAppointmentError::VetNotFound),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::new(user_id));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(book_appointment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .insert_header(bearer())
            .set_json(serde_json::json!({
                "vet_id": Uuid::new_v4(),
                "date_time": "2026-09-14T09:00:00Z",
                "reason": "Calf vaccination"
            }))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "VET_NOT_FOUND");
    }
}
