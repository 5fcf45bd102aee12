use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::UserId,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    messaging::application::ports::incoming::use_cases::{
        SendMessageCommand, SendMessageCommandError, SendMessageError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct SendMessageRequest {
    pub receiver_id: Uuid,
    pub content: String,
    pub appointment_id: Option<Uuid>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/messages")]
pub async fn send_message_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<SendMessageRequest>,
) -> impl Responder {
    let command = match SendMessageCommand::new(
        UserId::from(user.user_id),
        UserId::from(payload.receiver_id),
        payload.content.clone(),
        payload.appointment_id,
    ) {
        Ok(cmd) => cmd,
        Err(SendMessageCommandError::EmptyContent) => {
            return ApiResponse::bad_request("EMPTY_CONTENT", "Message content cannot be empty");
        }
    };

    match data.messaging.send_message.execute(command).await {
        Ok(message) => ApiResponse::created(message),
        Err(SendMessageError::RepositoryError(msg)) => {
            tracing::error!("Send message failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
