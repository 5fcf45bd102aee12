use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::UserId,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    messaging::application::ports::incoming::use_cases::MarkMessageReadError,
    shared::api::ApiResponse,
    AppState,
};

#[post("/api/messages/{id}/read")]
pub async fn mark_message_read_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .messaging
        .mark_message_read
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(message) => ApiResponse::success(message),
        Err(MarkMessageReadError::MessageNotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(MarkMessageReadError::NotReceiver) => ApiResponse::forbidden(
            "NOT_MESSAGE_RECEIVER",
            "Only the receiver can mark a message read",
        ),
        Err(MarkMessageReadError::RepositoryError(msg)) => {
            tracing::error!("Mark message read failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
