use actix_web::{get, web, Responder};

use crate::{
    accounts::application::domain::entities::UserId,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    messaging::application::ports::incoming::use_cases::GetConversationsError,
    shared::api::ApiResponse,
    AppState,
};

/// Derived summaries, one per counterparty, recomputed per request.
#[get("/api/conversations")]
pub async fn get_conversations_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .messaging
        .get_conversations
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(conversations) => ApiResponse::success(conversations),
        Err(GetConversationsError::RepositoryError(msg)) => {
            tracing::error!("Fetch conversations failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
