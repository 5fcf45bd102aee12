use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::UserId,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    messaging::application::ports::incoming::use_cases::GetThreadError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/messages/{peer_id}")]
pub async fn get_thread_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let viewer = UserId::from(user.user_id);
    let peer = UserId::from(path.into_inner());

    match data.messaging.get_thread.execute(viewer, peer).await {
        Ok(messages) => ApiResponse::success(messages),
        Err(GetThreadError::RepositoryError(msg)) => {
            tracing::error!("Fetch thread failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
