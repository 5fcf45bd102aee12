use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::UserId,
    accounts::application::ports::incoming::use_cases::FetchProfileError,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    AppState,
};

/// Own profile; 404 here tells the client to run profile setup.
#[get("/api/profile")]
pub async fn fetch_own_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(&data, UserId::from(user.user_id)).await
}

#[get("/api/profile/{user_id}")]
pub async fn fetch_profile_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    fetch(&data, UserId::from(path.into_inner())).await
}

async fn fetch(data: &web::Data<AppState>, id: UserId) -> actix_web::HttpResponse {
    match data.accounts.fetch_profile.execute(id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(FetchProfileError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        Err(FetchProfileError::RepositoryError(msg)) => {
            tracing::error!("Fetch profile failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
