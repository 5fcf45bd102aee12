use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    accounts::application::domain::entities::UserId,
    accounts::application::helpers::RoleGuardError,
    accounts::application::ports::incoming::use_cases::DeleteUserError,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/profile/{user_id}")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(err) = data.role_guard.require_admin(UserId::from(user.user_id)).await {
        return map_guard_error(err);
    }

    let target = UserId::from(path.into_inner());

    match data.accounts.delete_user.execute(target).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeleteUserError::RepositoryError(msg)) => {
            tracing::error!("Delete user failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn map_guard_error(err: RoleGuardError) -> actix_web::HttpResponse {
    match err {
        RoleGuardError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Admin privileges required")
        }
        RoleGuardError::ProfileNotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        RoleGuardError::RepositoryError(msg) => {
            tracing::error!("Role guard lookup failed: {}", msg);
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
        accounts::application::domain::entities::UserRole,
        accounts::application::ports::incoming::use_cases::DeleteUserUseCase,
        auth::application::ports::outgoing::token_provider::TokenProvider,
        tests::support::app_state_builder::TestAppStateBuilder,
        tests::support::stubs::StubTokenProvider,
    };

    #[derive(Clone)]
    struct MockDeleteUserUseCase {
        result: Result<(), DeleteUserError>,
    }

    #[async_trait]
    impl DeleteUserUseCase for MockDeleteUserUseCase {
        async fn execute(&self, _id: UserId) -> Result<(), DeleteUserError> {
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
    async fn admin_can_delete_user() {
        // Arrange
        let admin_id = Uuid::new_v4();
        let target = Uuid::new_v4();

        let state = TestAppStateBuilder::default()
            .with_caller_role(admin_id, UserRole::Admin)
            .with_delete_user(MockDeleteUserUseCase { result: Ok(()) })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::new(admin_id));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/profile/{target}"))
            .insert_header(bearer())
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn non_admin_is_forbidden() {
        // Arrange
        let caller = Uuid::new_v4();
        let target = Uuid::new_v4();

        let state = TestAppStateBuilder::default()
            .with_caller_role(caller, UserRole::Farmer)
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::new(caller));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/profile/{target}"))
            .insert_header(bearer())
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "FORBIDDEN");
    }

    #[actix_web::test]
    async fn deleting_unknown_user_returns_not_found() {
        // Arrange
        let admin_id = Uuid::new_v4();
        let target = Uuid::new_v4();

        let state = TestAppStateBuilder::default()
            .with_caller_role(admin_id, UserRole::Admin)
            .with_delete_user(MockDeleteUserUseCase {
                result: Err(DeleteUserError::UserNotFound),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::new(admin_id));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/profile/{target}"))
            .insert_header(bearer())
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "USER_NOT_FOUND");
    }
}
