use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::domain::entities::UserId;
use crate::accounts::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase,
};
use crate::accounts::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::shared::store::StoreError;

pub struct DeleteUserService {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl DeleteUserService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserService {
    async fn execute(&self, id: UserId) -> Result<(), DeleteUserError> {
        self.repository
            .delete_profile(id)
            .await
            .map_err(|err| match err {
                UserRepositoryError::Store(StoreError::NotFound { .. }) => {
                    DeleteUserError::UserNotFound
                }
                other => DeleteUserError::RepositoryError(other.to_string()),
            })
    }
}
