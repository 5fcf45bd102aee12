use async_trait::async_trait;

use crate::accounts::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin-only hard delete; the single deletion path in the system.
#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<(), DeleteUserError>;
}
