use async_trait::async_trait;

use crate::accounts::application::domain::entities::UserId;
use crate::accounts::application::ports::outgoing::UserProfileRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    /// Navigational signal: the caller authenticated but never finished
    /// profile setup. Routes map this to 404, clients redirect to setup.
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<UserProfileRecord, FetchProfileError>;
}
