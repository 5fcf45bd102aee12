use async_trait::async_trait;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::ports::outgoing::MessageRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetThreadError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// The two-party thread, ascending by send time. Symmetric in its
/// arguments: `execute(a, b)` and `execute(b, a)` return the same
/// messages.
#[async_trait]
pub trait GetThreadUseCase: Send + Sync {
    async fn execute(
        &self,
        viewer: UserId,
        peer: UserId,
    ) -> Result<Vec<MessageRecord>, GetThreadError>;
}
