use async_trait::async_trait;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::domain::conversations::ConversationSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetConversationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetConversationsUseCase: Send + Sync {
    async fn execute(&self, viewer: UserId)
        -> Result<Vec<ConversationSummary>, GetConversationsError>;
}
