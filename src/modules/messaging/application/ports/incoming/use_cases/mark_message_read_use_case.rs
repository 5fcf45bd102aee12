use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::ports::outgoing::MessageRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkMessageReadError {
    #[error("Message not found")]
    MessageNotFound,

    /// Only the addressee may mark a message read.
    #[error("Caller is not the message receiver")]
    NotReceiver,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkMessageReadUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        message_id: Uuid,
    ) -> Result<MessageRecord, MarkMessageReadError>;
}
