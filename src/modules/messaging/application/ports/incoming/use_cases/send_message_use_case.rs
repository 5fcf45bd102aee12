use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::ports::outgoing::MessageRecord;

//
// ──────────────────────────────────────────────────────────
// Send Message Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    sender_id: UserId,
    receiver_id: UserId,
    content: String,
    appointment_id: Option<Uuid>,
}

#[derive(Debug, thiserror::Error)]
pub enum SendMessageCommandError {
    #[error("Message content cannot be empty")]
    EmptyContent,
}

impl SendMessageCommand {
    pub fn new(
        sender_id: UserId,
        receiver_id: UserId,
        content: String,
        appointment_id: Option<Uuid>,
    ) -> Result<Self, SendMessageCommandError> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(SendMessageCommandError::EmptyContent);
        }

        Ok(Self {
            sender_id,
            receiver_id,
            content,
            appointment_id,
        })
    }

    pub fn sender_id(&self) -> UserId {
        self.sender_id
    }

    pub fn receiver_id(&self) -> UserId {
        self.receiver_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn appointment_id(&self) -> Option<Uuid> {
        self.appointment_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error + Incoming Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(&self, command: SendMessageCommand) -> Result<MessageRecord, SendMessageError>;
}
