use async_trait::async_trait;
use std::sync::Arc;

use crate::messaging::application::ports::incoming::use_cases::{
    SendMessageCommand, SendMessageError, SendMessageUseCase,
};
use crate::messaging::application::ports::outgoing::{
    MessageRecord, MessageRepository, NewMessage,
};

pub struct SendMessageService {
    repository: Arc<dyn MessageRepository + Send + Sync>,
}

impl SendMessageService {
    pub fn new(repository: Arc<dyn MessageRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SendMessageUseCase for SendMessageService {
    async fn execute(
        &self,
        command: SendMessageCommand,
    ) -> Result<MessageRecord, SendMessageError> {
        let message = NewMessage {
            sender_id: command.sender_id(),
            receiver_id: command.receiver_id(),
            content: command.content().to_string(),
            appointment_id: command.appointment_id(),
        };

        self.repository
            .send(message)
            .await
            .map_err(|err| SendMessageError::RepositoryError(err.to_string()))
    }
}
