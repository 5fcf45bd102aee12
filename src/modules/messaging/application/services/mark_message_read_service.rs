use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::ports::incoming::use_cases::{
    MarkMessageReadError, MarkMessageReadUseCase,
};
use crate::messaging::application::ports::outgoing::{
    MessageQuery, MessageRecord, MessageRepository,
};

pub struct MarkMessageReadService {
    repository: Arc<dyn MessageRepository + Send + Sync>,
    query: Arc<dyn MessageQuery + Send + Sync>,
}

impl MarkMessageReadService {
    pub fn new(
        repository: Arc<dyn MessageRepository + Send + Sync>,
        query: Arc<dyn MessageQuery + Send + Sync>,
    ) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl MarkMessageReadUseCase for MarkMessageReadService {
    async fn execute(
        &self,
        caller: UserId,
        message_id: Uuid,
    ) -> Result<MessageRecord, MarkMessageReadError> {
        let message = self
            .query
            .get_message(message_id)
            .await
            .map_err(|err| MarkMessageReadError::RepositoryError(err.to_string()))?
            .ok_or(MarkMessageReadError::MessageNotFound)?;

        if message.receiver_id != caller {
            return Err(MarkMessageReadError::NotReceiver);
        }

        self.repository
            .mark_read(message_id)
            .await
            .map_err(|err| MarkMessageReadError::RepositoryError(err.to_string()))
    }
}
