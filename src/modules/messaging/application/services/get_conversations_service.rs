use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::domain::conversations::{
    derive_conversations, ConversationSummary,
};
use crate::messaging::application::ports::incoming::use_cases::{
    GetConversationsError, GetConversationsUseCase,
};
use crate::messaging::application::ports::outgoing::MessageQuery;

pub struct GetConversationsService {
    query: Arc<dyn MessageQuery + Send + Sync>,
}

impl GetConversationsService {
    pub fn new(query: Arc<dyn MessageQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetConversationsUseCase for GetConversationsService {
    async fn execute(
        &self,
        viewer: UserId,
    ) -> Result<Vec<ConversationSummary>, GetConversationsError> {
        let messages = self
            .query
            .list_for_user(viewer)
            .await
            .map_err(|err| GetConversationsError::RepositoryError(err.to_string()))?;

        Ok(derive_conversations(viewer, &messages))
    }
}
