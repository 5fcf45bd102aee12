use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::ports::incoming::use_cases::{
    GetThreadError, GetThreadUseCase,
};
use crate::messaging::application::ports::outgoing::{MessageQuery, MessageRecord};

pub struct GetThreadService {
    query: Arc<dyn MessageQuery + Send + Sync>,
}

impl GetThreadService {
    pub fn new(query: Arc<dyn MessageQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetThreadUseCase for GetThreadService {
    async fn execute(
        &self,
        viewer: UserId,
        peer: UserId,
    ) -> Result<Vec<MessageRecord>, GetThreadError> {
        let candidates = self
            .query
            .list_between(viewer, peer)
            .await
            .map_err(|err| GetThreadError::RepositoryError(err.to_string()))?;

        // The store filter is a coarse membership check; this pass is
        // authoritative. It drops self-addressed rows the coarse
        // filter admits when viewer == peer endpoints overlap.
        let thread = candidates
            .into_iter()
            .filter(|m| {
                (m.sender_id == viewer && m.receiver_id == peer)
                    || (m.sender_id == peer && m.receiver_id == viewer)
            })
            .collect();

        Ok(thread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use crate::shared::store::StoreError;

    fn message(sender: UserId, receiver: UserId, minutes_ago: i64) -> MessageRecord {
        MessageRecord {
            id: Uuid::new_v4(),
            sender_id: sender,
            receiver_id: receiver,
            content: "hello".to_string(),
            sent_at: Utc::now() - Duration::minutes(minutes_ago),
            read: false,
            appointment_id: None,
        }
    }

    struct StubQuery {
        messages: Vec<MessageRecord>,
    }

    #[async_trait]
    impl MessageQuery for StubQuery {
        async fn get_message(&self, _id: Uuid) -> Result<Option<MessageRecord>, StoreError> {
            unimplemented!()
        }

        async fn list_between(
            &self,
            _a: UserId,
            _b: UserId,
        ) -> Result<Vec<MessageRecord>, StoreError> {
            Ok(self.messages.clone())
        }

        async fn list_for_user(&self, _user_id: UserId) -> Result<Vec<MessageRecord>, StoreError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn thread_is_symmetric() {
        // Arrange
        let a = UserId::from(Uuid::new_v4());
        let b = UserId::from(Uuid::new_v4());
        let messages = vec![message(a, b, 10), message(b, a, 5)];

        let service = GetThreadService::new(Arc::new(StubQuery {
            messages: messages.clone(),
        }));

        // Act
        let forward = service.execute(a, b).await.unwrap();
        let backward = service.execute(b, a).await.unwrap();

        // Assert
        let forward_ids: Vec<_> = forward.iter().map(|m| m.id).collect();
        let backward_ids: Vec<_> = backward.iter().map(|m| m.id).collect();
        assert_eq!(forward_ids, backward_ids);
        assert_eq!(forward.len(), 2);
    }

    #[tokio::test]
    async fn self_addressed_rows_are_dropped() {
        // Arrange
        let a = UserId::from(Uuid::new_v4());
        let b = UserId::from(Uuid::new_v4());
        // The coarse membership filter admits a→a and b→b rows.
        let messages = vec![message(a, a, 8), message(a, b, 6), message(b, b, 4)];

        let service = GetThreadService::new(Arc::new(StubQuery { messages }));

        // Act
        let thread = service.execute(a, b).await.unwrap();

        // Assert
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].sender_id, a);
        assert_eq!(thread[0].receiver_id, b);
    }
}
