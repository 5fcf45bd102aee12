use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::shared::store::StoreError;

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub appointment_id: Option<Uuid>,
}

/// A stored message. Rows are append-only; the only mutation ever
/// applied is flipping `read`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRecord {
    pub id: Uuid,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
    pub appointment_id: Option<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new message with `read = false` and a server-side
    /// send time.
    async fn send(&self, message: NewMessage) -> Result<MessageRecord, MessageRepositoryError>;

    async fn mark_read(&self, id: Uuid) -> Result<MessageRecord, MessageRepositoryError>;
}
