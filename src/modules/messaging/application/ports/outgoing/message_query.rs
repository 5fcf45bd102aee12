use async_trait::async_trait;
use uuid::Uuid;

use super::message_repository::MessageRecord;
use crate::accounts::application::domain::entities::UserId;
use crate::shared::store::StoreError;

#[async_trait]
pub trait MessageQuery: Send + Sync {
    async fn get_message(&self, id: Uuid) -> Result<Option<MessageRecord>, StoreError>;

    /// Coarse thread pre-filter: rows where both endpoints are in
    /// `{a, b}`, ascending by send time. Callers narrow the result to
    /// the exact sender/receiver pairing themselves.
    async fn list_between(&self, a: UserId, b: UserId) -> Result<Vec<MessageRecord>, StoreError>;

    /// Everything the user sent or received, newest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<MessageRecord>, StoreError>;
}
