use async_trait::async_trait;

use super::user_repository::UserProfileRecord;
use crate::accounts::application::domain::entities::UserId;
use crate::shared::store::StoreError;

#[async_trait]
pub trait UserQuery: Send + Sync {
    /// `Ok(None)` is the missing-profile condition, a navigational
    /// signal rather than a failure.
    async fn get_profile(&self, id: UserId) -> Result<Option<UserProfileRecord>, StoreError>;

    async fn count_users(&self) -> Result<u64, StoreError>;

    /// Most recent signups first, for the admin activity feed.
    async fn recent_users(&self, limit: u64) -> Result<Vec<UserProfileRecord>, StoreError>;
}
