use async_trait::async_trait;
use uuid::Uuid;

use super::vet_repository::VetRecord;
use crate::accounts::application::domain::entities::UserId;
use crate::shared::store::StoreError;
use crate::veterinarians::application::domain::entities::VerificationStatus;

#[async_trait]
pub trait VetQuery: Send + Sync {
    async fn get_vet(&self, id: Uuid) -> Result<Option<VetRecord>, StoreError>;

    async fn get_vet_by_user(&self, user_id: UserId) -> Result<Option<VetRecord>, StoreError>;

    /// Directory listing, newest first. `None` means every status.
    async fn list_vets(
        &self,
        status: Option<VerificationStatus>,
    ) -> Result<Vec<VetRecord>, StoreError>;

    /// Listings still awaiting an admin decision.
    async fn count_pending(&self) -> Result<u64, StoreError>;

    /// Newest pending listings, for the admin activity feed.
    async fn recent_pending(&self, limit: u64) -> Result<Vec<VetRecord>, StoreError>;
}
