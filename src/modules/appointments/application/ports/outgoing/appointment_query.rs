use async_trait::async_trait;
use uuid::Uuid;

use super::appointment_repository::AppointmentRecord;
use crate::accounts::application::domain::entities::UserId;
use crate::shared::store::StoreError;

#[async_trait]
pub trait AppointmentQuery: Send + Sync {
    async fn get_appointment(&self, id: Uuid) -> Result<Option<AppointmentRecord>, StoreError>;

    /// An owner's bookings, newest appointment date first.
    async fn list_for_user(&self, user_id: UserId)
        -> Result<Vec<AppointmentRecord>, StoreError>;

    /// A vet's schedule, earliest appointment date first.
    async fn list_for_vet(&self, vet_id: Uuid) -> Result<Vec<AppointmentRecord>, StoreError>;

    async fn count_appointments(&self) -> Result<u64, StoreError>;

    /// Most recently created bookings, for the admin activity feed.
    async fn recent_appointments(
        &self,
        limit: u64,
    ) -> Result<Vec<AppointmentRecord>, StoreError>;
}
