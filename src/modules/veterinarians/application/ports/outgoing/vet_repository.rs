use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::shared::store::StoreError;
use crate::veterinarians::application::domain::entities::VerificationStatus;

#[derive(Debug, Clone)]
pub struct NewVeterinarian {
    pub user_id: UserId,
    pub qualifications: String,
    pub specialization: String,
    pub service_regions: Vec<String>,
    pub animal_types: Vec<String>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
}

/// `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateVetProfileData {
    pub qualifications: Option<String>,
    pub specialization: Option<String>,
    pub service_regions: Option<Vec<String>>,
    pub animal_types: Option<Vec<String>>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VetRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub qualifications: String,
    pub specialization: String,
    pub service_regions: Vec<String>,
    pub animal_types: Vec<String>,
    pub verification_status: VerificationStatus,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VetRepositoryError {
    #[error("User already has a veterinarian listing")]
    AlreadyRegistered,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[async_trait]
pub trait VetRepository: Send + Sync {
    /// New listings always land in pending, whatever the caller sent.
    async fn register(&self, vet: NewVeterinarian) -> Result<VetRecord, VetRepositoryError>;

    async fn update_profile(
        &self,
        id: Uuid,
        data: UpdateVetProfileData,
    ) -> Result<VetRecord, VetRepositoryError>;

    async fn set_verification_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
    ) -> Result<VetRecord, VetRepositoryError>;
}
