use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{UserId, UserRole};
use crate::shared::store::StoreError;

// Input DTO for profile setup; the id comes from the bearer token.
#[derive(Debug, Clone)]
pub struct NewUserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub location: Option<String>,
    pub farm_type: Option<String>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
    pub vet_profile_id: Option<Uuid>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserProfileData {
    pub name: Option<String>,
    pub location: Option<String>,
    pub farm_type: Option<String>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
    pub vet_profile_id: Option<Uuid>,
}

// Unified output DTO for all operations that return profile data.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub location: Option<String>,
    pub farm_type: Option<String>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
    pub vet_profile_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Profile already exists")]
    AlreadyExists,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_profile(
        &self,
        data: NewUserProfile,
    ) -> Result<UserProfileRecord, UserRepositoryError>;

    async fn update_profile(
        &self,
        id: UserId,
        data: UpdateUserProfileData,
    ) -> Result<UserProfileRecord, UserRepositoryError>;

    /// Hard delete; the admin path is the only caller.
    async fn delete_profile(&self, id: UserId) -> Result<(), UserRepositoryError>;
}
