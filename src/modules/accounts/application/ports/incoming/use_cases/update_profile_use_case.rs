use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::accounts::application::ports::outgoing::UserProfileRecord;

//
// ──────────────────────────────────────────────────────────
// Update Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    id: UserId,
    name: Option<String>,
    location: Option<String>,
    farm_type: Option<String>,
    bio: Option<String>,
    contact_number: Option<String>,
    vet_profile_id: Option<Uuid>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Nothing to update")]
    NoFields,
}

impl UpdateProfileCommand {
    pub fn new(
        id: UserId,
        name: Option<String>,
        location: Option<String>,
        farm_type: Option<String>,
        bio: Option<String>,
        contact_number: Option<String>,
        vet_profile_id: Option<Uuid>,
    ) -> Result<Self, UpdateProfileCommandError> {
        let name = match name {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(UpdateProfileCommandError::EmptyName);
                }
                if trimmed.len() > 100 {
                    return Err(UpdateProfileCommandError::NameTooLong);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        if name.is_none()
            && location.is_none()
            && farm_type.is_none()
            && bio.is_none()
            && contact_number.is_none()
            && vet_profile_id.is_none()
        {
            return Err(UpdateProfileCommandError::NoFields);
        }

        Ok(Self {
            id,
            name,
            location,
            farm_type,
            bio,
            contact_number,
            vet_profile_id,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    pub fn location(&self) -> Option<&String> {
        self.location.as_ref()
    }

    pub fn farm_type(&self) -> Option<&String> {
        self.farm_type.as_ref()
    }

    pub fn bio(&self) -> Option<&String> {
        self.bio.as_ref()
    }

    pub fn contact_number(&self) -> Option<&String> {
        self.contact_number.as_ref()
    }

    pub fn vet_profile_id(&self) -> Option<Uuid> {
        self.vet_profile_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error + Incoming Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserProfileRecord, UpdateProfileError>;
}
