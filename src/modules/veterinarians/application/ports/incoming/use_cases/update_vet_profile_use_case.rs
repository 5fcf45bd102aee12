use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::veterinarians::application::ports::outgoing::VetRecord;

//
// ──────────────────────────────────────────────────────────
// Update Vet Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateVetProfileCommand {
    vet_id: Uuid,
    caller: UserId,
    qualifications: Option<String>,
    specialization: Option<String>,
    service_regions: Option<Vec<String>>,
    animal_types: Option<Vec<String>>,
    bio: Option<String>,
    contact_number: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateVetProfileCommandError {
    #[error("Nothing to update")]
    NoFields,

    #[error("At least one service region is required")]
    NoServiceRegions,
}

impl UpdateVetProfileCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        vet_id: Uuid,
        caller: UserId,
        qualifications: Option<String>,
        specialization: Option<String>,
        service_regions: Option<Vec<String>>,
        animal_types: Option<Vec<String>>,
        bio: Option<String>,
        contact_number: Option<String>,
    ) -> Result<Self, UpdateVetProfileCommandError> {
        if qualifications.is_none()
            && specialization.is_none()
            && service_regions.is_none()
            && animal_types.is_none()
            && bio.is_none()
            && contact_number.is_none()
        {
            return Err(UpdateVetProfileCommandError::NoFields);
        }

        // A patch may not strip the listing of every region.
        if let Some(regions) = &service_regions {
            if regions.iter().all(|r| r.trim().is_empty()) {
                return Err(UpdateVetProfileCommandError::NoServiceRegions);
            }
        }

        Ok(Self {
            vet_id,
            caller,
            qualifications,
            specialization,
            service_regions,
            animal_types,
            bio,
            contact_number,
        })
    }

    pub fn vet_id(&self) -> Uuid {
        self.vet_id
    }

    pub fn caller(&self) -> UserId {
        self.caller
    }

    pub fn qualifications(&self) -> Option<&String> {
        self.qualifications.as_ref()
    }

    pub fn specialization(&self) -> Option<&String> {
        self.specialization.as_ref()
    }

    pub fn service_regions(&self) -> Option<&Vec<String>> {
        self.service_regions.as_ref()
    }

    pub fn animal_types(&self) -> Option<&Vec<String>> {
        self.animal_types.as_ref()
    }

    pub fn bio(&self) -> Option<&String> {
        self.bio.as_ref()
    }

    pub fn contact_number(&self) -> Option<&String> {
        self.contact_number.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error + Incoming Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateVetProfileError {
    #[error("Veterinarian not found")]
    VetNotFound,

    #[error("Only the listing owner may update it")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateVetProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateVetProfileCommand,
    ) -> Result<VetRecord, UpdateVetProfileError>;
}
