use async_trait::async_trait;

use crate::accounts::application::domain::entities::UserId;
use crate::veterinarians::application::ports::outgoing::VetRecord;

//
// ──────────────────────────────────────────────────────────
// Register Vet Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterVetCommand {
    user_id: UserId,
    qualifications: String,
    specialization: String,
    service_regions: Vec<String>,
    animal_types: Vec<String>,
    bio: Option<String>,
    contact_number: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterVetCommandError {
    #[error("Qualifications cannot be empty")]
    EmptyQualifications,

    #[error("Specialization cannot be empty")]
    EmptySpecialization,

    #[error("Specialization too long")]
    SpecializationTooLong,

    #[error("At least one service region is required")]
    NoServiceRegions,
}

impl RegisterVetCommand {
    pub fn new(
        user_id: UserId,
        qualifications: String,
        specialization: String,
        service_regions: Vec<String>,
        animal_types: Vec<String>,
        bio: Option<String>,
        contact_number: Option<String>,
    ) -> Result<Self, RegisterVetCommandError> {
        let qualifications = qualifications.trim().to_string();
        if qualifications.is_empty() {
            return Err(RegisterVetCommandError::EmptyQualifications);
        }

        let specialization = specialization.trim().to_string();
        if specialization.is_empty() {
            return Err(RegisterVetCommandError::EmptySpecialization);
        }
        if specialization.len() > 100 {
            return Err(RegisterVetCommandError::SpecializationTooLong);
        }

        let service_regions: Vec<String> = service_regions
            .into_iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        if service_regions.is_empty() {
            return Err(RegisterVetCommandError::NoServiceRegions);
        }

        Ok(Self {
            user_id,
            qualifications,
            specialization,
            service_regions,
            animal_types,
            bio,
            contact_number,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn qualifications(&self) -> &str {
        &self.qualifications
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn service_regions(&self) -> &[String] {
        &self.service_regions
    }

    pub fn animal_types(&self) -> &[String] {
        &self.animal_types
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
pub enum RegisterVetError {
    #[error("User already has a veterinarian listing")]
    AlreadyRegistered,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterVetUseCase: Send + Sync {
    async fn execute(&self, command: RegisterVetCommand) -> Result<VetRecord, RegisterVetError>;
}
