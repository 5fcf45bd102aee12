use async_trait::async_trait;
use std::sync::Arc;

use crate::veterinarians::application::ports::incoming::use_cases::{
    RegisterVetCommand, RegisterVetError, RegisterVetUseCase,
};
use crate::veterinarians::application::ports::outgoing::{
    NewVeterinarian, VetRecord, VetRepository, VetRepositoryError,
};

pub struct RegisterVetService {
    repository: Arc<dyn VetRepository + Send + Sync>,
}

impl RegisterVetService {
    pub fn new(repository: Arc<dyn VetRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RegisterVetUseCase for RegisterVetService {
    async fn execute(&self, command: RegisterVetCommand) -> Result<VetRecord, RegisterVetError> {
        let vet = NewVeterinarian {
            user_id: command.user_id(),
            qualifications: command.qualifications().to_string(),
            specialization: command.specialization().to_string(),
            service_regions: command.service_regions().to_vec(),
            animal_types: command.animal_types().to_vec(),
            bio: command.bio().cloned(),
            contact_number: command.contact_number().cloned(),
        };

        self.repository.register(vet).await.map_err(|err| match err {
            VetRepositoryError::AlreadyRegistered => RegisterVetError::AlreadyRegistered,
            other => RegisterVetError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::accounts::application::domain::entities::UserId;
    use crate::veterinarians::application::domain::entities::VerificationStatus;
    use crate::veterinarians::application::ports::outgoing::UpdateVetProfileData;

    struct StubRepository {
        duplicate: bool,
    }

    #[async_trait]
    impl VetRepository for StubRepository {
        async fn register(&self, vet: NewVeterinarian) -> Result<VetRecord, VetRepositoryError> {
            if self.duplicate {
                return Err(VetRepositoryError::AlreadyRegistered);
            }
            Ok(VetRecord {
                id: Uuid::new_v4(),
                user_id: vet.user_id,
                qualifications: vet.qualifications,
                specialization: vet.specialization,
                service_regions: vet.service_regions,
                animal_types: vet.animal_types,
                verification_status: VerificationStatus::Pending,
                bio: vet.bio,
                contact_number: vet.contact_number,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn update_profile(
            &self,
            _id: Uuid,
            _data: UpdateVetProfileData,
        ) -> Result<VetRecord, VetRepositoryError> {
            unimplemented!()
        }

        async fn set_verification_status(
            &self,
            _id: Uuid,
            _status: VerificationStatus,
        ) -> Result<VetRecord, VetRepositoryError> {
            unimplemented!()
        }
    }

    fn command() -> RegisterVetCommand {
        RegisterVetCommand::new(
            UserId::from(Uuid::new_v4()),
            "BVM, University of Nairobi".to_string(),
            "Large animals".to_string(),
            vec!["Rift Valley".to_string()],
            vec!["cattle".to_string()],
            None,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn new_listing_starts_pending() {
        // Arrange
        let service = RegisterVetService::new(Arc::new(StubRepository { duplicate: false }));

        // Act
        let record = service.execute(command()).await.unwrap();

        // Assert
        assert_eq!(record.verification_status, VerificationStatus::Pending);
    }

    #[tokio::test]
    async fn second_listing_for_same_user_is_rejected() {
        // Arrange
        let service = RegisterVetService::new(Arc::new(StubRepository { duplicate: true }));

        // Act
        let result = service.execute(command()).await;

        // Assert
        assert!(matches!(result, Err(RegisterVetError::AlreadyRegistered)));
    }
}
