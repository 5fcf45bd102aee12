use async_trait::async_trait;
use std::sync::Arc;

use crate::veterinarians::application::ports::incoming::use_cases::{
    UpdateVetProfileCommand, UpdateVetProfileError, UpdateVetProfileUseCase,
};
use crate::veterinarians::application::ports::outgoing::{
    UpdateVetProfileData, VetQuery, VetRecord, VetRepository,
};

pub struct UpdateVetProfileService {
    repository: Arc<dyn VetRepository + Send + Sync>,
    query: Arc<dyn VetQuery + Send + Sync>,
}

impl UpdateVetProfileService {
    pub fn new(
        repository: Arc<dyn VetRepository + Send + Sync>,
        query: Arc<dyn VetQuery + Send + Sync>,
    ) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl UpdateVetProfileUseCase for UpdateVetProfileService {
    async fn execute(
        &self,
        command: UpdateVetProfileCommand,
    ) -> Result<VetRecord, UpdateVetProfileError> {
        let existing = self
            .query
            .get_vet(command.vet_id())
            .await
            .map_err(|err| UpdateVetProfileError::RepositoryError(err.to_string()))?
            .ok_or(UpdateVetProfileError::VetNotFound)?;

        if existing.user_id != command.caller() {
            return Err(UpdateVetProfileError::NotOwner);
        }

        let data = UpdateVetProfileData {
            qualifications: command.qualifications().cloned(),
            specialization: command.specialization().cloned(),
            service_regions: command.service_regions().cloned(),
            animal_types: command.animal_types().cloned(),
            bio: command.bio().cloned(),
            contact_number: command.contact_number().cloned(),
        };

        self.repository
            .update_profile(command.vet_id(), data)
            .await
            .map_err(|err| UpdateVetProfileError::RepositoryError(err.to_string()))
    }
}
