use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::ports::incoming::use_cases::{
    CreateProfileCommand, CreateProfileError, CreateProfileUseCase,
};
use crate::accounts::application::ports::outgoing::{
    NewUserProfile, UserProfileRecord, UserRepository, UserRepositoryError,
};

pub struct CreateProfileService {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl CreateProfileService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CreateProfileUseCase for CreateProfileService {
    async fn execute(
        &self,
        command: CreateProfileCommand,
    ) -> Result<UserProfileRecord, CreateProfileError> {
        let profile = NewUserProfile {
            id: command.id(),
            name: command.name().to_string(),
            email: command.email().to_string(),
            role: command.role(),
            location: command.location().cloned(),
            farm_type: command.farm_type().cloned(),
            bio: command.bio().cloned(),
            contact_number: command.contact_number().cloned(),
            vet_profile_id: command.vet_profile_id(),
        };

        self.repository
            .create_profile(profile)
            .await
            .map_err(|err| match err {
                UserRepositoryError::AlreadyExists => CreateProfileError::ProfileAlreadyExists,
                other => CreateProfileError::RepositoryError(other.to_string()),
            })
    }
}
