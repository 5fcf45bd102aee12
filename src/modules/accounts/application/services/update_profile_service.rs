use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::accounts::application::ports::outgoing::{
    UpdateUserProfileData, UserProfileRecord, UserRepository, UserRepositoryError,
};
use crate::shared::store::StoreError;

pub struct UpdateProfileService {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UpdateProfileService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileService {
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserProfileRecord, UpdateProfileError> {
        let data = UpdateUserProfileData {
            name: command.name().cloned(),
            location: command.location().cloned(),
            farm_type: command.farm_type().cloned(),
            bio: command.bio().cloned(),
            contact_number: command.contact_number().cloned(),
            vet_profile_id: command.vet_profile_id(),
        };

        self.repository
            .update_profile(command.id(), data)
            .await
            .map_err(|err| match err {
                UserRepositoryError::Store(StoreError::NotFound { .. }) => {
                    UpdateProfileError::ProfileNotFound
                }
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
