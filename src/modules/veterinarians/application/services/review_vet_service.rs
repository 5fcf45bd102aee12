use async_trait::async_trait;
use std::sync::Arc;

use crate::shared::store::StoreError;
use crate::veterinarians::application::ports::incoming::use_cases::{
    ReviewVetCommand, ReviewVetError, ReviewVetUseCase,
};
use crate::veterinarians::application::ports::outgoing::{
    VetRecord, VetRepository, VetRepositoryError,
};

pub struct ReviewVetService {
    repository: Arc<dyn VetRepository + Send + Sync>,
}

impl ReviewVetService {
    pub fn new(repository: Arc<dyn VetRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ReviewVetUseCase for ReviewVetService {
    async fn execute(&self, command: ReviewVetCommand) -> Result<VetRecord, ReviewVetError> {
        self.repository
            .set_verification_status(command.vet_id, command.decision.resulting_status())
            .await
            .map_err(|err| match err {
                VetRepositoryError::Store(StoreError::NotFound { .. }) => {
                    ReviewVetError::VetNotFound
                }
                other => ReviewVetError::RepositoryError(other.to_string()),
            })
    }
}
