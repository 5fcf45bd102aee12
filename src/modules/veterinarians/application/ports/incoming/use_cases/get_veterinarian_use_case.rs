use async_trait::async_trait;
use uuid::Uuid;

use crate::veterinarians::application::ports::outgoing::VetRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetVeterinarianError {
    #[error("Veterinarian not found")]
    VetNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetVeterinarianUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<VetRecord, GetVeterinarianError>;
}
