use async_trait::async_trait;

use crate::veterinarians::application::domain::entities::VerificationStatus;
use crate::veterinarians::application::ports::outgoing::VetRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetVeterinariansError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetVeterinariansUseCase: Send + Sync {
    async fn execute(
        &self,
        status: Option<VerificationStatus>,
    ) -> Result<Vec<VetRecord>, GetVeterinariansError>;
}
