use async_trait::async_trait;
use uuid::Uuid;

use crate::veterinarians::application::domain::entities::ReviewDecision;
use crate::veterinarians::application::ports::outgoing::VetRecord;

#[derive(Debug, Clone)]
pub struct ReviewVetCommand {
    pub vet_id: Uuid,
    pub decision: ReviewDecision,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewVetError {
    #[error("Veterinarian not found")]
    VetNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin review of a listing. Re-reviewing is allowed; the latest
/// verdict wins.
#[async_trait]
pub trait ReviewVetUseCase: Send + Sync {
    async fn execute(&self, command: ReviewVetCommand) -> Result<VetRecord, ReviewVetError>;
}
