use async_trait::async_trait;
use uuid::Uuid;

use crate::appointments::application::ports::outgoing::AppointmentRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetVetAppointmentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetVetAppointmentsUseCase: Send + Sync {
    async fn execute(&self, vet_id: Uuid)
        -> Result<Vec<AppointmentRecord>, GetVetAppointmentsError>;
}
