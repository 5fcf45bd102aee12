use async_trait::async_trait;
use uuid::Uuid;

use crate::appointments::application::ports::outgoing::AppointmentRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAppointmentError {
    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetAppointmentUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<AppointmentRecord, GetAppointmentError>;
}
