use async_trait::async_trait;

use crate::accounts::application::domain::entities::UserId;
use crate::appointments::application::ports::outgoing::AppointmentRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserAppointmentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetUserAppointmentsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId)
        -> Result<Vec<AppointmentRecord>, GetUserAppointmentsError>;
}
