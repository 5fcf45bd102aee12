use async_trait::async_trait;
use std::sync::Arc;

use crate::appointments::application::domain::entities::TransitionOutcome;
use crate::appointments::application::ports::incoming::use_cases::{
    TransitionAppointmentCommand, TransitionAppointmentError, TransitionAppointmentUseCase,
};
use crate::appointments::application::ports::outgoing::{
    AppointmentQuery, AppointmentRecord, AppointmentRepository, StatusWrite,
};

pub struct TransitionAppointmentService {
    repository: Arc<dyn AppointmentRepository + Send + Sync>,
    query: Arc<dyn AppointmentQuery + Send + Sync>,
}

impl TransitionAppointmentService {
    pub fn new(
        repository: Arc<dyn AppointmentRepository + Send + Sync>,
        query: Arc<dyn AppointmentQuery + Send + Sync>,
    ) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl TransitionAppointmentUseCase for TransitionAppointmentService {
    async fn execute(
        &self,
        command: TransitionAppointmentCommand,
    ) -> Result<AppointmentRecord, TransitionAppointmentError> {
        let appointment = self
            .query
            .get_appointment(command.appointment_id())
            .await
            .map_err(|err| TransitionAppointmentError::RepositoryError(err.to_string()))?
            .ok_or(TransitionAppointmentError::AppointmentNotFound)?;

        let write = match command.action().evaluate(appointment.status) {
            TransitionOutcome::Apply(status) => StatusWrite::Set(status),
            TransitionOutcome::Noop => StatusWrite::Touch,
            TransitionOutcome::Invalid => {
                return Err(TransitionAppointmentError::InvalidTransition {
                    from: appointment.status,
                    action: command.action(),
                });
            }
        };

        self.repository
            .write_status(command.appointment_id(), write, command.new_date_time())
            .await
            .map_err(|err| TransitionAppointmentError::RepositoryError(err.to_string()))
    }
}
