use async_trait::async_trait;
use std::sync::Arc;

use crate::appointments::application::ports::incoming::use_cases::{
    BookAppointmentCommand, BookAppointmentError, BookAppointmentUseCase,
};
use crate::appointments::application::ports::outgoing::{
    AppointmentRecord, AppointmentRepository, NewAppointment,
};
use crate::veterinarians::application::ports::outgoing::VetQuery;

pub struct BookAppointmentService {
    repository: Arc<dyn AppointmentRepository + Send + Sync>,
    vet_query: Arc<dyn VetQuery + Send + Sync>,
}

impl BookAppointmentService {
    pub fn new(
        repository: Arc<dyn AppointmentRepository + Send + Sync>,
        vet_query: Arc<dyn VetQuery + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            vet_query,
        }
    }
}

#[async_trait]
impl BookAppointmentUseCase for BookAppointmentService {
    async fn execute(
        &self,
        command: BookAppointmentCommand,
    ) -> Result<AppointmentRecord, BookAppointmentError> {
        // Bookings must reference a real listing.
        let vet = self
            .vet_query
            .get_vet(command.vet_id())
            .await
            .map_err(|err| BookAppointmentError::RepositoryError(err.to_string()))?;

        if vet.is_none() {
            return Err(BookAppointmentError::VetNotFound);
        }

        let appointment = NewAppointment {
            user_id: command.user_id(),
            vet_id: command.vet_id(),
            date_time: command.date_time(),
            reason: command.reason().to_string(),
            notes: command.notes().cloned(),
        };

        self.repository
            .book(appointment)
            .await
            .map_err(|err| BookAppointmentError::RepositoryError(err.to_string()))
    }
}
