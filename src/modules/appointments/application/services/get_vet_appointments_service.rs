use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::appointments::application::ports::incoming::use_cases::{
    GetVetAppointmentsError, GetVetAppointmentsUseCase,
};
use crate::appointments::application::ports::outgoing::{AppointmentQuery, AppointmentRecord};

pub struct GetVetAppointmentsService {
    query: Arc<dyn AppointmentQuery + Send + Sync>,
}

impl GetVetAppointmentsService {
    pub fn new(query: Arc<dyn AppointmentQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetVetAppointmentsUseCase for GetVetAppointmentsService {
    async fn execute(
        &self,
        vet_id: Uuid,
    ) -> Result<Vec<AppointmentRecord>, GetVetAppointmentsError> {
        self.query
            .list_for_vet(vet_id)
            .await
            .map_err(|err| GetVetAppointmentsError::RepositoryError(err.to_string()))
    }
}
