use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::appointments::application::ports::incoming::use_cases::{
    GetAppointmentError, GetAppointmentUseCase,
};
use crate::appointments::application::ports::outgoing::{AppointmentQuery, AppointmentRecord};

pub struct GetAppointmentService {
    query: Arc<dyn AppointmentQuery + Send + Sync>,
}

impl GetAppointmentService {
    pub fn new(query: Arc<dyn AppointmentQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetAppointmentUseCase for GetAppointmentService {
    async fn execute(&self, id: Uuid) -> Result<AppointmentRecord, GetAppointmentError> {
        self.query
            .get_appointment(id)
            .await
            .map_err(|err| GetAppointmentError::RepositoryError(err.to_string()))?
            .ok_or(GetAppointmentError::AppointmentNotFound)
    }
}
