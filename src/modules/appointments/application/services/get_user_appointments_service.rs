use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::domain::entities::UserId;
use crate::appointments::application::ports::incoming::use_cases::{
    GetUserAppointmentsError, GetUserAppointmentsUseCase,
};
use crate::appointments::application::ports::outgoing::{AppointmentQuery, AppointmentRecord};

pub struct GetUserAppointmentsService {
    query: Arc<dyn AppointmentQuery + Send + Sync>,
}

impl GetUserAppointmentsService {
    pub fn new(query: Arc<dyn AppointmentQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetUserAppointmentsUseCase for GetUserAppointmentsService {
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Vec<AppointmentRecord>, GetUserAppointmentsError> {
        self.query
            .list_for_user(user_id)
            .await
            .map_err(|err| GetUserAppointmentsError::RepositoryError(err.to_string()))
    }
}
