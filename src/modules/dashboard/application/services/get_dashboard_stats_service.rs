use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::ports::outgoing::UserQuery;
use crate::appointments::application::ports::outgoing::AppointmentQuery;
use crate::dashboard::application::domain::entities::DashboardStats;
use crate::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsError, GetDashboardStatsUseCase,
};
use crate::veterinarians::application::ports::outgoing::VetQuery;

pub struct GetDashboardStatsService {
    users: Arc<dyn UserQuery + Send + Sync>,
    appointments: Arc<dyn AppointmentQuery + Send + Sync>,
    vets: Arc<dyn VetQuery + Send + Sync>,
}

impl GetDashboardStatsService {
    pub fn new(
        users: Arc<dyn UserQuery + Send + Sync>,
        appointments: Arc<dyn AppointmentQuery + Send + Sync>,
        vets: Arc<dyn VetQuery + Send + Sync>,
    ) -> Self {
        Self {
            users,
            appointments,
            vets,
        }
    }
}

#[async_trait]
impl GetDashboardStatsUseCase for GetDashboardStatsService {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        let total_users = self
            .users
            .count_users()
            .await
            .map_err(|err| GetDashboardStatsError::RepositoryError(err.to_string()))?;

        let total_appointments = self
            .appointments
            .count_appointments()
            .await
            .map_err(|err| GetDashboardStatsError::RepositoryError(err.to_string()))?;

        let pending_vets = self
            .vets
            .count_pending()
            .await
            .map_err(|err| GetDashboardStatsError::RepositoryError(err.to_string()))?;

        Ok(DashboardStats {
            total_users,
            total_appointments,
            pending_vets,
        })
    }
}
