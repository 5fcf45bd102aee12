use async_trait::async_trait;

use crate::dashboard::application::domain::entities::DashboardStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDashboardStatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetDashboardStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError>;
}
