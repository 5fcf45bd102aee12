use async_trait::async_trait;

use crate::dashboard::application::domain::entities::ActivityItem;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecentActivityError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetRecentActivityUseCase: Send + Sync {
    /// Newest-first merged feed of signups, bookings and pending vet
    /// requests, truncated to `limit`.
    async fn execute(&self, limit: u64) -> Result<Vec<ActivityItem>, GetRecentActivityError>;
}
