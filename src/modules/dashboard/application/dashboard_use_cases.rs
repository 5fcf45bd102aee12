use std::sync::Arc;

use crate::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsUseCase, GetRecentActivityUseCase,
};

#[derive(Clone)]
pub struct DashboardUseCases {
    pub get_stats: Arc<dyn GetDashboardStatsUseCase + Send + Sync>,
    pub get_recent_activity: Arc<dyn GetRecentActivityUseCase + Send + Sync>,
}
