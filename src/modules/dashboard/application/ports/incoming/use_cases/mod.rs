mod get_dashboard_stats_use_case;
mod get_recent_activity_use_case;

pub use get_dashboard_stats_use_case::{GetDashboardStatsError, GetDashboardStatsUseCase};
pub use get_recent_activity_use_case::{GetRecentActivityError, GetRecentActivityUseCase};
