mod get_dashboard_stats_service;
mod get_recent_activity_service;

pub use get_dashboard_stats_service::GetDashboardStatsService;
pub use get_recent_activity_service::GetRecentActivityService;
