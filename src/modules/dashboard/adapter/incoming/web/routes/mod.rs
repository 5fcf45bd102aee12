pub mod get_recent_activity;
pub mod get_stats;

pub use get_recent_activity::get_recent_activity_handler;
pub use get_stats::get_stats_handler;
