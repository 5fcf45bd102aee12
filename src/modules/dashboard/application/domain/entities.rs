use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Headline tallies for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_appointments: u64,
    pub pending_vets: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Signup,
    Booking,
    VetRequest,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub subject_id: Uuid,
    pub summary: String,
    pub occurred_at: DateTime<Utc>,
}

/// Merge the per-source feeds into one, newest first, truncated to
/// `limit`. Each source is already capped, so the merge stays small.
pub fn merge_recent(mut items: Vec<ActivityItem>, limit: usize) -> Vec<ActivityItem> {
    items.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    items.truncate(limit);
    items
}
