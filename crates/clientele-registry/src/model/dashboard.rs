//! Dashboard summary models

use serde::Serialize;

use clientele_persistence::entity::{activity_log, client};

/// Aggregate overview returned by the dashboard read
#[derive(Clone, Debug, Serialize)]
pub struct DashboardSummary {
    pub total_clients: u64,
    pub active_policies: u64,
    /// Policies ending within the next 30 days
    pub upcoming_renewals: u64,
    pub expired_policies: u64,
    pub recent_clients: Vec<client::Model>,
    pub recent_activities: Vec<ActivityView>,
}

/// Activity entry joined with its client's name.
///
/// `client_name` is None for orphaned entries (client deleted or never
/// existed), which still surface in the feed.
#[derive(Clone, Debug, Serialize)]
pub struct ActivityView {
    pub id: i64,
    pub client_id: i64,
    pub activity_type: String,
    pub description: Option<String>,
    pub created_at: String,
    pub client_name: Option<String>,
}

impl From<(activity_log::Model, Option<client::Model>)> for ActivityView {
    fn from((entry, client): (activity_log::Model, Option<client::Model>)) -> Self {
        ActivityView {
            id: entry.id,
            client_id: entry.client_id,
            activity_type: entry.activity_type,
            description: entry.description,
            created_at: entry.created_at,
            client_name: client.map(|c| c.name),
        }
    }
}
