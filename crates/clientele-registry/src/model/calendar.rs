//! Calendar feed model

use serde::Serialize;

use clientele_persistence::entity::client;

/// One renewal event for the external calendar widget.
///
/// Field names are part of the exchange format the widget consumes.
#[derive(Clone, Debug, Serialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub name: String,
    /// The client's policy_end_date
    pub date: String,
    pub policy_type: Option<String>,
    pub status: String,
}

impl CalendarEvent {
    /// Build an event from a client with a known policy end date
    pub fn from_client(client: client::Model, date: String) -> Self {
        CalendarEvent {
            id: client.id,
            name: client.name,
            date,
            policy_type: client.policy_type,
            status: client.status,
        }
    }
}
