//! Export and calendar feed service layer
//!
//! Both read the full client list; the export serializes it as CSV with a
//! fixed column order, the calendar feed projects renewal events.

use sea_orm::*;

use clientele_persistence::entity::client;

use crate::model::CalendarEvent;

/// Fixed export column order; locale never changes it
pub const EXPORT_HEADERS: [&str; 11] = [
    "ID",
    "Name",
    "Email",
    "Phone",
    "WeChat",
    "Policy Type",
    "Coverage",
    "Start Date",
    "End Date",
    "Status",
    "Created",
];

/// Serialize all clients (ordered by name) as CSV
pub async fn export_csv(db: &DatabaseConnection) -> anyhow::Result<String> {
    let clients = super::client::find_all(db).await?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;

    for c in &clients {
        writer.write_record([
            c.id.to_string(),
            c.name.clone(),
            c.email.clone().unwrap_or_default(),
            c.phone.clone().unwrap_or_default(),
            c.wechat.clone().unwrap_or_default(),
            c.policy_type.clone().unwrap_or_default(),
            c.coverage_amount.map(|v| v.to_string()).unwrap_or_default(),
            c.policy_start_date.clone().unwrap_or_default(),
            c.policy_end_date.clone().unwrap_or_default(),
            c.status.clone(),
            c.created_at.clone(),
        ])?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Renewal events for every client with a policy end date
pub async fn calendar_events(db: &DatabaseConnection) -> anyhow::Result<Vec<CalendarEvent>> {
    let clients = client::Entity::find()
        .filter(client::Column::PolicyEndDate.is_not_null())
        .all(db)
        .await?;

    let events = clients
        .into_iter()
        .filter_map(|c| {
            c.policy_end_date
                .clone()
                .map(|date| CalendarEvent::from_client(c, date))
        })
        .collect();

    Ok(events)
}
