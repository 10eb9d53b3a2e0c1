//! Activity log service layer
//!
//! Note appends and per-client history. The client id is deliberately not
//! checked against the clients table: the relation is unenforced and
//! orphaned rows are an accepted outcome (they only ever surface in the
//! dashboard feed, with a null client name).

use sea_orm::*;

use clientele_common::timestamp_now;
use clientele_persistence::entity::activity_log;

/// Append a log entry with an explicit timestamp
///
/// Used by client create/update for the implicit entries and by seed data
/// for backdated history.
pub async fn append(
    db: &DatabaseConnection,
    client_id: i64,
    activity_type: &str,
    description: &str,
    created_at: &str,
) -> anyhow::Result<i64> {
    let entity = activity_log::ActiveModel {
        client_id: Set(client_id),
        activity_type: Set(activity_type.to_string()),
        description: Set(Some(description.to_string())),
        created_at: Set(created_at.to_string()),
        ..Default::default()
    };

    let id = activity_log::Entity::insert(entity)
        .exec(db)
        .await?
        .last_insert_id;

    Ok(id)
}

/// Append a user-submitted note with the current timestamp
pub async fn add_note(
    db: &DatabaseConnection,
    client_id: i64,
    activity_type: &str,
    description: &str,
) -> anyhow::Result<i64> {
    let id = append(db, client_id, activity_type, description, &timestamp_now()).await?;

    tracing::info!(client_id, activity_type, "Note added");

    Ok(id)
}

/// All entries for a client, newest first
pub async fn find_by_client_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> anyhow::Result<Vec<activity_log::Model>> {
    let entries = activity_log::Entity::find()
        .filter(activity_log::Column::ClientId.eq(client_id))
        .order_by_desc(activity_log::Column::CreatedAt)
        .order_by_desc(activity_log::Column::Id)
        .all(db)
        .await?;

    Ok(entries)
}
