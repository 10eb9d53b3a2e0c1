//! Client service layer
//!
//! Create, read, list, update, delete, and search over the clients table.
//! Creation and update also write the implicit activity log entries.

use sea_orm::*;

use clientele_common::{
    ACTIVITY_CREATED, ACTIVITY_UPDATED, STATUS_ACTIVE, error::RegistryError, timestamp_now,
};
use clientele_persistence::entity::{activity_log, client};

use crate::model::{ClientDetail, ClientForm};

/// Create a new client and its "Created" log entry
///
/// Returns the new client id. Fails with `RegistryError::Validation` when
/// the name is empty after trimming.
pub async fn create(db: &DatabaseConnection, form: &ClientForm) -> anyhow::Result<i64> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(RegistryError::Validation("name is required".to_string()).into());
    }

    let now = timestamp_now();
    let entity = client::ActiveModel {
        name: Set(name.to_string()),
        email: Set(form.email.clone()),
        phone: Set(form.phone.clone()),
        wechat: Set(form.wechat.clone()),
        policy_type: Set(form.policy_type.clone()),
        coverage_amount: Set(form.coverage_amount),
        policy_start_date: Set(form.policy_start_date.clone()),
        policy_end_date: Set(form.policy_end_date.clone()),
        status: Set(form
            .status
            .clone()
            .unwrap_or_else(|| STATUS_ACTIVE.to_string())),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    };

    let client_id = client::Entity::insert(entity).exec(db).await?.last_insert_id;

    super::activity::append(db, client_id, ACTIVITY_CREATED, "Client added to system", &now)
        .await?;

    tracing::info!(client_id, name, "Client created");

    Ok(client_id)
}

/// Get a client by id
pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> anyhow::Result<client::Model> {
    client::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::ClientNotFound(id).into())
}

/// Get a client together with its activity history, newest first
pub async fn detail(db: &DatabaseConnection, id: i64) -> anyhow::Result<ClientDetail> {
    let client = get_by_id(db, id).await?;
    let activities = super::activity::find_by_client_id(db, id).await?;

    Ok(ClientDetail { client, activities })
}

/// List all clients ordered by name
pub async fn find_all(db: &DatabaseConnection) -> anyhow::Result<Vec<client::Model>> {
    let clients = client::Entity::find()
        .order_by_asc(client::Column::Name)
        .all(db)
        .await?;

    Ok(clients)
}

/// Replace all mutable fields of an existing client
///
/// Refreshes updated_at and appends an "Updated" log entry. Fails with
/// `RegistryError::ClientNotFound` when the id does not exist.
pub async fn update(db: &DatabaseConnection, id: i64, form: &ClientForm) -> anyhow::Result<()> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(RegistryError::Validation("name is required".to_string()).into());
    }

    let Some(existing) = client::Entity::find_by_id(id).one(db).await? else {
        return Err(RegistryError::ClientNotFound(id).into());
    };

    let now = timestamp_now();
    let mut entity: client::ActiveModel = existing.into();
    entity.name = Set(name.to_string());
    entity.email = Set(form.email.clone());
    entity.phone = Set(form.phone.clone());
    entity.wechat = Set(form.wechat.clone());
    entity.policy_type = Set(form.policy_type.clone());
    entity.coverage_amount = Set(form.coverage_amount);
    entity.policy_start_date = Set(form.policy_start_date.clone());
    entity.policy_end_date = Set(form.policy_end_date.clone());
    entity.status = Set(form
        .status
        .clone()
        .unwrap_or_else(|| STATUS_ACTIVE.to_string()));
    entity.updated_at = Set(now.clone());
    entity.update(db).await?;

    super::activity::append(db, id, ACTIVITY_UPDATED, "Client information updated", &now).await?;

    tracing::info!(client_id = id, "Client updated");

    Ok(())
}

/// Delete a client and all its activity log entries
///
/// Log rows go first to respect the declared relation. Deleting an
/// unknown id is a no-op reported as `false`.
pub async fn delete(db: &DatabaseConnection, id: i64) -> anyhow::Result<bool> {
    activity_log::Entity::delete_many()
        .filter(activity_log::Column::ClientId.eq(id))
        .exec(db)
        .await?;

    let res = client::Entity::delete_by_id(id).exec(db).await?;
    let deleted = res.rows_affected > 0;

    if deleted {
        tracing::info!(client_id = id, "Client deleted");
    }

    Ok(deleted)
}

/// Case-insensitive substring search over name, email, phone, and wechat
///
/// An empty query returns the full list, ordered by name either way.
pub async fn search(db: &DatabaseConnection, query: &str) -> anyhow::Result<Vec<client::Model>> {
    let query = query.trim();
    if query.is_empty() {
        return find_all(db).await;
    }

    let clients = client::Entity::find()
        .filter(
            Condition::any()
                .add(client::Column::Name.contains(query))
                .add(client::Column::Email.contains(query))
                .add(client::Column::Phone.contains(query))
                .add(client::Column::Wechat.contains(query)),
        )
        .order_by_asc(client::Column::Name)
        .all(db)
        .await?;

    Ok(clients)
}

#[cfg(test)]
mod tests {
    use clientele_common::error::RegistryError;
    use clientele_persistence::init_schema;
    use sea_orm::{ConnectOptions, Database};

    use super::*;

    async fn test_db() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.expect("in-memory sqlite");
        init_schema(&db).await.expect("schema init");
        db
    }

    fn named(name: &str) -> ClientForm {
        ClientForm {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let db = test_db().await;

        let first = create(&db, &named("Chan Tai Man")).await.unwrap();
        let second = create(&db, &named("Lam Wai Lin")).await.unwrap();
        let third = create(&db, &named("Wong Siu Ming")).await.unwrap();

        assert!(first < second);
        assert!(second < third);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let db = test_db().await;

        for name in ["", "   ", "\t"] {
            let err = create(&db, &named(name)).await.unwrap_err();
            assert!(matches!(
                err.downcast_ref::<RegistryError>(),
                Some(RegistryError::Validation(_))
            ));
        }

        // Nothing was written
        assert!(find_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_defaults_status_to_active() {
        let db = test_db().await;

        let id = create(&db, &named("Cheung Ka Yi")).await.unwrap();
        let client = get_by_id(&db, id).await.unwrap();
        assert_eq!(client.status, "Active");
        assert_eq!(client.created_at, client.updated_at);
    }

    #[tokio::test]
    async fn test_create_writes_one_created_entry() {
        let db = test_db().await;

        let id = create(&db, &named("Ng Man Chun")).await.unwrap();
        let entries = super::super::activity::find_by_client_id(&db, id)
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].activity_type, "Created");
        assert_eq!(entries[0].client_id, id);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = test_db().await;

        let err = get_by_id(&db, 9999).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::ClientNotFound(9999))
        ));
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_name() {
        let db = test_db().await;

        create(&db, &named("Wong Siu Ming")).await.unwrap();
        create(&db, &named("Chan Tai Man")).await.unwrap();
        create(&db, &named("Lam Wai Lin")).await.unwrap();

        let names: Vec<String> = find_all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Chan Tai Man", "Lam Wai Lin", "Wong Siu Ming"]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_logs() {
        let db = test_db().await;

        let id = create(&db, &named("Ho Chun Kit")).await.unwrap();

        let form = ClientForm {
            name: "Ho Chun Kit".to_string(),
            email: Some("ho.chunkit@email.com".to_string()),
            policy_type: Some("Life Insurance".to_string()),
            coverage_amount: Some(6_000_000.0),
            policy_end_date: Some("2025-05-01".to_string()),
            status: Some("Active".to_string()),
            ..Default::default()
        };
        update(&db, id, &form).await.unwrap();
        update(&db, id, &form).await.unwrap();

        let client = get_by_id(&db, id).await.unwrap();
        assert_eq!(client.email.as_deref(), Some("ho.chunkit@email.com"));
        assert_eq!(client.coverage_amount, Some(6_000_000.0));

        // One "Created" plus one "Updated" per update call
        let entries = super::super::activity::find_by_client_id(&db, id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 3);
        let updated = entries
            .iter()
            .filter(|e| e.activity_type == "Updated")
            .count();
        assert_eq!(updated, 2);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let db = test_db().await;

        let err = update(&db, 42, &named("Nobody")).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::ClientNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_client_and_history() {
        let db = test_db().await;

        let id = create(&db, &named("Liu Xiao Ming")).await.unwrap();
        super::super::activity::add_note(&db, id, "Call", "follow-up")
            .await
            .unwrap();

        assert!(delete(&db, id).await.unwrap());

        let err = get_by_id(&db, id).await.unwrap_err();
        assert!(err.downcast_ref::<RegistryError>().is_some());
        let entries = super::super::activity::find_by_client_id(&db, id)
            .await
            .unwrap();
        assert!(entries.is_empty());

        // Idempotent: a second delete is a no-op
        assert!(!delete(&db, id).await.unwrap());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let db = test_db().await;

        let form = ClientForm {
            name: "Wong Siu Ming".to_string(),
            email: Some("wong.siuming@email.com".to_string()),
            phone: Some("+852 9456 7890".to_string()),
            wechat: Some("wsm_finance".to_string()),
            ..Default::default()
        };
        create(&db, &form).await.unwrap();
        create(&db, &named("Chan Tai Man")).await.unwrap();

        let hits = search(&db, "wong").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Wong Siu Ming");

        // Matches across the other columns too
        assert_eq!(search(&db, "9456").await.unwrap().len(), 1);
        assert_eq!(search(&db, "WSM_FIN").await.unwrap().len(), 1);

        // No match is an empty list, not an error
        assert!(search(&db, "zzz").await.unwrap().is_empty());

        // Empty query degrades to the full list
        assert_eq!(search(&db, "").await.unwrap().len(), 2);
    }
}
