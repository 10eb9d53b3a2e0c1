//! Dashboard service layer
//!
//! Aggregate counts plus the two recency feeds. The activity feed is a
//! LEFT JOIN so entries whose client is gone still appear, with a null
//! client name.

use chrono::{Duration, NaiveDate};
use sea_orm::*;

use clientele_common::{STATUS_ACTIVE, STATUS_EXPIRED, format_date};
use clientele_persistence::entity::{activity_log, client};

use crate::model::{ActivityView, DashboardSummary};

const RECENT_CLIENTS: u64 = 5;
const RECENT_ACTIVITIES: u64 = 10;
const RENEWAL_HORIZON_DAYS: i64 = 30;

/// Build the dashboard summary for the given date
pub async fn summary(db: &DatabaseConnection, today: NaiveDate) -> anyhow::Result<DashboardSummary> {
    let today_str = format_date(today);
    let horizon = format_date(today + Duration::days(RENEWAL_HORIZON_DAYS));

    let total_clients = client::Entity::find().count(db).await?;

    let active_policies = client::Entity::find()
        .filter(client::Column::Status.eq(STATUS_ACTIVE))
        .count(db)
        .await?;

    let upcoming_renewals = client::Entity::find()
        .filter(client::Column::PolicyEndDate.between(today_str, horizon))
        .count(db)
        .await?;

    let expired_policies = client::Entity::find()
        .filter(client::Column::Status.eq(STATUS_EXPIRED))
        .count(db)
        .await?;

    let recent_clients = client::Entity::find()
        .order_by_desc(client::Column::CreatedAt)
        .order_by_desc(client::Column::Id)
        .limit(RECENT_CLIENTS)
        .all(db)
        .await?;

    let recent_activities: Vec<ActivityView> = activity_log::Entity::find()
        .find_also_related(client::Entity)
        .order_by_desc(activity_log::Column::CreatedAt)
        .order_by_desc(activity_log::Column::Id)
        .limit(RECENT_ACTIVITIES)
        .all(db)
        .await?
        .into_iter()
        .map(ActivityView::from)
        .collect();

    Ok(DashboardSummary {
        total_clients,
        active_policies,
        upcoming_renewals,
        expired_policies,
        recent_clients,
        recent_activities,
    })
}

#[cfg(test)]
mod tests {
    use clientele_persistence::init_schema;
    use sea_orm::{ConnectOptions, Database};

    use super::*;
    use crate::model::ClientForm;
    use crate::service;

    async fn test_db() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.expect("in-memory sqlite");
        init_schema(&db).await.expect("schema init");
        db
    }

    async fn add_client(db: &DatabaseConnection, name: &str, end: Option<&str>, status: &str) -> i64 {
        let form = ClientForm {
            name: name.to_string(),
            policy_end_date: end.map(str::to_string),
            status: Some(status.to_string()),
            ..Default::default()
        };
        service::client::create(db, &form).await.unwrap()
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).expect("valid date")
    }

    #[tokio::test]
    async fn test_counts() {
        let db = test_db().await;

        add_client(&db, "Chan Tai Man", Some("2025-01-15"), "Active").await;
        add_client(&db, "Ng Man Chun", Some("2024-12-01"), "Expired").await;
        add_client(&db, "Liu Xiao Ming", Some("2025-08-15"), "Active").await;

        let summary = summary(&db, fixed_today()).await.unwrap();

        assert_eq!(summary.total_clients, 3);
        assert_eq!(summary.active_policies, 2);
        // Only the 2025-01-15 end date falls inside [today, today+30]
        assert_eq!(summary.upcoming_renewals, 1);
        assert_eq!(summary.expired_policies, 1);
    }

    #[tokio::test]
    async fn test_expired_count_is_status_only() {
        let db = test_db().await;

        // Past end date but never marked expired: not counted
        add_client(&db, "Lapsed Active", Some("2024-01-01"), "Active").await;
        // Future end date but explicitly expired: counted
        add_client(&db, "Marked Expired", Some("2025-06-01"), "Expired").await;

        let summary = summary(&db, fixed_today()).await.unwrap();
        assert_eq!(summary.expired_policies, 1);
    }

    #[tokio::test]
    async fn test_recent_clients_capped_at_five() {
        let db = test_db().await;

        for i in 0..7 {
            add_client(&db, &format!("Client {}", i), None, "Active").await;
        }

        let summary = summary(&db, fixed_today()).await.unwrap();
        assert_eq!(summary.total_clients, 7);
        assert_eq!(summary.recent_clients.len(), 5);
        // Newest creation first
        assert_eq!(summary.recent_clients[0].name, "Client 6");
    }

    #[tokio::test]
    async fn test_activity_feed_left_joins_client_name() {
        let db = test_db().await;

        let id = add_client(&db, "Wong Siu Ming", None, "Active").await;
        service::activity::add_note(&db, id, "Call", "renewal chat")
            .await
            .unwrap();
        // Orphan note for a client that never existed
        service::activity::add_note(&db, 9999, "Email", "bounced")
            .await
            .unwrap();

        let summary = summary(&db, fixed_today()).await.unwrap();
        assert_eq!(summary.recent_activities.len(), 3);

        let orphan = summary
            .recent_activities
            .iter()
            .find(|a| a.client_id == 9999)
            .expect("orphan entry surfaces");
        assert!(orphan.client_name.is_none());

        let owned = summary
            .recent_activities
            .iter()
            .find(|a| a.client_id == id)
            .expect("owned entry surfaces");
        assert_eq!(owned.client_name.as_deref(), Some("Wong Siu Ming"));
    }

    #[tokio::test]
    async fn test_activity_feed_capped_at_ten() {
        let db = test_db().await;

        let id = add_client(&db, "Busy Client", None, "Active").await;
        for i in 0..12 {
            service::activity::add_note(&db, id, "Call", &format!("call {}", i))
                .await
                .unwrap();
        }

        let summary = summary(&db, fixed_today()).await.unwrap();
        assert_eq!(summary.recent_activities.len(), 10);
    }
}
