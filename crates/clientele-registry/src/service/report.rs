//! Report service layer
//!
//! Three independent aggregations: coverage per policy type, client count
//! per status, and new clients per calendar month over the trailing six
//! months.

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use sea_orm::*;

use clientele_common::format_date;
use clientele_persistence::entity::client;

use crate::model::{MonthlyNewClients, PolicyTypeBreakdown, ReportSummary, StatusBreakdown};

const TRAILING_MONTHS: u32 = 6;

/// Build all three report aggregations for the given date
pub async fn summarize(db: &DatabaseConnection, today: NaiveDate) -> anyhow::Result<ReportSummary> {
    let policy_breakdown = policy_type_breakdown(db).await?;
    let status_breakdown = status_breakdown(db).await?;
    let monthly_new = monthly_new_clients(db, today).await?;

    Ok(ReportSummary {
        policy_breakdown,
        status_breakdown,
        monthly_new,
    })
}

/// Count and coverage sum per policy type, excluding null/empty types
async fn policy_type_breakdown(db: &DatabaseConnection) -> anyhow::Result<Vec<PolicyTypeBreakdown>> {
    let rows = client::Entity::find()
        .select_only()
        .column(client::Column::PolicyType)
        .column_as(client::Column::Id.count(), "count")
        .column_as(client::Column::CoverageAmount.sum(), "total")
        .filter(client::Column::PolicyType.is_not_null())
        .filter(client::Column::PolicyType.ne(""))
        .group_by(client::Column::PolicyType)
        .order_by_asc(client::Column::PolicyType)
        .into_tuple::<(String, i64, Option<f64>)>()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(policy_type, count, total)| PolicyTypeBreakdown {
            policy_type,
            count,
            total_coverage: total.unwrap_or(0.0),
        })
        .collect())
}

/// Client count per status value
async fn status_breakdown(db: &DatabaseConnection) -> anyhow::Result<Vec<StatusBreakdown>> {
    let rows = client::Entity::find()
        .select_only()
        .column(client::Column::Status)
        .column_as(client::Column::Id.count(), "count")
        .group_by(client::Column::Status)
        .order_by_asc(client::Column::Status)
        .into_tuple::<(String, i64)>()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(status, count)| StatusBreakdown { status, count })
        .collect())
}

/// New clients per `YYYY-MM` month over the trailing six months,
/// most recent month first
async fn monthly_new_clients(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> anyhow::Result<Vec<MonthlyNewClients>> {
    let cutoff = today
        .checked_sub_months(Months::new(TRAILING_MONTHS))
        .unwrap_or(today);

    let timestamps: Vec<String> = client::Entity::find()
        .select_only()
        .column(client::Column::CreatedAt)
        .filter(client::Column::CreatedAt.gte(format_date(cutoff)))
        .into_tuple::<String>()
        .all(db)
        .await?;

    // Bucket by the YYYY-MM prefix of the stored timestamp
    let mut by_month: BTreeMap<String, i64> = BTreeMap::new();
    for ts in timestamps {
        let month: String = ts.chars().take(7).collect();
        *by_month.entry(month).or_default() += 1;
    }

    Ok(by_month
        .into_iter()
        .rev()
        .map(|(month, count)| MonthlyNewClients { month, count })
        .collect())
}

#[cfg(test)]
mod tests {
    use clientele_persistence::init_schema;
    use sea_orm::{ActiveValue::Set, ConnectOptions, Database};

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

    async fn add_policy(db: &DatabaseConnection, name: &str, policy_type: Option<&str>, coverage: Option<f64>) {
        let form = ClientForm {
            name: name.to_string(),
            policy_type: policy_type.map(str::to_string),
            coverage_amount: coverage,
            ..Default::default()
        };
        service::client::create(db, &form).await.unwrap();
    }

    async fn insert_backdated(db: &DatabaseConnection, name: &str, created_at: &str) {
        let entity = clientele_persistence::entity::client::ActiveModel {
            name: Set(name.to_string()),
            status: Set("Active".to_string()),
            created_at: Set(created_at.to_string()),
            updated_at: Set(created_at.to_string()),
            ..Default::default()
        };
        clientele_persistence::entity::client::Entity::insert(entity)
            .exec(db)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_policy_breakdown_sums_coverage() {
        let db = test_db().await;

        add_policy(&db, "Chan Tai Man", Some("Life Insurance"), Some(5_000_000.0)).await;
        add_policy(&db, "Ho Chun Kit", Some("Life Insurance"), Some(6_000_000.0)).await;
        add_policy(&db, "Lam Wai Lin", Some("Health Insurance"), Some(3_000_000.0)).await;
        // Null and empty policy types are excluded
        add_policy(&db, "No Type", None, Some(1_000_000.0)).await;
        add_policy(&db, "Empty Type", Some(""), Some(1_000_000.0)).await;

        let report = summarize(&db, fixed_today()).await.unwrap();

        assert_eq!(report.policy_breakdown.len(), 2);
        let life = report
            .policy_breakdown
            .iter()
            .find(|b| b.policy_type == "Life Insurance")
            .unwrap();
        assert_eq!(life.count, 2);
        assert_eq!(life.total_coverage, 11_000_000.0);
    }

    #[tokio::test]
    async fn test_policy_breakdown_handles_null_coverage() {
        let db = test_db().await;

        add_policy(&db, "Uncovered", Some("Travel Insurance"), None).await;

        let report = summarize(&db, fixed_today()).await.unwrap();
        assert_eq!(report.policy_breakdown.len(), 1);
        assert_eq!(report.policy_breakdown[0].count, 1);
        assert_eq!(report.policy_breakdown[0].total_coverage, 0.0);
    }

    #[tokio::test]
    async fn test_status_breakdown() {
        let db = test_db().await;

        for name in ["A", "B", "C"] {
            let form = ClientForm {
                name: name.to_string(),
                status: Some("Active".to_string()),
                ..Default::default()
            };
            service::client::create(&db, &form).await.unwrap();
        }
        let form = ClientForm {
            name: "D".to_string(),
            status: Some("Expired".to_string()),
            ..Default::default()
        };
        service::client::create(&db, &form).await.unwrap();

        let report = summarize(&db, fixed_today()).await.unwrap();
        assert_eq!(
            report.status_breakdown,
            vec![
                StatusBreakdown {
                    status: "Active".to_string(),
                    count: 3
                },
                StatusBreakdown {
                    status: "Expired".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_monthly_new_clients_trailing_window() {
        let db = test_db().await;
        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();

        insert_backdated(&db, "December A", "2024-12-05 10:00:00").await;
        insert_backdated(&db, "December B", "2024-12-18 10:00:00").await;
        insert_backdated(&db, "October", "2024-10-02 10:00:00").await;
        // Before the 6-month cutoff (2024-06-20): excluded
        insert_backdated(&db, "Old", "2024-05-01 10:00:00").await;

        let report = summarize(&db, today).await.unwrap();
        assert_eq!(
            report.monthly_new,
            vec![
                MonthlyNewClients {
                    month: "2024-12".to_string(),
                    count: 2
                },
                MonthlyNewClients {
                    month: "2024-10".to_string(),
                    count: 1
                },
            ]
        );
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).expect("valid date")
    }
}
