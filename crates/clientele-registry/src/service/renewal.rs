//! Renewal service layer
//!
//! Date-window queries over policy_end_date. `today` is injected by the
//! caller; dates compare as ISO text, which orders correctly.

use chrono::{Duration, NaiveDate};
use sea_orm::*;

use clientele_common::{STATUS_EXPIRED, format_date};
use clientele_persistence::entity::client;

use crate::model::RenewalFilter;

/// List clients matching a renewal filter, ordered by policy_end_date
///
/// Window filters are inclusive on both ends. `Expired` matches explicit
/// "Expired" status regardless of date, plus any end date before today.
/// `All` returns every policy ending today or later.
pub async fn find_by_filter(
    db: &DatabaseConnection,
    filter: RenewalFilter,
    today: NaiveDate,
) -> anyhow::Result<Vec<client::Model>> {
    let today_str = format_date(today);

    let query = match filter {
        RenewalFilter::All => {
            client::Entity::find().filter(client::Column::PolicyEndDate.gte(today_str))
        }
        RenewalFilter::Expired => client::Entity::find().filter(
            Condition::any()
                .add(client::Column::Status.eq(STATUS_EXPIRED))
                .add(client::Column::PolicyEndDate.lt(today_str)),
        ),
        RenewalFilter::Within30 | RenewalFilter::Within60 | RenewalFilter::Within90 => {
            let days = filter.window_days().unwrap_or(0);
            let horizon = format_date(today + Duration::days(days));
            client::Entity::find()
                .filter(client::Column::PolicyEndDate.between(today_str, horizon))
        }
    };

    let clients = query
        .order_by_asc(client::Column::PolicyEndDate)
        .all(db)
        .await?;

    Ok(clients)
}
