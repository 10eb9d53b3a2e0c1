//! Demo data loader
//!
//! Seeds a small Hong Kong client book for demos and local development.
//! Runs through the regular service layer so each client also gets its
//! implicit "Created" entry, then backdates a few contact notes.

use chrono::{Duration, NaiveDate};
use sea_orm::*;

use clientele_persistence::entity::client;

use crate::model::ClientForm;
use crate::service;

struct SeedClient {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    wechat: &'static str,
    policy_type: &'static str,
    coverage_amount: f64,
    policy_start_date: &'static str,
    policy_end_date: &'static str,
    status: &'static str,
    notes: &'static [(&'static str, &'static str, i64)],
}

const SEED_CLIENTS: [SeedClient; 8] = [
    SeedClient {
        name: "Chan Tai Man",
        email: "chan.taiman@email.com",
        phone: "+852 9876 5432",
        wechat: "ctm_hk",
        policy_type: "Life Insurance",
        coverage_amount: 5_000_000.0,
        policy_start_date: "2024-01-15",
        policy_end_date: "2025-01-15",
        status: "Active",
        notes: &[
            ("Call", "Follow-up call about policy details", 14),
            ("Renewal", "Discussed renewal options", 3),
        ],
    },
    SeedClient {
        name: "Lam Wai Lin",
        email: "lam.wailin@email.com",
        phone: "+852 9123 4567",
        wechat: "lwl_2019",
        policy_type: "Health Insurance",
        coverage_amount: 3_000_000.0,
        policy_start_date: "2024-06-01",
        policy_end_date: "2025-06-01",
        status: "Active",
        notes: &[("WeChat", "Sent WeChat message about renewal", 21)],
    },
    SeedClient {
        name: "Wong Siu Ming",
        email: "wong.siuming@email.com",
        phone: "+852 9456 7890",
        wechat: "wsm_finance",
        policy_type: "Critical Illness",
        coverage_amount: 2_000_000.0,
        policy_start_date: "2024-03-20",
        policy_end_date: "2025-03-20",
        status: "Active",
        notes: &[
            ("Email", "Sent email with policy proposal", 45),
            ("Meeting", "In-person meeting to discuss coverage", 30),
            ("Follow-up", "Scheduled follow-up for next week", 7),
        ],
    },
    SeedClient {
        name: "Cheung Ka Yi",
        email: "cheung.kayi@email.com",
        phone: "+852 9678 1234",
        wechat: "cky_design",
        policy_type: "Investment Linked",
        coverage_amount: 1_000_000.0,
        policy_start_date: "2024-09-01",
        policy_end_date: "2025-02-10",
        status: "Active",
        notes: &[("Call", "Follow-up call about policy details", 10)],
    },
    SeedClient {
        name: "Ng Man Chun",
        email: "ng.manchun@email.com",
        phone: "+852 9234 5678",
        wechat: "nmc_sports",
        policy_type: "Accident Insurance",
        coverage_amount: 500_000.0,
        policy_start_date: "2023-12-01",
        policy_end_date: "2024-12-01",
        status: "Expired",
        notes: &[
            ("Renewal", "Discussed renewal options", 60),
            ("Other", "General inquiry received", 25),
        ],
    },
    SeedClient {
        name: "Liu Xiao Ming",
        email: "liu.xiaoming@email.com",
        phone: "+852 9345 6789",
        wechat: "lxm_business",
        policy_type: "General Insurance",
        coverage_amount: 800_000.0,
        policy_start_date: "2024-08-15",
        policy_end_date: "2025-08-15",
        status: "Active",
        notes: &[("Claim", "Explained claim process", 18)],
    },
    SeedClient {
        name: "Leung Hoi Yan",
        email: "leung.hoiyan@email.com",
        phone: "+852 9567 8901",
        wechat: "lhy_teacher",
        policy_type: "Travel Insurance",
        coverage_amount: 1_000_000.0,
        policy_start_date: "2025-01-10",
        policy_end_date: "2025-02-10",
        status: "Active",
        notes: &[("Email", "Sent email with policy proposal", 5)],
    },
    SeedClient {
        name: "Ho Chun Kit",
        email: "ho.chunkit@email.com",
        phone: "+852 9789 0123",
        wechat: "hck_tech",
        policy_type: "Life Insurance",
        coverage_amount: 6_000_000.0,
        policy_start_date: "2024-11-01",
        policy_end_date: "2025-05-01",
        status: "Active",
        notes: &[
            ("Meeting", "In-person meeting to discuss coverage", 40),
            ("Follow-up", "Scheduled follow-up for next week", 2),
        ],
    },
];

/// Load the demo client book unless the registry already has clients
///
/// Returns the number of clients inserted (0 when skipped).
pub async fn load_demo_data(db: &DatabaseConnection, today: NaiveDate) -> anyhow::Result<u64> {
    let existing = client::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::info!(existing, "Registry not empty, skipping demo data");
        return Ok(0);
    }

    for seed in &SEED_CLIENTS {
        let form = ClientForm {
            name: seed.name.to_string(),
            email: Some(seed.email.to_string()),
            phone: Some(seed.phone.to_string()),
            wechat: Some(seed.wechat.to_string()),
            policy_type: Some(seed.policy_type.to_string()),
            coverage_amount: Some(seed.coverage_amount),
            policy_start_date: Some(seed.policy_start_date.to_string()),
            policy_end_date: Some(seed.policy_end_date.to_string()),
            status: Some(seed.status.to_string()),
        };
        let id = service::client::create(db, &form).await?;

        for (activity_type, description, days_ago) in seed.notes {
            let created_at = (today - Duration::days(*days_ago))
                .format("%Y-%m-%d 10:00:00")
                .to_string();
            service::activity::append(db, id, activity_type, description, &created_at).await?;
        }
    }

    let inserted = SEED_CLIENTS.len() as u64;
    tracing::info!(inserted, "Demo data loaded");

    Ok(inserted)
}
