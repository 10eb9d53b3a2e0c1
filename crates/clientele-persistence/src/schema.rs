//! Schema bootstrap for the SQLite store
//!
//! Creates the three registry tables if they do not exist. The foreign
//! key on `activity_log` is declared for documentation but not enforced;
//! the service layer deletes log rows before their owning client.

use sea_orm::{ConnectionTrait, DatabaseConnection};

const CREATE_CLIENTS: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    wechat TEXT,
    policy_type TEXT,
    coverage_amount REAL,
    policy_start_date TEXT,
    policy_end_date TEXT,
    status TEXT DEFAULT 'Active',
    created_at TEXT DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_ACTIVITY_LOG: &str = r#"
CREATE TABLE IF NOT EXISTS activity_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER,
    activity_type TEXT,
    description TEXT,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (client_id) REFERENCES clients (id)
)
"#;

const CREATE_SETTINGS: &str = r#"
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT
)
"#;

/// Create the registry tables if they do not exist
///
/// Safe to run on every startup.
pub async fn init_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    db.execute_unprepared(CREATE_CLIENTS).await?;
    db.execute_unprepared(CREATE_ACTIVITY_LOG).await?;
    db.execute_unprepared(CREATE_SETTINGS).await?;

    tracing::debug!("Registry schema initialized");

    Ok(())
}
