//! Application state shared across all handlers

use sea_orm::DatabaseConnection;

use super::config::Configuration;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub configuration: Configuration,
    pub database_connection: DatabaseConnection,
}
