//! Main entry point for the client registry server.

use std::sync::Arc;

use clientele_server::{
    model::{common::AppState, config::Configuration},
    startup,
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new()?;

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    let server_address = configuration.server_address();
    let server_port = configuration.server_port();
    let context_path = configuration.server_context_path();

    // Connect and make sure the schema exists before serving traffic
    let database_connection = configuration.database_connection().await?;
    clientele_persistence::init_schema(&database_connection).await?;

    if configuration.seed_demo_data() {
        let today = chrono::Local::now().date_naive();
        let inserted =
            clientele_registry::service::seed::load_demo_data(&database_connection, today).await?;
        info!(inserted, "Demo data seeding finished");
    }

    let app_state = Arc::new(AppState {
        configuration,
        database_connection,
    });

    info!(
        "Starting registry server on {}:{}",
        server_address, server_port
    );
    let server = startup::api_server(app_state, context_path, server_address, server_port)?;

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Registry server shutting down gracefully");
        }
    }

    info!("Registry server shutdown complete");
    Ok(())
}
