//! Configuration management for the registry server
//!
//! Settings are layered: `conf/application.yml` (optional), then
//! environment variables with the `clientele` prefix, then command line
//! overrides.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use clientele_common::error::RegistryError;

use crate::startup::LoggingConfig;

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://clientele.db?mode=rwc";

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
    #[arg(long = "seed-demo-data")]
    seed_demo_data: bool,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> anyhow::Result<Self> {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("clientele")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml").required(false));

        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", v)
                .map_err(|e| RegistryError::ConfigError(e.to_string()))?;
        }
        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override("db.url", v)
                .map_err(|e| RegistryError::ConfigError(e.to_string()))?;
        }
        if args.seed_demo_data {
            config_builder = config_builder
                .set_override("demo.seed", true)
                .map_err(|e| RegistryError::ConfigError(e.to_string()))?;
        }

        let app_config = config_builder
            .build()
            .map_err(|e| RegistryError::ConfigError(e.to_string()))?;

        Ok(Configuration { config: app_config })
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .unwrap_or(DEFAULT_SERVER_PORT.into()) as u16
    }

    pub fn server_context_path(&self) -> String {
        self.config
            .get_string("server.contextPath")
            .unwrap_or("".to_string())
    }

    pub fn seed_demo_data(&self) -> bool {
        self.config.get_bool("demo.seed").unwrap_or(false)
    }

    /// Signing secret for session support; configurable but, like the
    /// settings table, a reserved extension point no endpoint reads
    pub fn secret_key(&self) -> String {
        self.config
            .get_string("server.secretKey")
            .unwrap_or_default()
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string("logging.dir").ok(),
            self.config.get_bool("logging.console").unwrap_or(true),
            self.config.get_bool("logging.file").unwrap_or(true),
            self.config
                .get_string("logging.level")
                .unwrap_or("info".to_string()),
        )
    }

    // ========================================================================
    // Database Configuration
    // ========================================================================

    pub fn database_url(&self) -> String {
        self.config
            .get_string("db.url")
            .unwrap_or(DEFAULT_DATABASE_URL.to_string())
    }

    pub async fn database_connection(
        &self,
    ) -> std::result::Result<DatabaseConnection, Box<dyn std::error::Error>> {
        let max_connections = self
            .config
            .get_int("db.pool.maximumPoolSize")
            .unwrap_or(10) as u32;
        let min_connections = self.config.get_int("db.pool.minimumPoolSize").unwrap_or(1) as u32;
        let connect_timeout = self
            .config
            .get_int("db.pool.connectionTimeout")
            .unwrap_or(30) as u64;
        let acquire_timeout = self.config.get_int("db.pool.acquireTimeout").unwrap_or(8) as u64;
        let idle_timeout = self.config.get_int("db.pool.idleTimeout").unwrap_or(10) as u64;
        let sqlx_logging = self.config.get_bool("db.pool.sqlxLogging").unwrap_or(false);

        let url = self.database_url();

        let mut opt = ConnectOptions::new(url);

        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .sqlx_logging(sqlx_logging)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            idle_timeout = idle_timeout,
            sqlx_logging = sqlx_logging,
            "Database connection pool configured"
        );

        let database_connection: DatabaseConnection = Database::connect(opt).await?;

        Ok(database_connection)
    }
}
