//! File-based logging with per-component log files.
//!
//! Components write to separate log files with daily rotation:
//!
//! | Log File        | Component               | Target Prefixes       |
//! |-----------------|-------------------------|-----------------------|
//! | clientele.log   | Root logger (all)       | (all)                 |
//! | registry.log    | Registry service layer  | clientele_registry    |
//! | persistence.log | Database persistence    | clientele_persistence |
//!
//! Log files are stored in `logs/` by default. Override with the
//! `CLIENTELE_LOG_DIR` environment variable or the `logging.dir` config.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Internal definition for a component log file.
struct ComponentLogDef {
    file_name: &'static str,
    targets: &'static [&'static str],
}

/// Component log definitions.
///
/// Each entry produces a separate rolling log file. Events are routed based
/// on their `tracing` target (Rust module path). The root `clientele.log`
/// file always captures *all* events regardless of target.
const COMPONENT_LOGS: &[ComponentLogDef] = &[
    ComponentLogDef {
        file_name: "registry.log",
        targets: &["clientele_registry"],
    },
    ComponentLogDef {
        file_name: "persistence.log",
        targets: &["clientele_persistence"],
    },
];

/// Log rotation policy
#[derive(Debug, Clone, Copy)]
pub enum LogRotation {
    Daily,
    Hourly,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Logging configuration for the entire application.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Base log directory (default: `logs/`)
    pub log_dir: PathBuf,
    /// Enable console output
    pub console_output: bool,
    /// Console log level
    pub console_level: Level,
    /// Enable file logging
    pub file_logging: bool,
    /// Default log level for files
    pub file_level: Level,
    /// Log rotation policy
    pub rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            console_output: true,
            console_level: Level::INFO,
            file_logging: true,
            file_level: Level::INFO,
            rotation: LogRotation::Daily,
        }
    }
}

impl LoggingConfig {
    /// Create from application configuration.
    pub fn from_config(
        log_dir: Option<String>,
        console_output: bool,
        file_logging: bool,
        level: String,
    ) -> Self {
        let log_dir = std::env::var("CLIENTELE_LOG_DIR")
            .ok()
            .or(log_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        let level = level.parse().unwrap_or(Level::INFO);

        Self {
            log_dir,
            console_output,
            console_level: level,
            file_logging,
            file_level: level,
            rotation: LogRotation::Daily,
        }
    }
}

/// Guard that keeps the logging system alive.
///
/// Holds file appender worker guards. Must be kept alive for the duration
/// of the application; dropping it flushes buffered log output.
pub struct LoggingGuard {
    _file_guards: Vec<WorkerGuard>,
}

/// Initialize the logging system with multi-file output.
///
/// This sets up:
/// - Console output (optional, human-readable format with colors)
/// - Root log file `clientele.log` that captures **all** events
/// - Component-specific log files with target-based routing
///
/// The `RUST_LOG` env var controls the level for console and root file.
/// Component log files use per-layer [`Targets`] filters.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, Box<dyn std::error::Error>> {
    if config.file_logging {
        std::fs::create_dir_all(&config.log_dir)?;
    }

    let mut guards: Vec<WorkerGuard> = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    // --- Console layer (human-readable with ANSI colors, per-layer EnvFilter) ---
    if config.console_output {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.console_level.to_string()));
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(filter);
        layers.push(Box::new(console_layer));
    }

    // --- File layers ---
    if config.file_logging {
        // Root log file: clientele.log (captures all events)
        let root_appender =
            RollingFileAppender::new(config.rotation.into(), &config.log_dir, "clientele.log");
        let (root_nb, root_guard) = tracing_appender::non_blocking(root_appender);
        guards.push(root_guard);

        let root_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.file_level.to_string()));
        let root_layer = fmt::layer()
            .with_writer(root_nb)
            .with_target(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_filter(root_filter);
        layers.push(Box::new(root_layer));

        // Component-specific log files with per-layer Targets filtering
        for component in COMPONENT_LOGS {
            let appender = RollingFileAppender::new(
                config.rotation.into(),
                &config.log_dir,
                component.file_name,
            );
            let (nb, guard) = tracing_appender::non_blocking(appender);
            guards.push(guard);

            // Component files capture everything from their targets; level
            // control lives in the root file and console filters.
            let mut targets = Targets::new();
            for target in component.targets {
                targets = targets.with_target(*target, LevelFilter::TRACE);
            }

            let layer = fmt::layer()
                .with_writer(nb)
                .with_target(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_filter(targets);
            layers.push(Box::new(layer));
        }
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))?;

    if config.file_logging {
        tracing::info!(
            log_dir = %config.log_dir.display(),
            component_files = COMPONENT_LOGS.len(),
            "File logging initialized: clientele.log (root) + {} component log files",
            COMPONENT_LOGS.len()
        );
    }

    Ok(LoggingGuard {
        _file_guards: guards,
    })
}
