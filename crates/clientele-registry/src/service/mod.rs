//! Registry service layer
//!
//! Database operations behind every registry endpoint. Each function is a
//! single best-effort unit of work; failures surface directly to the
//! caller as `anyhow::Error`, with `RegistryError` inside for the cases
//! the API maps to specific statuses.

pub mod activity;
pub mod client;
pub mod dashboard;
pub mod export;
pub mod renewal;
pub mod report;
pub mod seed;
