//! Clientele Common - Shared types and utilities
//!
//! This crate provides the foundational types used across all Clientele
//! components:
//! - Error types and error codes
//! - Domain constants (policy status values, activity types)
//! - Date and timestamp helpers

pub mod error;
pub mod utils;

// Re-exports for convenience
pub use error::{ErrorCode, RegistryError};
pub use utils::{format_date, timestamp_now};

/// Status assigned to a client when none is supplied
pub const STATUS_ACTIVE: &str = "Active";

/// Status marking a lapsed policy
pub const STATUS_EXPIRED: &str = "Expired";

/// Activity type written when a client record is created
pub const ACTIVITY_CREATED: &str = "Created";

/// Activity type written when a client record is updated
pub const ACTIVITY_UPDATED: &str = "Updated";

/// Storage format for policy dates (ISO calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format for row timestamps (matches SQLite CURRENT_TIMESTAMP)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
