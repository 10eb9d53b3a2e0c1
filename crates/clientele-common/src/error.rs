//! Error types and error codes for Clientele
//!
//! This module defines:
//! - `RegistryError`: Application-specific error enum
//! - `ErrorCode`: Structured error codes for API responses

use serde::{Deserialize, Serialize};

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("caused: {0}")]
    Validation(String),

    #[error("client '{0}' not exist")]
    ClientNotFound(i64),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

/// Error code structure for API responses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorCode<'a> {
    pub code: i32,
    pub message: &'a str,
}

// General success and error codes
pub const SUCCESS: ErrorCode<'static> = ErrorCode {
    code: 0,
    message: "success",
};

pub const PARAMETER_VALIDATE_ERROR: ErrorCode<'static> = ErrorCode {
    code: 20002,
    message: "parameter validate error",
};

pub const RESOURCE_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 20004,
    message: "resource not found",
};

pub const SERVER_ERROR: ErrorCode<'static> = ErrorCode {
    code: 30000,
    message: "server error",
};
