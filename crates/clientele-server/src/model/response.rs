//! HTTP response types for the registry server
//!
//! Every endpoint except the calendar feed and the CSV export wraps its
//! payload in `ApiResult`.

use actix_web::{HttpResponse, http::StatusCode};
use serde::{Deserialize, Serialize};

use clientele_common::error::{
    PARAMETER_VALIDATE_ERROR, RESOURCE_NOT_FOUND, RegistryError, SERVER_ERROR, SUCCESS,
};

/// Generic result wrapper for API responses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS.code,
            message: SUCCESS.message.to_string(),
            data,
        }
    }

    pub fn http_success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(data))
    }

    pub fn http_response(status: u16, code: i32, message: String, data: T) -> HttpResponse {
        HttpResponse::build(
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .json(Self {
            code,
            message,
            data,
        })
    }
}

impl ApiResult<String> {
    /// Create an internal server error response from an error
    pub fn http_internal_error<E: std::fmt::Display>(err: E) -> HttpResponse {
        HttpResponse::InternalServerError().json(Self {
            code: SERVER_ERROR.code,
            message: SERVER_ERROR.message.to_string(),
            data: err.to_string(),
        })
    }

    /// Create a bad request error response
    pub fn http_bad_request<E: std::fmt::Display>(err: E) -> HttpResponse {
        HttpResponse::BadRequest().json(Self {
            code: PARAMETER_VALIDATE_ERROR.code,
            message: PARAMETER_VALIDATE_ERROR.message.to_string(),
            data: err.to_string(),
        })
    }

    /// Create a not found error response
    pub fn http_not_found<E: std::fmt::Display>(err: E) -> HttpResponse {
        HttpResponse::NotFound().json(Self {
            code: RESOURCE_NOT_FOUND.code,
            message: RESOURCE_NOT_FOUND.message.to_string(),
            data: err.to_string(),
        })
    }
}

/// Map a service layer error onto the API status and code it stands for
pub fn http_error(err: anyhow::Error) -> HttpResponse {
    match err.downcast_ref::<RegistryError>() {
        Some(RegistryError::Validation(_)) => ApiResult::http_bad_request(&err),
        Some(RegistryError::ClientNotFound(_)) => ApiResult::http_not_found(&err),
        _ => ApiResult::http_internal_error(&err),
    }
}
