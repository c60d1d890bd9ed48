//! Error types for the vendor REST API.
//!
//! This module defines the error type returned by every handler, with
//! automatic conversion to a JSON error response.
//!
//! # Error Mapping
//!
//! Service errors are mapped to HTTP status codes and error codes:
//!
//! | Service Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | NotFound | 404 | not-found |
//! | InvalidInput | 400 | invalid |
//! | Internal | 500 | exception |
//!
//! Every error body has the shape
//! `{"error": {"status": 404, "code": "not-found", "message": "..."}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use vendor_service::ServiceError;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Vendor not found (HTTP 404).
    NotFound {
        /// The vendor id from the request path.
        id: i64,
    },

    /// Bad request - malformed path, body or field values (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the short machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } => "not-found",
            RestError::BadRequest { .. } => "invalid",
            RestError::UnsupportedMediaType { .. } => "not-supported",
            RestError::InternalError { .. } => "exception",
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => {
                write!(f, "Vendor not found: {}", id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    status: u16,
    code: &'a str,
    message: String,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            RestError::NotFound { id } => format!("Vendor {} not found", id),
            RestError::BadRequest { message } => message.clone(),
            RestError::UnsupportedMediaType { content_type } => {
                format!("Content type '{}' is not supported", content_type)
            }
            RestError::InternalError { message } => message.clone(),
        };

        let body = ErrorBody {
            error: ErrorDetail {
                status: status.as_u16(),
                code: self.code(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for RestError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { id } => RestError::NotFound { id },
            ServiceError::InvalidInput { message } => RestError::BadRequest { message },
            ServiceError::Internal { message } => RestError::InternalError { message },
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
