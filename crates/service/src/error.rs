//! Error types for vendor service operations.

// Variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// Errors a [`VendorService`](crate::core::VendorService) can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No vendor exists with the given id.
    #[error("vendor not found: {id}")]
    NotFound { id: i64 },

    /// The supplied DTO cannot be applied.
    #[error("invalid vendor: {message}")]
    InvalidInput { message: String },

    /// Anything else that went wrong inside the service.
    #[error("internal service error: {message}")]
    Internal { message: String },
}

impl ServiceError {
    /// Shorthand for [`ServiceError::InvalidInput`].
    pub fn invalid(message: impl Into<String>) -> Self {
        ServiceError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
