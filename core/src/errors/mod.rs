//! Domain-specific error types and error handling.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Core domain errors
///
/// Every failure that crosses a service boundary is one of these kinds. The
/// presentation layer maps each kind onto an HTTP status; the `Display` text
/// is safe to show to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("Incorrect OTP")]
    IncorrectOtp { remaining_attempts: Option<u32> },

    #[error("OTP has expired, please request a new one")]
    OtpExpired,

    #[error("Too many incorrect OTP attempts, please request a new one")]
    TooManyAttempts,

    #[error("Failed to send OTP: {message}")]
    DispatchFailed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// `"<resource> not found"`
    pub fn not_found(resource: &str) -> Self {
        DomainError::NotFound {
            message: format!("{} not found", resource),
        }
    }

    /// `"No <collection> found"`, used when a listing is empty
    pub fn empty(collection: &str) -> Self {
        DomainError::NotFound {
            message: format!("No {} found", collection),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
