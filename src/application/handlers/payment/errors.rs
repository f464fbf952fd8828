//! Payment order error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | Provider (invalid_request) | 400 |
//! | Provider (rate_limit_exceeded) | 429 |
//! | Provider (other) | 502 |

use crate::domain::foundation::ValidationError;
use crate::ports::PaymentError;

/// Errors from payment order operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentOrderError {
    /// Caller input was rejected before reaching the provider.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The provider call failed.
    #[error("Payment provider error: {0}")]
    Provider(#[from] PaymentError),
}

impl PaymentOrderError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentOrderError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            PaymentOrderError::ValidationFailed { message, .. } => message.clone(),
            PaymentOrderError::Provider(err) => err.message.clone(),
        }
    }
}

impl From<ValidationError> for PaymentOrderError {
    fn from(err: ValidationError) -> Self {
        PaymentOrderError::validation(err.field().to_string(), err.to_string())
    }
}
