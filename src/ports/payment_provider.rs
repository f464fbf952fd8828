//! Payment provider port for external payment processing.
//!
//! Defines the contract for payment gateway integrations (e.g., Razorpay).
//! The surface is deliberately narrow: create an order, check a payment
//! signature. Anything else the provider offers stays behind the adapter.
//!
//! # Design
//!
//! - **Gateway agnostic**: Interface works with any order-based provider
//! - **No retries**: Failures surface to the caller exactly once
//! - **Default deny**: Signature checks never error, they return a verdict

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::payment::{
    OrderRecord, OrderRequest, SignatureVerdict, SignatureVerificationInput,
};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create an order with the provider.
    ///
    /// Every call mints a new provider-side order.
    async fn create_order(&self, request: OrderRequest) -> Result<OrderRecord, PaymentError>;

    /// Check a payment signature against the shared secret.
    ///
    /// Purely local; performs no I/O.
    fn verify_payment_signature(&self, input: &SignatureVerificationInput) -> SignatureVerdict;
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// Whether the operation could be retried by the caller.
    pub retryable: bool,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            retryable: code.is_retryable(),
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidRequest, message)
    }

    /// Create a rate limit error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::RateLimitExceeded, message)
    }

    /// Create a generic provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Provider rejected the request fields.
    InvalidRequest,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,

    /// Unknown error.
    Unknown,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::NetworkError | PaymentErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::InvalidRequest => "invalid_request",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
            PaymentErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn payment_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn PaymentProvider) {}
    }

    #[test]
    fn payment_error_retryable() {
        assert!(PaymentErrorCode::NetworkError.is_retryable());
        assert!(PaymentErrorCode::RateLimitExceeded.is_retryable());

        assert!(!PaymentErrorCode::AuthenticationError.is_retryable());
        assert!(!PaymentErrorCode::InvalidRequest.is_retryable());
        assert!(!PaymentErrorCode::ProviderError.is_retryable());
    }

    #[test]
    fn constructors_set_retryable_from_code() {
        assert!(PaymentError::network("timed out").retryable);
        assert!(!PaymentError::authentication("bad key").retryable);
    }

    #[test]
    fn payment_error_display() {
        let err = PaymentError::invalid_request("amount exceeds maximum amount allowed");
        assert!(err.to_string().contains("invalid_request"));
        assert!(err.to_string().contains("amount exceeds"));
    }

    #[test]
    fn with_provider_code_keeps_code() {
        let err = PaymentError::invalid_request("bad").with_provider_code("BAD_REQUEST_ERROR");
        assert_eq!(err.provider_code.as_deref(), Some("BAD_REQUEST_ERROR"));
        assert_eq!(err.code, PaymentErrorCode::InvalidRequest);
    }
}
