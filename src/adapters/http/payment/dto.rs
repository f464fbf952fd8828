//! HTTP DTOs (Data Transfer Objects) for payment endpoints.
//!
//! These types define the JSON request/response structure for the payment API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a payment order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in whole rupees.
    pub amount: i64,
    /// Caller's receipt reference.
    pub receipt: String,
}

/// Values posted back by the checkout after a payment.
///
/// Accepts both the checkout's own field names and short aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifySignatureRequest {
    #[serde(alias = "order_id")]
    pub razorpay_order_id: String,
    #[serde(alias = "payment_id")]
    pub razorpay_payment_id: String,
    #[serde(alias = "signature")]
    pub razorpay_signature: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a signature check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifySignatureResponse {
    pub verified: bool,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_request_accepts_checkout_field_names() {
        let json = r#"{
            "razorpay_order_id": "order_abc",
            "razorpay_payment_id": "pay_xyz",
            "razorpay_signature": "sig"
        }"#;
        let req: VerifySignatureRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.razorpay_order_id, "order_abc");
        assert_eq!(req.razorpay_payment_id, "pay_xyz");
        assert_eq!(req.razorpay_signature, "sig");
    }

    #[test]
    fn verify_request_accepts_short_aliases() {
        let json = r#"{"order_id": "o", "payment_id": "p", "signature": "s"}"#;
        let req: VerifySignatureRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.razorpay_order_id, "o");
    }

    #[test]
    fn create_order_request_deserializes() {
        let req: CreateOrderRequest =
            serde_json::from_str(r#"{"amount": 500, "receipt": "receipt_001"}"#).unwrap();
        assert_eq!(req.amount, 500);
        assert_eq!(req.receipt, "receipt_001");
    }

    #[test]
    fn error_response_omits_missing_details() {
        let json = serde_json::to_value(ErrorResponse::new("PROVIDER_ERROR", "down")).unwrap();
        assert_eq!(json["error_code"], "PROVIDER_ERROR");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn error_response_with_details_includes_details() {
        let details = serde_json::json!({"field": "amount"});
        let response = ErrorResponse::with_details("VALIDATION_FAILED", "Invalid", details.clone());
        assert_eq!(response.details, Some(details));
    }
}
