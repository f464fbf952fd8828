//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to the payment order gateway.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payment::{PaymentOrderError, PaymentOrderGateway};
use crate::ports::PaymentErrorCode;

use super::dto::{CreateOrderRequest, ErrorResponse, VerifySignatureRequest, VerifySignatureResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for payment routes.
#[derive(Clone)]
pub struct PaymentAppState {
    pub gateway: PaymentOrderGateway,
}

impl PaymentAppState {
    pub fn new(gateway: PaymentOrderGateway) -> Self {
        Self { gateway }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payments/orders - Create a payment order
pub async fn create_order(
    State(state): State<PaymentAppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let order = state
        .gateway
        .create_order(request.amount, request.receipt)
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// POST /api/payments/verify - Verify a payment signature
pub async fn verify_signature(
    State(state): State<PaymentAppState>,
    Json(request): Json<VerifySignatureRequest>,
) -> impl IntoResponse {
    let verified = state.gateway.verify_signature(
        &request.razorpay_order_id,
        &request.razorpay_payment_id,
        &request.razorpay_signature,
    );

    Json(VerifySignatureResponse { verified })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts payment errors to HTTP responses.
#[derive(Debug)]
pub struct PaymentApiError(PaymentOrderError);

impl From<PaymentOrderError> for PaymentApiError {
    fn from(err: PaymentOrderError) -> Self {
        Self(err)
    }
}

impl PaymentApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            PaymentOrderError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            PaymentOrderError::Provider(err) => match err.code {
                PaymentErrorCode::InvalidRequest => {
                    (StatusCode::BAD_REQUEST, "PROVIDER_REJECTED_REQUEST")
                }
                PaymentErrorCode::RateLimitExceeded => {
                    (StatusCode::TOO_MANY_REQUESTS, "PROVIDER_RATE_LIMITED")
                }
                _ => (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR"),
            },
        }
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = self.status_and_code();
        let message = self.0.message();

        let body = match &self.0 {
            PaymentOrderError::ValidationFailed { field, .. } => ErrorResponse::with_details(
                error_code,
                message,
                serde_json::json!({ "field": field }),
            ),
            PaymentOrderError::Provider(err) => match &err.provider_code {
                Some(code) => ErrorResponse::with_details(
                    error_code,
                    message,
                    serde_json::json!({ "provider_code": code, "retryable": err.retryable }),
                ),
                None => ErrorResponse::new(error_code, message),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PaymentError;

    fn status_of(err: PaymentOrderError) -> (StatusCode, &'static str) {
        PaymentApiError::from(err).status_and_code()
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let (status, code) = status_of(PaymentOrderError::validation("amount", "too small"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_FAILED");
    }

    #[test]
    fn provider_rejection_maps_to_bad_request() {
        let (status, code) = status_of(PaymentError::invalid_request("bad receipt").into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "PROVIDER_REJECTED_REQUEST");
    }

    #[test]
    fn provider_rate_limit_maps_to_429() {
        let (status, _) = status_of(PaymentError::rate_limited("slow down").into());
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn other_provider_failures_map_to_bad_gateway() {
        for err in [
            PaymentError::network("reset"),
            PaymentError::authentication("bad key"),
            PaymentError::provider("500"),
        ] {
            let (status, code) = status_of(err.into());
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(code, "PROVIDER_ERROR");
        }
    }

    async fn error_body(err: PaymentOrderError) -> (StatusCode, ErrorResponse) {
        let response = PaymentApiError::from(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn provider_error_body_carries_provider_code_and_retryability() {
        let err = PaymentError::rate_limited("Too many requests")
            .with_provider_code("TOO_MANY_REQUESTS");

        let (status, body) = error_body(err.into()).await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body.error_code, "PROVIDER_RATE_LIMITED");
        assert_eq!(body.message, "Too many requests");
        assert_eq!(
            body.details,
            Some(serde_json::json!({
                "provider_code": "TOO_MANY_REQUESTS",
                "retryable": true
            }))
        );
    }

    #[tokio::test]
    async fn provider_error_without_code_omits_details() {
        let (status, body) = error_body(PaymentError::network("connection reset").into()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error_code, "PROVIDER_ERROR");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn validation_error_body_names_the_field() {
        let (_, body) = error_body(PaymentOrderError::validation("receipt", "empty")).await;

        assert_eq!(body.error_code, "VALIDATION_FAILED");
        assert_eq!(body.details, Some(serde_json::json!({ "field": "receipt" })));
    }
}
