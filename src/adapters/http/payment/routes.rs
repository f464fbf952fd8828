//! Axum router configuration for payment endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_order, verify_signature, PaymentAppState};

/// Create the payment API router.
///
/// # Routes
/// - `POST /orders` - Create a payment order
/// - `POST /verify` - Verify a payment signature
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/verify", post(verify_signature))
}

/// Create the complete payment module router, mounted at `/payments`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", payment_router())
///     .with_state(PaymentAppState::new(gateway));
/// ```
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new().nest("/payments", payment_routes())
}
