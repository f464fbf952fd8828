//! HTTP adapter for payment endpoints.
//!
//! Exposes the payment order gateway via REST API:
//! - `POST /api/payments/orders` - Create a payment order
//! - `POST /api/payments/verify` - Verify a payment signature

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{PaymentApiError, PaymentAppState};
pub use routes::{payment_router, payment_routes};
