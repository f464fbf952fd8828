//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes exposing the payment operations
//! - `razorpay` - Razorpay payment provider (plus a mock for tests)

pub mod http;
pub mod razorpay;

pub use razorpay::{MockPaymentProvider, RazorpayConfig, RazorpayPaymentAdapter};
