//! Razorpay payment provider adapter.
//!
//! Implements the `PaymentProvider` port for Razorpay, including:
//! - Order creation via the Orders API
//! - Payment signature verification
//!
//! # Security
//!
//! - Signatures use HMAC-SHA256 with constant-time comparison
//! - The key secret is handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! Required environment variables (for `RazorpayConfig::from_env`):
//! - `RAZORPAY_KEY_ID`: API key ID (rzp_live_... or rzp_test_...)
//! - `RAZORPAY_KEY_SECRET`: API key secret

mod api_types;
mod mock_payment_provider;
mod razorpay_adapter;

pub use api_types::{RazorpayErrorBody, RazorpayErrorEnvelope};
pub use mock_payment_provider::{MethodCall, MockPaymentProvider};
pub use razorpay_adapter::{
    compute_payment_signature, RazorpayConfig, RazorpayPaymentAdapter, DEFAULT_API_BASE_URL,
};
