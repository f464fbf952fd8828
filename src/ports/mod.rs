//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Payment Ports
//!
//! - `PaymentProvider` - Order creation and payment signature checks

mod payment_provider;

pub use payment_provider::{PaymentError, PaymentErrorCode, PaymentProvider};
