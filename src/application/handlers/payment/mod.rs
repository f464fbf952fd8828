//! Payment handlers.
//!
//! ## Commands
//! - Creating provider-side payment orders
//!
//! ## Queries
//! - Verifying payment signatures
//!
//! `PaymentOrderGateway` bundles both for callers that just want the two
//! operations.

mod create_order;
mod errors;
mod gateway;
mod verify_signature;

pub use create_order::{CreateOrderCommand, CreateOrderHandler};
pub use errors::PaymentOrderError;
pub use gateway::PaymentOrderGateway;
pub use verify_signature::{VerifySignatureCommand, VerifySignatureHandler, VerifySignatureResult};
