//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod payment;

pub use payment::{
    CreateOrderCommand, CreateOrderHandler, PaymentOrderError, PaymentOrderGateway,
    VerifySignatureCommand, VerifySignatureHandler, VerifySignatureResult,
};
