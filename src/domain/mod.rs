//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (validation errors)
//! - `payment` - Order requests, provider order records, and signature checks

pub mod foundation;
pub mod payment;
