//! Foundation module - Shared domain primitives.
//!
//! Contains the error types value objects report when construction fails.

mod errors;

pub use errors::ValidationError;
