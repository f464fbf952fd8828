//! Payment Gateway - Razorpay order creation and signature verification
//!
//! This crate creates provider-side payment orders and verifies the
//! signatures the provider's checkout hands back after a payment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
