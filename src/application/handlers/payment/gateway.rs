//! PaymentOrderGateway - the two payment operations behind one handle.

use std::sync::Arc;

use crate::domain::payment::{OrderRecord, SignatureVerdict};
use crate::ports::PaymentProvider;

use super::create_order::{CreateOrderCommand, CreateOrderHandler};
use super::errors::PaymentOrderError;
use super::verify_signature::{VerifySignatureCommand, VerifySignatureHandler};

/// Creates payment orders and verifies payment signatures.
///
/// Holds nothing but a shared provider, so clones are cheap and calls from
/// any number of tasks are independent of each other.
#[derive(Clone)]
pub struct PaymentOrderGateway {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl PaymentOrderGateway {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }

    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.payment_provider.clone())
    }

    pub fn verify_signature_handler(&self) -> VerifySignatureHandler {
        VerifySignatureHandler::new(self.payment_provider.clone())
    }

    /// Create an order for `amount_in_rupees`, tagged with `receipt_id`.
    pub async fn create_order(
        &self,
        amount_in_rupees: i64,
        receipt_id: impl Into<String>,
    ) -> Result<OrderRecord, PaymentOrderError> {
        self.create_order_handler()
            .handle(CreateOrderCommand {
                amount_in_rupees,
                receipt_id: receipt_id.into(),
            })
            .await
    }

    /// True only if `signature` is valid for the order/payment pair.
    pub fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        self.verify_signature_verdict(order_id, payment_id, signature)
            .is_verified()
    }

    /// Like [`verify_signature`](Self::verify_signature), but says why a check failed.
    pub fn verify_signature_verdict(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> SignatureVerdict {
        self.verify_signature_handler()
            .handle(VerifySignatureCommand {
                order_id: order_id.to_string(),
                payment_id: payment_id.to_string(),
                signature: signature.to_string(),
            })
            .verdict
    }
}
