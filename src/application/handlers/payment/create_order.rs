//! CreateOrderHandler - Command handler for creating provider-side payment orders.

use std::sync::Arc;

use crate::domain::payment::{OrderRecord, OrderRequest, ReceiptId, RupeeAmount};
use crate::ports::PaymentProvider;

use super::errors::PaymentOrderError;

/// Command to create a payment order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Amount in whole rupees.
    pub amount_in_rupees: i64,
    pub receipt_id: String,
}

/// Handler for creating payment orders.
///
/// Converts the rupee amount to paise, fixes currency and capture mode, and
/// hands the provider's order record back untouched. Provider failures are
/// returned as-is; nothing is retried.
pub struct CreateOrderHandler {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl CreateOrderHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<OrderRecord, PaymentOrderError> {
        // 1. Validate input before any network call
        let amount = RupeeAmount::new(cmd.amount_in_rupees)?;
        let receipt = ReceiptId::new(cmd.receipt_id)?;

        // 2. Build provider request
        let request = OrderRequest::new(amount, receipt);

        // 3. Submit
        let order = self
            .payment_provider
            .create_order(request)
            .await
            .map_err(|e| {
                tracing::warn!(
                    amount_in_rupees = cmd.amount_in_rupees,
                    code = %e.code,
                    retryable = e.retryable,
                    "Order creation failed"
                );
                PaymentOrderError::Provider(e)
            })?;

        Ok(order)
    }
}
