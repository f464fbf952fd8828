//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured order records
//! - Error injection
//! - Call tracking
//! - Signature checks against a known secret

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::payment::{
    OrderRecord, OrderRequest, SignatureVerdict, SignatureVerificationInput,
};
use crate::ports::{PaymentError, PaymentProvider};

use super::razorpay_adapter::compute_payment_signature;

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::with_signing_secret("secret");
///
/// // Inject errors
/// mock.set_error(PaymentError::authentication("bad key"));
///
/// // Inspect what was submitted
/// let submitted = mock.order_requests();
/// ```
#[derive(Clone, Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Next order record to return.
    next_order: Option<OrderRecord>,

    /// Error to return on next `create_order` call.
    next_error: Option<PaymentError>,

    /// Every order request received, in order.
    order_requests: Vec<OrderRequest>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,

    /// Signature verification behavior.
    signature_mode: SignatureMode,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

/// How to handle signature verification.
#[derive(Default, Clone)]
enum SignatureMode {
    /// Reject every signature.
    #[default]
    RejectAll,

    /// Accept every signature.
    AcceptAll,

    /// Verify against the given secret, like the real provider.
    SharedSecret(String),
}

impl MockPaymentProvider {
    /// Create a new mock provider that rejects all signatures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that verifies signatures against `secret`.
    pub fn with_signing_secret(secret: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.state().signature_mode = SignatureMode::SharedSecret(secret.into());
        mock
    }

    /// Create a mock that accepts any signature.
    pub fn accepting_signatures() -> Self {
        let mock = Self::new();
        mock.state().signature_mode = SignatureMode::AcceptAll;
        mock
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the order record to return on the next `create_order` call.
    pub fn set_order(&self, order: OrderRecord) {
        self.state().next_order = Some(order);
    }

    /// Fail the next `create_order` call with `error`.
    pub fn set_error(&self, error: PaymentError) {
        self.state().next_error = Some(error);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Assertion Helpers
    // ════════════════════════════════════════════════════════════════════════════

    /// Order requests received so far.
    pub fn order_requests(&self) -> Vec<OrderRequest> {
        self.state().order_requests.clone()
    }

    /// All recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    /// Number of calls made to `method`.
    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    fn record_call(state: &mut MockState, method: &str, args: Vec<String>) {
        state.call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn synthesize_order(sequence: usize, request: &OrderRequest) -> OrderRecord {
        OrderRecord {
            id: format!("order_mock{:06}", sequence),
            entity: Some("order".to_string()),
            amount: request.amount(),
            amount_paid: 0,
            amount_due: request.amount(),
            currency: request.currency().code().to_string(),
            receipt: Some(request.receipt().to_string()),
            offer_id: None,
            status: Some("created".to_string()),
            attempts: 0,
            notes: serde_json::Value::Array(Vec::new()),
            created_at: Some(chrono::Utc::now().timestamp()),
            extra: serde_json::Map::new(),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_order(&self, request: OrderRequest) -> Result<OrderRecord, PaymentError> {
        let mut state = self.state();
        Self::record_call(
            &mut state,
            "create_order",
            vec![request.amount().to_string(), request.receipt().to_string()],
        );
        state.order_requests.push(request.clone());

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        let sequence = state.order_requests.len();
        Ok(state
            .next_order
            .take()
            .unwrap_or_else(|| Self::synthesize_order(sequence, &request)))
    }

    fn verify_payment_signature(&self, input: &SignatureVerificationInput) -> SignatureVerdict {
        let mut state = self.state();
        Self::record_call(
            &mut state,
            "verify_payment_signature",
            vec![input.order_id.clone(), input.payment_id.clone()],
        );

        match &state.signature_mode {
            SignatureMode::RejectAll => SignatureVerdict::Mismatch,
            SignatureMode::AcceptAll => SignatureVerdict::Verified,
            SignatureMode::SharedSecret(secret) => {
                match compute_payment_signature(secret, &input.order_id, &input.payment_id) {
                    Ok(expected) if expected == input.signature => SignatureVerdict::Verified,
                    Ok(_) => SignatureVerdict::Mismatch,
                    Err(e) => SignatureVerdict::unverifiable(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::{ReceiptId, RupeeAmount};
    use crate::ports::PaymentErrorCode;

    fn request(rupees: i64) -> OrderRequest {
        OrderRequest::new(
            RupeeAmount::new(rupees).unwrap(),
            ReceiptId::new("receipt_001").unwrap(),
        )
    }

    #[tokio::test]
    async fn synthesizes_order_from_request() {
        let mock = MockPaymentProvider::new();
        let order = mock.create_order(request(500)).await.unwrap();

        assert_eq!(order.id, "order_mock000001");
        assert_eq!(order.amount, 50_000);
        assert_eq!(order.currency, "INR");
        assert_eq!(order.receipt.as_deref(), Some("receipt_001"));
    }

    #[tokio::test]
    async fn returns_configured_order_once() {
        let mock = MockPaymentProvider::new();
        let mut configured = MockPaymentProvider::synthesize_order(99, &request(1));
        configured.id = "order_configured".to_string();
        mock.set_order(configured);

        let first = mock.create_order(request(1)).await.unwrap();
        let second = mock.create_order(request(1)).await.unwrap();

        assert_eq!(first.id, "order_configured");
        assert_eq!(second.id, "order_mock000002");
    }

    #[tokio::test]
    async fn injected_error_is_returned_and_request_still_recorded() {
        let mock = MockPaymentProvider::new();
        mock.set_error(PaymentError::authentication("bad key"));

        let err = mock.create_order(request(10)).await.unwrap_err();

        assert_eq!(err.code, PaymentErrorCode::AuthenticationError);
        assert_eq!(mock.order_requests().len(), 1);
        assert_eq!(mock.call_count("create_order"), 1);
    }

    #[test]
    fn rejects_signatures_by_default() {
        let mock = MockPaymentProvider::new();
        let input = SignatureVerificationInput::new("order_abc", "pay_xyz", "anything");
        assert_eq!(mock.verify_payment_signature(&input), SignatureVerdict::Mismatch);
    }

    #[test]
    fn accepting_mock_verifies_anything() {
        let mock = MockPaymentProvider::accepting_signatures();
        let input = SignatureVerificationInput::new("order_abc", "pay_xyz", "anything");
        assert!(mock.verify_payment_signature(&input).is_verified());
    }

    #[test]
    fn shared_secret_mode_checks_real_signature() {
        let mock = MockPaymentProvider::with_signing_secret("secret");
        let good = compute_payment_signature("secret", "order_abc", "pay_xyz").unwrap();

        let ok = SignatureVerificationInput::new("order_abc", "pay_xyz", good);
        let bad = SignatureVerificationInput::new("order_abc", "pay_xyz", "garbage");

        assert!(mock.verify_payment_signature(&ok).is_verified());
        assert!(!mock.verify_payment_signature(&bad).is_verified());
        assert_eq!(mock.call_count("verify_payment_signature"), 2);
    }
}
