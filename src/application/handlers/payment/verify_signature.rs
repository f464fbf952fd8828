//! VerifySignatureHandler - Checks the signature returned after a payment.

use std::sync::Arc;

use crate::domain::payment::{SignatureVerdict, SignatureVerificationInput};
use crate::ports::PaymentProvider;

/// Command to verify a payment signature.
#[derive(Debug, Clone)]
pub struct VerifySignatureCommand {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Result of a signature check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifySignatureResult {
    /// True only for a matching signature.
    pub verified: bool,
    pub verdict: SignatureVerdict,
}

/// Handler for payment signature verification.
///
/// Never fails: anything short of a matching signature comes back as
/// `verified == false`, with the verdict saying why.
pub struct VerifySignatureHandler {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl VerifySignatureHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }

    pub fn handle(&self, cmd: VerifySignatureCommand) -> VerifySignatureResult {
        let input = SignatureVerificationInput::new(cmd.order_id, cmd.payment_id, cmd.signature);
        let verdict = self.payment_provider.verify_payment_signature(&input);

        if let SignatureVerdict::Unverifiable { reason } = &verdict {
            tracing::info!(
                order_id = %input.order_id,
                reason = %reason,
                "Treating unverifiable payment signature as not verified"
            );
        }

        VerifySignatureResult {
            verified: verdict.is_verified(),
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::razorpay::{compute_payment_signature, MockPaymentProvider};

    fn command(signature: impl Into<String>) -> VerifySignatureCommand {
        VerifySignatureCommand {
            order_id: "order_abc".to_string(),
            payment_id: "pay_xyz".to_string(),
            signature: signature.into(),
        }
    }

    #[test]
    fn valid_signature_is_verified() {
        let handler =
            VerifySignatureHandler::new(Arc::new(MockPaymentProvider::with_signing_secret("s3")));
        let signature = compute_payment_signature("s3", "order_abc", "pay_xyz").unwrap();

        let result = handler.handle(command(signature));

        assert!(result.verified);
        assert_eq!(result.verdict, SignatureVerdict::Verified);
    }

    #[test]
    fn garbage_signature_is_not_verified() {
        let handler =
            VerifySignatureHandler::new(Arc::new(MockPaymentProvider::with_signing_secret("s3")));

        let result = handler.handle(command("garbage"));

        assert!(!result.verified);
        assert_eq!(result.verdict, SignatureVerdict::Mismatch);
    }

    #[test]
    fn passes_ids_through_to_provider() {
        let mock = MockPaymentProvider::accepting_signatures();
        let handler = VerifySignatureHandler::new(Arc::new(mock.clone()));

        handler.handle(command("anything"));

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "verify_payment_signature");
        assert_eq!(calls[0].args, vec!["order_abc", "pay_xyz"]);
    }
}
