//! Payment signature inputs and verification outcomes.

use serde::{Deserialize, Serialize};

/// Separator between order and payment IDs in the signed payload.
pub const PAYLOAD_SEPARATOR: char = '|';

/// Values returned by the provider's checkout after a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureVerificationInput {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

impl SignatureVerificationInput {
    pub fn new(
        order_id: impl Into<String>,
        payment_id: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            payment_id: payment_id.into(),
            signature: signature.into(),
        }
    }

    /// Canonical signed payload: `order_id|payment_id`.
    pub fn payload(&self) -> String {
        signature_payload(&self.order_id, &self.payment_id)
    }
}

/// Builds the canonical payload signed by the provider.
pub fn signature_payload(order_id: &str, payment_id: &str) -> String {
    format!("{}{}{}", order_id, PAYLOAD_SEPARATOR, payment_id)
}

/// Outcome of checking a payment signature.
///
/// Only `Verified` counts as success. `Unverifiable` covers inputs the check
/// could not even be computed for, which callers must treat as not verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SignatureVerdict {
    Verified,
    Mismatch,
    Unverifiable { reason: String },
}

impl SignatureVerdict {
    pub fn unverifiable(reason: impl Into<String>) -> Self {
        SignatureVerdict::Unverifiable {
            reason: reason.into(),
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, SignatureVerdict::Verified)
    }
}
