//! Payment domain - order requests, provider order records, and signatures.
//!
//! Amounts enter in whole rupees and leave in paise. Orders are always in
//! INR and always auto-captured. Signature checks report a three-way
//! verdict so callers can tell a wrong signature from an input that could
//! not be checked at all.

mod amount;
mod order;
mod receipt;
mod signature;

pub use amount::{RupeeAmount, MAX_RUPEES, PAISE_PER_RUPEE};
pub use order::{Currency, OrderRecord, OrderRequest};
pub use receipt::ReceiptId;
pub use signature::{
    signature_payload, SignatureVerdict, SignatureVerificationInput, PAYLOAD_SEPARATOR,
};
