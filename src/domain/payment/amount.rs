//! Rupee amounts and their conversion to paise.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Paise per rupee.
pub const PAISE_PER_RUPEE: i64 = 100;

/// Largest rupee amount whose paise value still fits in an `i64`.
pub const MAX_RUPEES: i64 = i64::MAX / PAISE_PER_RUPEE;

/// A strictly positive amount in whole rupees.
///
/// The provider only accepts amounts in paise, so the rupee value is kept
/// alongside a conversion that can never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RupeeAmount(i64);

impl RupeeAmount {
    /// Creates a rupee amount, rejecting zero, negative, and overflowing values.
    pub fn new(rupees: i64) -> Result<Self, ValidationError> {
        if !(1..=MAX_RUPEES).contains(&rupees) {
            return Err(ValidationError::out_of_range(
                "amount", 1, MAX_RUPEES, rupees,
            ));
        }
        Ok(Self(rupees))
    }

    /// Amount in whole rupees.
    pub fn rupees(&self) -> i64 {
        self.0
    }

    /// Amount in paise, the provider's smallest currency subunit.
    pub fn paise(&self) -> i64 {
        self.0 * PAISE_PER_RUPEE
    }
}

impl TryFrom<i64> for RupeeAmount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RupeeAmount> for i64 {
    fn from(amount: RupeeAmount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for RupeeAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "INR {}", self.0)
    }
}
