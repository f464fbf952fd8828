//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Payment configuration (Razorpay)
#[derive(Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Razorpay API key ID
    #[serde(default)]
    pub razorpay_key_id: String,

    /// Razorpay API key secret
    #[serde(default)]
    pub razorpay_key_secret: String,

    /// Override for the Razorpay API base URL
    pub razorpay_api_base_url: Option<String>,

    /// Razorpay request timeout in seconds (client default when unset)
    pub razorpay_timeout_secs: Option<u64>,
}

impl PaymentConfig {
    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_test_")
    }

    /// Check if using Razorpay live mode
    pub fn is_live_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.razorpay_key_id.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT_GATEWAY__PAYMENT__RAZORPAY_KEY_ID",
            ));
        }
        if self.razorpay_key_secret.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT_GATEWAY__PAYMENT__RAZORPAY_KEY_SECRET",
            ));
        }

        // Verify key prefixes for safety
        if !self.is_test_mode() && !self.is_live_mode() {
            return Err(ValidationError::InvalidRazorpayKeyId);
        }
        if *environment == Environment::Production && self.is_test_mode() {
            return Err(ValidationError::TestKeyInProduction);
        }

        if let Some(url) = &self.razorpay_api_base_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ValidationError::InvalidRazorpayBaseUrl);
            }
        }
        if self.razorpay_timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl std::fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("razorpay_key_id", &self.razorpay_key_id)
            .field("razorpay_key_secret", &"[REDACTED]")
            .field("razorpay_api_base_url", &self.razorpay_api_base_url)
            .field("razorpay_timeout_secs", &self.razorpay_timeout_secs)
            .finish()
    }
}
