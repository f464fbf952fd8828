//! Razorpay payment provider adapter.
//!
//! Implements the `PaymentProvider` trait for the Razorpay Orders API.
//!
//! # Security
//!
//! - Payment signatures are HMAC-SHA256 over `order_id|payment_id`, keyed by
//!   the API key secret, compared in constant time
//! - Secrets are held in `secrecy::SecretString` and never logged
//!
//! # Configuration
//!
//! ```ignore
//! let config = RazorpayConfig::from_env()?;
//! let adapter = RazorpayPaymentAdapter::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::PaymentConfig;
use crate::domain::payment::{
    signature_payload, OrderRecord, OrderRequest, SignatureVerdict, SignatureVerificationInput,
};
use crate::ports::{PaymentError, PaymentErrorCode, PaymentProvider};

use super::api_types::RazorpayErrorEnvelope;

type HmacSha256 = Hmac<Sha256>;

/// Production Razorpay API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.razorpay.com";

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// API key ID (rzp_live_... or rzp_test_...).
    key_id: String,

    /// API key secret. Used for basic auth and as the signature key.
    key_secret: SecretString,

    /// Base URL for Razorpay API (default: https://api.razorpay.com).
    api_base_url: String,

    /// Overall request timeout. `None` keeps the HTTP client default.
    timeout: Option<Duration>,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `RAZORPAY_KEY_ID`
    /// - `RAZORPAY_KEY_SECRET`
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let key_id = std::env::var("RAZORPAY_KEY_ID")?;
        let key_secret = std::env::var("RAZORPAY_KEY_SECRET")?;
        Ok(Self::new(key_id, key_secret))
    }

    /// Build from the application's payment configuration.
    pub fn from_payment_config(config: &PaymentConfig) -> Self {
        let mut razorpay = Self::new(&config.razorpay_key_id, &config.razorpay_key_secret);
        if let Some(url) = &config.razorpay_api_base_url {
            razorpay = razorpay.with_base_url(url);
        }
        if let Some(secs) = config.razorpay_timeout_secs {
            razorpay = razorpay.with_timeout(Duration::from_secs(secs));
        }
        razorpay
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the overall request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Compute the hex signature Razorpay issues for an order/payment pair.
pub fn compute_payment_signature(
    key_secret: &str,
    order_id: &str,
    payment_id: &str,
) -> Result<String, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(key_secret.as_bytes())?;
    mac.update(signature_payload(order_id, payment_id).as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Razorpay payment provider adapter.
///
/// Implements `PaymentProvider` for the Razorpay Orders API.
pub struct RazorpayPaymentAdapter {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayPaymentAdapter {
    /// Create a new Razorpay adapter with the given configuration.
    ///
    /// Fails with an authentication error if either credential is blank.
    pub fn new(config: RazorpayConfig) -> Result<Self, PaymentError> {
        if config.key_id.trim().is_empty() {
            return Err(PaymentError::authentication("Razorpay key id is empty"));
        }
        if config.key_secret.expose_secret().trim().is_empty() {
            return Err(PaymentError::authentication("Razorpay key secret is empty"));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::Unknown,
                format!("Failed to build HTTP client: {}", e),
            )
        })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn unverifiable(input: &SignatureVerificationInput, reason: &str) -> SignatureVerdict {
        tracing::warn!(
            order_id = %input.order_id,
            payment_id = %input.payment_id,
            reason,
            "Payment signature could not be verified"
        );
        SignatureVerdict::unverifiable(reason)
    }
}

/// Map a non-success Razorpay response to a `PaymentError`.
pub(crate) fn error_from_response(status: u16, body: &str) -> PaymentError {
    let envelope = RazorpayErrorEnvelope::parse(body);

    let message = envelope
        .as_ref()
        .and_then(|e| e.error.summary())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("Razorpay API returned status {}", status)
            } else {
                format!("Razorpay API error ({}): {}", status, body.trim())
            }
        });

    let error = match status {
        400 => PaymentError::invalid_request(message),
        401 | 403 => PaymentError::authentication(message),
        429 => PaymentError::rate_limited(message),
        _ => PaymentError::provider(message),
    };

    match envelope.and_then(|e| e.error.code) {
        Some(code) => error.with_provider_code(code),
        None => error,
    }
}

#[async_trait]
impl PaymentProvider for RazorpayPaymentAdapter {
    async fn create_order(&self, request: OrderRequest) -> Result<OrderRecord, PaymentError> {
        let url = format!("{}/v1/orders", self.config.api_base_url);

        tracing::debug!(
            amount = request.amount(),
            currency = %request.currency(),
            receipt = %request.receipt(),
            "Creating Razorpay order"
        );

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.expose_secret()))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Razorpay create_order request failed");
                PaymentError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!(
                        status = status.as_u16(),
                        error = %e,
                        "Failed to read Razorpay error body"
                    );
                    String::new()
                }
            };
            let error = error_from_response(status.as_u16(), &error_text);
            tracing::error!(
                status = status.as_u16(),
                code = %error.code,
                provider_code = ?error.provider_code,
                error = %error.message,
                "Razorpay create_order failed"
            );
            return Err(error);
        }

        let order: OrderRecord = response.json().await.map_err(|e| {
            PaymentError::provider(format!("Failed to parse Razorpay response: {}", e))
        })?;

        tracing::info!(
            order_id = %order.id,
            amount = order.amount,
            status = ?order.status,
            "Razorpay order created"
        );

        Ok(order)
    }

    fn verify_payment_signature(&self, input: &SignatureVerificationInput) -> SignatureVerdict {
        if input.signature.is_empty() {
            return Self::unverifiable(input, "signature is empty");
        }
        if hex::decode(&input.signature).is_err() {
            return Self::unverifiable(input, "signature is not valid hex");
        }

        // Razorpay issues lowercase hex; the comparison is on the hex text itself.
        let expected = match compute_payment_signature(
            self.config.key_secret.expose_secret(),
            &input.order_id,
            &input.payment_id,
        ) {
            Ok(expected) => expected,
            Err(_) => return Self::unverifiable(input, "signing key rejected"),
        };

        if expected.as_bytes().ct_eq(input.signature.as_bytes()).unwrap_u8() != 1 {
            tracing::warn!(
                order_id = %input.order_id,
                payment_id = %input.payment_id,
                "Invalid payment signature"
            );
            return SignatureVerdict::Mismatch;
        }

        tracing::debug!(
            order_id = %input.order_id,
            payment_id = %input.payment_id,
            "Payment signature verified"
        );
        SignatureVerdict::Verified
    }
}
