//! Razorpay API wire types.
//!
//! Order records deserialize straight into the domain `OrderRecord`; only the
//! error envelope needs a dedicated shape.

use serde::Deserialize;

/// Error envelope returned by the Razorpay API on non-2xx responses.
///
/// ```json
/// {"error": {"code": "BAD_REQUEST_ERROR", "description": "...", "field": "amount"}}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorEnvelope {
    pub error: RazorpayErrorBody,
}

/// Body of a Razorpay API error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RazorpayErrorBody {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub field: Option<String>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub step: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,
}

impl RazorpayErrorEnvelope {
    /// Parse an error body, returning `None` when it is not a Razorpay envelope.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

impl RazorpayErrorBody {
    /// Human-readable summary, naming the offending field when present.
    pub fn summary(&self) -> Option<String> {
        let description = self.description.as_deref()?;
        Some(match self.field.as_deref() {
            Some(field) if !field.is_empty() => format!("{} (field: {})", description, field),
            _ => description.to_string(),
        })
    }
}
