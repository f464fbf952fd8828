//! Order requests sent to the provider and the records it returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::amount::RupeeAmount;
use super::receipt::ReceiptId;

/// Currencies orders can be created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Order-creation request in the provider's wire shape.
///
/// Currency is always INR and payments are always captured as soon as they
/// are authorized; neither can be changed after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    amount: i64,
    currency: Currency,
    receipt: ReceiptId,
    #[serde(serialize_with = "serialize_capture_flag")]
    payment_capture: bool,
}

impl OrderRequest {
    pub fn new(amount: RupeeAmount, receipt: ReceiptId) -> Self {
        Self {
            amount: amount.paise(),
            currency: Currency::Inr,
            receipt,
            payment_capture: true,
        }
    }

    /// Amount in paise.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn receipt(&self) -> &ReceiptId {
        &self.receipt
    }

    /// Whether funds are captured immediately once the payment succeeds.
    pub fn auto_capture(&self) -> bool {
        self.payment_capture
    }
}

// The provider takes the capture flag as 1/0.
fn serialize_capture_flag<S: Serializer>(capture: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*capture))
}

/// Order record as returned by the provider.
///
/// Well-known fields are typed; anything else the provider sends is kept in
/// `extra` so the record can be handed back to callers without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Provider's order ID (order_...).
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// Order amount in paise.
    pub amount: i64,

    #[serde(default)]
    pub amount_paid: i64,

    #[serde(default)]
    pub amount_due: i64,

    pub currency: String,

    #[serde(default)]
    pub receipt: Option<String>,

    #[serde(default)]
    pub offer_id: Option<String>,

    /// Provider order status (created, attempted, paid).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub attempts: u32,

    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub notes: serde_json::Value,

    /// Creation time (Unix timestamp).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OrderRecord {
    /// Creation time as a UTC timestamp, if the provider value is in range.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(rupees: i64, receipt: &str) -> OrderRequest {
        OrderRequest::new(
            RupeeAmount::new(rupees).unwrap(),
            ReceiptId::new(receipt).unwrap(),
        )
    }

    #[test]
    fn new_request_fixes_currency_and_capture() {
        let req = request(500, "receipt_001");
        assert_eq!(req.amount(), 50_000);
        assert_eq!(req.currency(), Currency::Inr);
        assert_eq!(req.receipt().as_str(), "receipt_001");
        assert!(req.auto_capture());
    }

    #[test]
    fn request_serializes_to_provider_shape() {
        let value = serde_json::to_value(request(500, "receipt_001")).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 50000,
                "currency": "INR",
                "receipt": "receipt_001",
                "payment_capture": 1
            })
        );
    }

    #[test]
    fn record_preserves_unknown_fields() {
        let payload = json!({
            "id": "order_EKwxwAgItmmXdp",
            "entity": "order",
            "amount": 50000,
            "amount_paid": 0,
            "amount_due": 50000,
            "currency": "INR",
            "receipt": "receipt_001",
            "offer_id": null,
            "status": "created",
            "attempts": 0,
            "notes": [],
            "created_at": 1582628071,
            "partial_payment": false
        });

        let record: OrderRecord = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(record.id, "order_EKwxwAgItmmXdp");
        assert_eq!(record.amount_due, 50_000);
        assert_eq!(record.extra.get("partial_payment"), Some(&json!(false)));

        let round_trip = serde_json::to_value(&record).unwrap();
        assert_eq!(round_trip, payload);
    }

    #[test]
    fn record_tolerates_minimal_payload() {
        let record: OrderRecord = serde_json::from_value(json!({
            "id": "order_1",
            "amount": 100,
            "currency": "INR",
            "status": "created",
            "created_at": 0
        }))
        .unwrap();

        assert_eq!(record.receipt, None);
        assert_eq!(record.attempts, 0);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn record_without_status_or_timestamp_still_parses() {
        let payload = json!({
            "id": "order_1",
            "amount": 100,
            "currency": "INR"
        });

        let record: OrderRecord = serde_json::from_value(payload.clone()).unwrap();

        assert_eq!(record.status, None);
        assert_eq!(record.created_at, None);
        assert!(record.created_at_utc().is_none());
        assert_eq!(serde_json::to_value(&record).unwrap(), payload);
    }

    #[test]
    fn created_at_converts_to_utc() {
        let record: OrderRecord = serde_json::from_value(json!({
            "id": "order_1",
            "amount": 100,
            "currency": "INR",
            "status": "created",
            "created_at": 1582628071
        }))
        .unwrap();

        let created = record.created_at_utc().unwrap();
        assert_eq!(created.timestamp(), 1582628071);
    }
}
