use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The system's own payment-status vocabulary. Every gateway-specific raw
/// status is mapped into this set before anything touches the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalStatus {
    Approved,
    Pending,
    Refunded,
    Rejected,
    Abandoned,
    Chargeback,
    Canceled,
    /// Raw status absent from the gateway's table. Never persisted: the
    /// pipeline rejects it before the ledger upsert, for every gateway.
    Unknown,
}

impl CanonicalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Refunded => "refunded",
            Self::Rejected => "rejected",
            Self::Abandoned => "abandoned",
            Self::Chargeback => "chargeback",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for CanonicalStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "pending" => Ok(Self::Pending),
            "refunded" => Ok(Self::Refunded),
            "rejected" => Ok(Self::Rejected),
            "abandoned" => Ok(Self::Abandoned),
            "chargeback" => Ok(Self::Chargeback),
            "canceled" => Ok(Self::Canceled),
            "unknown" => Ok(Self::Unknown),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Customer contact fields carried on a payment event. All optional: several
/// gateways omit some or all of them on non-checkout notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Adapter output: one payment attempt as the gateway reported it, with the
/// amount already converted to the system's decimal currency unit but the
/// status still in the gateway's vocabulary.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub external_payment_id: String,
    pub raw_status: String,
    pub payment_method: String,
    pub amount: Decimal,
    pub customer: Customer,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// One payment attempt as seen by one gateway, normalized and persisted.
/// Identity key: (integration_id, external_payment_id). Repeated webhooks
/// for the same payment id mutate this row in place; it is never deleted.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentEvent {
    pub id: String,
    pub integration_id: String,
    pub external_payment_id: String,
    pub status: CanonicalStatus,
    pub payment_method: String,
    pub amount: Decimal,
    pub customer: Customer,
    /// Opaque raw webhook body, stored for audit.
    pub raw_payload: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Whether the ledger upsert created a new row or mutated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOperation {
    Insert,
    Update,
}

/// Result of the event-ledger upsert, handed to the counter ledger.
/// On update, `old` carries the status/amount captured before overwriting,
/// so the previous contribution can be reversed.
#[derive(Debug, Clone)]
pub struct LedgerOutcome {
    pub operation: LedgerOperation,
    pub old: Option<(CanonicalStatus, Decimal)>,
    pub new_status: CanonicalStatus,
    pub new_amount: Decimal,
}
