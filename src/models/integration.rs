use serde::{Deserialize, Serialize};

/// External payment processors we accept webhooks from.
///
/// Adapter selection is keyed on this enum, never on free-form strings; an
/// unknown gateway name in the URL fails at path deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gateway {
    CloudFy,
    Disrupty,
    WolfPay,
    VegaCheckout,
    ParadisePag,
    ZeroOne,
    WestPay,
    TriboPay,
    Sunize,
    GhostsPay,
}

impl Gateway {
    pub const ALL: [Gateway; 10] = [
        Gateway::CloudFy,
        Gateway::Disrupty,
        Gateway::WolfPay,
        Gateway::VegaCheckout,
        Gateway::ParadisePag,
        Gateway::ZeroOne,
        Gateway::WestPay,
        Gateway::TriboPay,
        Gateway::Sunize,
        Gateway::GhostsPay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CloudFy => "cloudfy",
            Self::Disrupty => "disrupty",
            Self::WolfPay => "wolfpay",
            Self::VegaCheckout => "vegacheckout",
            Self::ParadisePag => "paradisepag",
            Self::ZeroOne => "zeroone",
            Self::WestPay => "westpay",
            Self::TriboPay => "tribopay",
            Self::Sunize => "sunize",
            Self::GhostsPay => "ghostspay",
        }
    }
}

impl std::str::FromStr for Gateway {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cloudfy" => Ok(Self::CloudFy),
            "disrupty" => Ok(Self::Disrupty),
            "wolfpay" => Ok(Self::WolfPay),
            "vegacheckout" => Ok(Self::VegaCheckout),
            "paradisepag" => Ok(Self::ParadisePag),
            "zeroone" => Ok(Self::ZeroOne),
            "westpay" => Ok(Self::WestPay),
            "tribopay" => Ok(Self::TriboPay),
            "sunize" => Ok(Self::Sunize),
            "ghostspay" => Ok(Self::GhostsPay),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configured payment-processor credential/endpoint owned by a user.
///
/// The CRUD layer (out of scope here) guarantees at most one non-deleted
/// campaign references an integration as in-use at a time.
#[derive(Debug, Clone, Serialize)]
pub struct Integration {
    pub id: String,
    pub gateway: Gateway,
    pub name: String,
    pub in_use: bool,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

/// Data required to create an integration (used by seeding and tests).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIntegration {
    pub gateway: Gateway,
    pub name: String,
}
