//! WolfPay webhook adapter. Transaction data nested under `transaction`,
//! customer data under `client`.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{require_amount, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
struct WolfPayPayload {
    #[serde(default)]
    transaction: WolfPayTransaction,
    #[serde(default)]
    client: WolfPayClient,
}

#[derive(Debug, Default, Deserialize)]
struct WolfPayTransaction {
    id: Option<String>,
    status: Option<String>,
    method: Option<String>,
    /// Decimal currency unit.
    value: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
struct WolfPayClient {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

pub struct WolfPayAdapter;

impl GatewayAdapter for WolfPayAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::WolfPay
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: WolfPayPayload = serde_json::from_slice(body)?;

        Ok(EventDraft {
            external_payment_id: require_str(payload.transaction.id, "transaction.id")?,
            raw_status: require_str(payload.transaction.status, "transaction.status")?,
            payment_method: require_str(payload.transaction.method, "transaction.method")?,
            amount: require_amount(payload.transaction.value, "transaction.value")?,
            customer: Customer {
                name: payload.client.name,
                email: payload.client.email,
                phone: payload.client.phone,
            },
            created_at: None,
            updated_at: None,
        })
    }
}
