//! GhostsPay webhook adapter. Flat camelCase payload with decimal
//! amounts.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{parse_timestamp, require_amount, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GhostsPayPayload {
    payment_id: Option<String>,
    status: Option<String>,
    payment_method: Option<String>,
    amount: Option<Decimal>,
    #[serde(default)]
    customer: GhostsPayCustomer,
    created_at: Option<String>,
    updated_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GhostsPayCustomer {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

pub struct GhostsPayAdapter;

impl GatewayAdapter for GhostsPayAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::GhostsPay
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: GhostsPayPayload = serde_json::from_slice(body)?;

        Ok(EventDraft {
            external_payment_id: require_str(payload.payment_id, "paymentId")?,
            raw_status: require_str(payload.status, "status")?,
            payment_method: require_str(payload.payment_method, "paymentMethod")?,
            amount: require_amount(payload.amount, "amount")?,
            customer: Customer {
                name: payload.customer.name,
                email: payload.customer.email,
                phone: payload.customer.phone,
            },
            created_at: parse_timestamp(payload.created_at.as_deref()),
            updated_at: parse_timestamp(payload.updated_at.as_deref()),
        })
    }
}
