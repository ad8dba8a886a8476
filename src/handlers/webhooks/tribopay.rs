//! TriboPay webhook adapter. Identifies transactions by `hash` and
//! reports the settled amount as `amount_paid`.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{require_amount, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
struct TriboPayPayload {
    hash: Option<String>,
    payment_status: Option<String>,
    payment_method: Option<String>,
    amount_paid: Option<Decimal>,
    #[serde(default)]
    customer: TriboPayCustomer,
}

#[derive(Debug, Default, Deserialize)]
struct TriboPayCustomer {
    name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
}

pub struct TriboPayAdapter;

impl GatewayAdapter for TriboPayAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::TriboPay
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: TriboPayPayload = serde_json::from_slice(body)?;

        Ok(EventDraft {
            external_payment_id: require_str(payload.hash, "hash")?,
            raw_status: require_str(payload.payment_status, "payment_status")?,
            payment_method: require_str(payload.payment_method, "payment_method")?,
            amount: require_amount(payload.amount_paid, "amount_paid")?,
            customer: Customer {
                name: payload.customer.name,
                email: payload.customer.email,
                phone: payload.customer.phone_number,
            },
            created_at: None,
            updated_at: None,
        })
    }
}
