//! Disrupty webhook adapter. Decimal amounts, flat payload.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{require_amount, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
struct DisruptyPayload {
    payment_id: Option<String>,
    status: Option<String>,
    payment_method: Option<String>,
    /// Already in the decimal currency unit, passed through unchanged.
    amount: Option<Decimal>,
    #[serde(default)]
    customer: DisruptyCustomer,
}

#[derive(Debug, Default, Deserialize)]
struct DisruptyCustomer {
    name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
}

pub struct DisruptyAdapter;

impl GatewayAdapter for DisruptyAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::Disrupty
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: DisruptyPayload = serde_json::from_slice(body)?;

        Ok(EventDraft {
            external_payment_id: require_str(payload.payment_id, "payment_id")?,
            raw_status: require_str(payload.status, "status")?,
            payment_method: require_str(payload.payment_method, "payment_method")?,
            amount: require_amount(payload.amount, "amount")?,
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
