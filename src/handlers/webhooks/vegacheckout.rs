//! VegaCheckout webhook adapter.
//!
//! VegaCheckout reports `total_value` in integer cents; the adapter divides
//! by 100 so the ledger only ever sees the decimal currency unit.

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{cents_to_decimal, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
struct VegaCheckoutPayload {
    order_id: Option<String>,
    status: Option<String>,
    method: Option<String>,
    /// Integer cents.
    total_value: Option<i64>,
    #[serde(default)]
    customer: VegaCheckoutCustomer,
}

#[derive(Debug, Default, Deserialize)]
struct VegaCheckoutCustomer {
    name: Option<String>,
    email: Option<String>,
    cellphone: Option<String>,
}

pub struct VegaCheckoutAdapter;

impl GatewayAdapter for VegaCheckoutAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::VegaCheckout
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: VegaCheckoutPayload = serde_json::from_slice(body)?;

        let cents = payload
            .total_value
            .ok_or(AppError::MissingField("total_value"))?;

        Ok(EventDraft {
            external_payment_id: require_str(payload.order_id, "order_id")?,
            raw_status: require_str(payload.status, "status")?,
            payment_method: require_str(payload.method, "method")?,
            amount: cents_to_decimal(cents),
            customer: Customer {
                name: payload.customer.name,
                email: payload.customer.email,
                phone: payload.customer.cellphone,
            },
            created_at: None,
            updated_at: None,
        })
    }
}
