//! ParadisePag webhook adapter. Flat payload with `transaction_`-prefixed
//! fields and denormalized customer columns.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{require_amount, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
struct ParadisePagPayload {
    transaction_id: Option<String>,
    transaction_status: Option<String>,
    payment_type: Option<String>,
    transaction_amount: Option<Decimal>,
    customer_name: Option<String>,
    customer_email: Option<String>,
    customer_phone: Option<String>,
}

pub struct ParadisePagAdapter;

impl GatewayAdapter for ParadisePagAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::ParadisePag
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: ParadisePagPayload = serde_json::from_slice(body)?;

        Ok(EventDraft {
            external_payment_id: require_str(payload.transaction_id, "transaction_id")?,
            raw_status: require_str(payload.transaction_status, "transaction_status")?,
            payment_method: require_str(payload.payment_type, "payment_type")?,
            amount: require_amount(payload.transaction_amount, "transaction_amount")?,
            customer: Customer {
                name: payload.customer_name,
                email: payload.customer_email,
                phone: payload.customer_phone,
            },
            created_at: None,
            updated_at: None,
        })
    }
}
