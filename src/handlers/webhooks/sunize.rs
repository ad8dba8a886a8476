//! Sunize webhook adapter. Splits the event across `order`, `payment`
//! and `customer` objects and reports statuses in UPPERCASE.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{require_amount, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
struct SunizePayload {
    #[serde(default)]
    order: SunizeOrder,
    #[serde(default)]
    payment: SunizePayment,
    #[serde(default)]
    customer: SunizeCustomer,
}

#[derive(Debug, Default, Deserialize)]
struct SunizeOrder {
    id: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SunizePayment {
    method: Option<String>,
    amount: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
struct SunizeCustomer {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

pub struct SunizeAdapter;

impl GatewayAdapter for SunizeAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::Sunize
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: SunizePayload = serde_json::from_slice(body)?;

        Ok(EventDraft {
            external_payment_id: require_str(payload.order.id, "order.id")?,
            raw_status: require_str(payload.order.status, "order.status")?,
            payment_method: require_str(payload.payment.method, "payment.method")?,
            amount: require_amount(payload.payment.amount, "payment.amount")?,
            customer: Customer {
                name: payload.customer.name,
                email: payload.customer.email,
                phone: payload.customer.phone,
            },
            created_at: None,
            updated_at: None,
        })
    }
}
