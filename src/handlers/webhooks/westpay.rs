//! WestPay webhook adapter. Charge data nested under `charge`, decimal
//! amounts.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{require_amount, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
struct WestPayPayload {
    id: Option<String>,
    #[serde(default)]
    charge: WestPayCharge,
    #[serde(default)]
    customer: WestPayCustomer,
}

#[derive(Debug, Default, Deserialize)]
struct WestPayCharge {
    status: Option<String>,
    method: Option<String>,
    amount: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
struct WestPayCustomer {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

pub struct WestPayAdapter;

impl GatewayAdapter for WestPayAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::WestPay
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: WestPayPayload = serde_json::from_slice(body)?;

        Ok(EventDraft {
            external_payment_id: require_str(payload.id, "id")?,
            raw_status: require_str(payload.charge.status, "charge.status")?,
            payment_method: require_str(payload.charge.method, "charge.method")?,
            amount: require_amount(payload.charge.amount, "charge.amount")?,
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
