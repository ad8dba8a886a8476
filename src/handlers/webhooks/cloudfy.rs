//! CloudFy webhook adapter.
//!
//! CloudFy posts a flat object with decimal amounts and RFC 3339 timestamps:
//!
//! ```json
//! {
//!   "id": "chf_9f2a",
//!   "status": "approved",
//!   "payment_method": "pix",
//!   "amount": 49.90,
//!   "customer": { "name": "...", "email": "...", "phone": "..." },
//!   "created_at": "2024-05-02T13:30:00Z",
//!   "updated_at": "2024-05-02T13:31:12Z"
//! }
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{parse_timestamp, require_amount, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
struct CloudFyPayload {
    id: Option<String>,
    status: Option<String>,
    payment_method: Option<String>,
    amount: Option<Decimal>,
    #[serde(default)]
    customer: CloudFyCustomer,
    created_at: Option<String>,
    updated_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CloudFyCustomer {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

pub struct CloudFyAdapter;

impl GatewayAdapter for CloudFyAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::CloudFy
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: CloudFyPayload = serde_json::from_slice(body)?;

        Ok(EventDraft {
            external_payment_id: require_str(payload.id, "id")?,
            raw_status: require_str(payload.status, "status")?,
            payment_method: require_str(payload.payment_method, "payment_method")?,
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
