//! ZeroOne webhook adapter.
//!
//! ZeroOne wraps everything under `data`, uses camelCase keys, and reports
//! `totalValue` in integer cents (`1000` means 10.00):
//!
//! ```json
//! {
//!   "data": {
//!     "id": "zo_81c3",
//!     "status": "paid",
//!     "paymentMethod": "pix",
//!     "totalValue": 1000,
//!     "customer": { "name": "...", "email": "...", "phone": "..." },
//!     "createdAt": "2024-05-02T13:30:00Z",
//!     "updatedAt": "2024-05-02T13:31:12Z"
//!   }
//! }
//! ```

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Customer, EventDraft, Gateway};

use super::common::{cents_to_decimal, parse_timestamp, require_str, GatewayAdapter};

#[derive(Debug, Deserialize)]
struct ZeroOnePayload {
    #[serde(default)]
    data: ZeroOneData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ZeroOneData {
    id: Option<String>,
    status: Option<String>,
    payment_method: Option<String>,
    /// Integer cents.
    total_value: Option<i64>,
    #[serde(default)]
    customer: ZeroOneCustomer,
    created_at: Option<String>,
    updated_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ZeroOneCustomer {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

pub struct ZeroOneAdapter;

impl GatewayAdapter for ZeroOneAdapter {
    fn gateway(&self) -> Gateway {
        Gateway::ZeroOne
    }

    fn parse(&self, body: &[u8]) -> Result<EventDraft> {
        let payload: ZeroOnePayload = serde_json::from_slice(body)?;
        let data = payload.data;

        let cents = data.total_value.ok_or(AppError::MissingField("totalValue"))?;

        Ok(EventDraft {
            external_payment_id: require_str(data.id, "id")?,
            raw_status: require_str(data.status, "status")?,
            payment_method: require_str(data.payment_method, "paymentMethod")?,
            amount: cents_to_decimal(cents),
            customer: Customer {
                name: data.customer.name,
                email: data.customer.email,
                phone: data.customer.phone,
            },
            created_at: parse_timestamp(data.created_at.as_deref()),
            updated_at: parse_timestamp(data.updated_at.as_deref()),
        })
    }
}
