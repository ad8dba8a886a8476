pub mod common;

pub mod cloudfy;
pub mod disrupty;
pub mod ghostspay;
pub mod paradisepag;
pub mod sunize;
pub mod tribopay;
pub mod vegacheckout;
pub mod westpay;
pub mod wolfpay;
pub mod zeroone;

pub use common::{handle_gateway_webhook, GatewayAdapter};

use axum::{routing::post, Router};

use crate::db::AppState;
use crate::models::Gateway;

/// Adapter registry keyed by the typed gateway enum.
pub fn adapter_for(gateway: Gateway) -> &'static dyn GatewayAdapter {
    match gateway {
        Gateway::CloudFy => &cloudfy::CloudFyAdapter,
        Gateway::Disrupty => &disrupty::DisruptyAdapter,
        Gateway::WolfPay => &wolfpay::WolfPayAdapter,
        Gateway::VegaCheckout => &vegacheckout::VegaCheckoutAdapter,
        Gateway::ParadisePag => &paradisepag::ParadisePagAdapter,
        Gateway::ZeroOne => &zeroone::ZeroOneAdapter,
        Gateway::WestPay => &westpay::WestPayAdapter,
        Gateway::TriboPay => &tribopay::TriboPayAdapter,
        Gateway::Sunize => &sunize::SunizeAdapter,
        Gateway::GhostsPay => &ghostspay::GhostsPayAdapter,
    }
}

pub fn router() -> Router<AppState> {
    // Gateways are inconsistent about trailing slashes in configured URLs.
    Router::new()
        .route(
            "/webhook/{gateway}/{integration_uid}",
            post(handle_gateway_webhook),
        )
        .route(
            "/webhook/{gateway}/{integration_uid}/",
            post(handle_gateway_webhook),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_gateway() {
        for gateway in Gateway::ALL {
            assert_eq!(adapter_for(gateway).gateway(), gateway);
        }
    }
}
