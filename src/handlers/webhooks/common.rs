//! Common webhook handling infrastructure for payment gateways.
//!
//! Adapters do one job: turn a gateway's raw JSON body into an [`EventDraft`].
//! Everything after that - status normalization, campaign resolution, the
//! ledger upsert, counter deltas, snapshot write - is shared and runs here,
//! inside one transaction per webhook.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::{queries, AppState};
use crate::error::{AppError, Result};
use crate::ledger;
use crate::models::{CanonicalStatus, EventDraft, Gateway, LedgerOperation};

/// Trait for gateway-specific webhook parsing.
///
/// One implementation per payment processor; selection goes through the
/// typed registry in [`super::adapter_for`], never through raw strings.
pub trait GatewayAdapter: Send + Sync {
    /// The gateway this adapter speaks for.
    fn gateway(&self) -> Gateway;

    /// Parse the raw webhook body into a normalized event draft.
    ///
    /// The body shape is dictated by the processor and accepted exactly as
    /// sent. Amount conversion to the decimal currency unit happens here
    /// (some gateways report integer cents).
    fn parse(&self, body: &[u8]) -> Result<EventDraft>;
}

/// Require a string field to be present and non-empty.
pub(crate) fn require_str(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(AppError::MissingField(field)),
    }
}

pub(crate) fn require_amount(value: Option<Decimal>, field: &'static str) -> Result<Decimal> {
    value.ok_or(AppError::MissingField(field))
}

/// Integer cents to the decimal currency unit (divide by 100).
pub(crate) fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Best-effort RFC 3339 timestamp parse; gateways that omit or mangle
/// timestamps fall back to receipt time.
pub(crate) fn parse_timestamp(value: Option<&str>) -> Option<i64> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.timestamp())
}

/// Response body for an accepted webhook.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,
    pub operation: &'static str,
    pub payment_status: CanonicalStatus,
}

/// Axum handler for `POST /webhook/{gateway}/{integration_uid}`.
pub async fn handle_gateway_webhook(
    State(state): State<AppState>,
    Path((gateway, integration_uid)): Path<(Gateway, String)>,
    body: Bytes,
) -> Result<Json<WebhookAck>> {
    let adapter = super::adapter_for(gateway);
    let mut conn = state.db.get()?;

    let integration = queries::get_integration_by_id(&conn, &integration_uid)?
        .ok_or_else(|| AppError::NotFound(format!("integration not found: {}", integration_uid)))?;

    if integration.gateway != gateway {
        return Err(AppError::IntegrationMismatch {
            integration_id: integration.id,
            expected: integration.gateway.as_str().to_string(),
            got: gateway.as_str().to_string(),
        });
    }

    let raw_payload = String::from_utf8_lossy(&body).into_owned();

    // First webhook ever seen for a gateway leaves one raw sample behind for
    // adapter audits. Write-once, and deliberately outside the ledger
    // transaction: a rejected payload is still a useful sample.
    if queries::record_gateway_sample(&conn, gateway, &raw_payload)? {
        tracing::info!("recorded first payload sample for gateway {}", gateway);
    }

    let draft = adapter.parse(&body)?;

    let status = state.status_map.normalize(gateway, &draft.raw_status);
    if status == CanonicalStatus::Unknown {
        // Enforced uniformly for every gateway: an unmapped status needs a
        // status-map update, silently counting it would corrupt the ledger.
        return Err(AppError::UnrecognizedStatus {
            gateway: gateway.as_str().to_string(),
            raw_status: draft.raw_status.clone(),
        });
    }

    let outcome = process_event(&mut conn, &integration.id, status, &draft, &raw_payload)?;

    tracing::info!(
        "{} webhook processed: integration={}, payment={}, status={}, operation={:?}",
        gateway,
        integration.id,
        draft.external_payment_id,
        status,
        outcome,
    );

    Ok(Json(WebhookAck {
        status: "ok",
        operation: match outcome {
            LedgerOperation::Insert => "insert",
            LedgerOperation::Update => "update",
        },
        payment_status: status,
    }))
}

/// Run the ledger upsert, counter delta and snapshot write atomically.
///
/// One transaction per webhook: either the event row, the campaign counters
/// and the daily snapshot all move together, or none of them do and the
/// gateway's retry redelivers into a clean state.
pub fn process_event(
    conn: &mut rusqlite::Connection,
    integration_id: &str,
    status: CanonicalStatus,
    draft: &EventDraft,
    raw_payload: &str,
) -> Result<LedgerOperation> {
    let tx = conn.transaction()?;

    let mut campaign = queries::get_campaign_for_integration(&tx, integration_id)?
        .ok_or_else(|| AppError::NoCampaignAssociated(integration_id.to_string()))?;

    let outcome = queries::upsert_payment_event(&tx, integration_id, status, draft, raw_payload)?;

    ledger::apply_outcome(&mut campaign.counters, &outcome);
    queries::update_campaign_counters(&tx, &campaign.id, &campaign.counters)?;

    queries::upsert_finance_snapshot(&tx, &campaign, Utc::now().date_naive())?;

    tx.commit()?;
    Ok(outcome.operation)
}
