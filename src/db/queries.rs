use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

use super::from_row::{
    campaign_cols, query_all, query_one, snapshot_cols, INTEGRATION_COLS, PAYMENT_EVENT_COLS,
};

fn now() -> i64 {
    Utc::now().timestamp()
}

fn gen_id() -> String {
    Uuid::new_v4().to_string()
}

// ============ Integrations ============

pub fn create_integration(conn: &Connection, input: &CreateIntegration) -> Result<Integration> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO integrations (id, gateway, name, in_use, active, created_at, updated_at)
         VALUES (?1, ?2, ?3, 0, 1, ?4, ?5)",
        params![&id, input.gateway.as_str(), &input.name, now, now],
    )?;

    Ok(Integration {
        id,
        gateway: input.gateway,
        name: input.name.clone(),
        in_use: false,
        active: true,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    })
}

pub fn count_integrations(conn: &Connection) -> Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM integrations WHERE deleted_at IS NULL",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn get_integration_by_id(conn: &Connection, id: &str) -> Result<Option<Integration>> {
    query_one(
        conn,
        &format!(
            "SELECT {} FROM integrations WHERE id = ?1 AND deleted_at IS NULL",
            INTEGRATION_COLS
        ),
        &[&id],
    )
}

// ============ Campaigns ============

pub fn create_campaign(conn: &Connection, integration_id: &str, name: &str) -> Result<Campaign> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO campaigns (id, integration_id, name, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![&id, integration_id, name, now, now],
    )?;
    conn.execute(
        "UPDATE integrations SET in_use = 1, updated_at = ?2 WHERE id = ?1",
        params![integration_id, now],
    )?;

    Ok(Campaign {
        id,
        integration_id: integration_id.to_string(),
        name: name.to_string(),
        counters: CampaignCounters::default(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    })
}

pub fn get_campaign_by_id(conn: &Connection, id: &str) -> Result<Option<Campaign>> {
    query_one(
        conn,
        &format!(
            "SELECT {} FROM campaigns WHERE id = ?1 AND deleted_at IS NULL",
            campaign_cols()
        ),
        &[&id],
    )
}

/// Campaign resolver: the single non-deleted campaign bound to an
/// integration, or None (webhook arrived before any campaign used the
/// integration, or after the campaign was deleted).
pub fn get_campaign_for_integration(
    conn: &Connection,
    integration_id: &str,
) -> Result<Option<Campaign>> {
    query_one(
        conn,
        &format!(
            "SELECT {} FROM campaigns WHERE integration_id = ?1 AND deleted_at IS NULL",
            campaign_cols()
        ),
        &[&integration_id],
    )
}

/// Persist the full counter set. The only write path for campaign counters;
/// callers go through the ledger's delta-apply first.
pub fn update_campaign_counters(
    conn: &Connection,
    campaign_id: &str,
    counters: &CampaignCounters,
) -> Result<()> {
    conn.execute(
        "UPDATE campaigns SET
            total_approved = ?2, amount_approved = ?3,
            total_pending = ?4, amount_pending = ?5,
            total_refunded = ?6, amount_refunded = ?7,
            total_rejected = ?8, amount_rejected = ?9,
            total_abandoned = ?10, amount_abandoned = ?11,
            total_chargeback = ?12, amount_chargeback = ?13,
            total_canceled = ?14, amount_canceled = ?15,
            total_ads = ?16, profit = ?17, roi = ?18,
            updated_at = ?19
         WHERE id = ?1",
        params![
            campaign_id,
            counters.total_approved,
            counters.amount_approved.to_string(),
            counters.total_pending,
            counters.amount_pending.to_string(),
            counters.total_refunded,
            counters.amount_refunded.to_string(),
            counters.total_rejected,
            counters.amount_rejected.to_string(),
            counters.total_abandoned,
            counters.amount_abandoned.to_string(),
            counters.total_chargeback,
            counters.amount_chargeback.to_string(),
            counters.total_canceled,
            counters.amount_canceled.to_string(),
            counters.total_ads.to_string(),
            counters.profit.to_string(),
            counters.roi.to_string(),
            now(),
        ],
    )?;
    Ok(())
}

/// Update ad spend and rerun the single recalculation entry point.
/// Spend is written by the campaign CRUD layer; routing it through here keeps
/// profit/ROI consistent with the webhook path.
pub fn set_campaign_spend(conn: &Connection, campaign_id: &str, spend: Decimal) -> Result<Campaign> {
    let mut campaign = get_campaign_by_id(conn, campaign_id)?.ok_or_else(|| {
        crate::error::AppError::NotFound(format!("campaign not found: {}", campaign_id))
    })?;
    campaign.counters.total_ads = spend;
    crate::ledger::recalculate(&mut campaign.counters);
    update_campaign_counters(conn, campaign_id, &campaign.counters)?;
    Ok(campaign)
}

// ============ Payment events (the ledger) ============

pub fn get_payment_event(
    conn: &Connection,
    integration_id: &str,
    external_payment_id: &str,
) -> Result<Option<PaymentEvent>> {
    query_one(
        conn,
        &format!(
            "SELECT {} FROM payment_events
             WHERE integration_id = ?1 AND external_payment_id = ?2",
            PAYMENT_EVENT_COLS
        ),
        &[&integration_id, &external_payment_id],
    )
}

/// Upsert one payment event keyed by (integration_id, external_payment_id).
///
/// On update the previous status/amount are captured before overwriting, so
/// the counter ledger can reverse the old contribution. Must run inside
/// the same transaction as the counter update and snapshot write.
pub fn upsert_payment_event(
    conn: &Connection,
    integration_id: &str,
    status: CanonicalStatus,
    draft: &EventDraft,
    raw_payload: &str,
) -> Result<LedgerOutcome> {
    let existing = get_payment_event(conn, integration_id, &draft.external_payment_id)?;
    let now = now();
    let updated_at = draft.updated_at.unwrap_or(now);

    match existing {
        None => {
            let id = gen_id();
            let created_at = draft.created_at.unwrap_or(now);
            conn.execute(
                "INSERT INTO payment_events
                    (id, integration_id, external_payment_id, status, payment_method, amount,
                     customer_name, customer_email, customer_phone, raw_payload,
                     created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    &id,
                    integration_id,
                    &draft.external_payment_id,
                    status.as_str(),
                    &draft.payment_method,
                    draft.amount.to_string(),
                    &draft.customer.name,
                    &draft.customer.email,
                    &draft.customer.phone,
                    raw_payload,
                    created_at,
                    updated_at,
                ],
            )?;
            Ok(LedgerOutcome {
                operation: LedgerOperation::Insert,
                old: None,
                new_status: status,
                new_amount: draft.amount,
            })
        }
        Some(event) => {
            conn.execute(
                "UPDATE payment_events SET
                    status = ?2, payment_method = ?3, amount = ?4,
                    customer_name = ?5, customer_email = ?6, customer_phone = ?7,
                    raw_payload = ?8, updated_at = ?9
                 WHERE id = ?1",
                params![
                    &event.id,
                    status.as_str(),
                    &draft.payment_method,
                    draft.amount.to_string(),
                    &draft.customer.name,
                    &draft.customer.email,
                    &draft.customer.phone,
                    raw_payload,
                    updated_at,
                ],
            )?;
            Ok(LedgerOutcome {
                operation: LedgerOperation::Update,
                old: Some((event.status, event.amount)),
                new_status: status,
                new_amount: draft.amount,
            })
        }
    }
}

// ============ Finance snapshots ============

/// Upsert the (campaign, day) snapshot from the campaign's current counters.
/// The same day converges to the latest totals instead of duplicating rows.
pub fn upsert_finance_snapshot(
    conn: &Connection,
    campaign: &Campaign,
    date: NaiveDate,
) -> Result<()> {
    let c = &campaign.counters;
    let now = now();
    conn.execute(
        "INSERT INTO finance_snapshots
            (id, campaign_id, snapshot_date,
             total_approved, amount_approved, total_pending, amount_pending,
             total_refunded, amount_refunded, total_rejected, amount_rejected,
             total_abandoned, amount_abandoned, total_chargeback, amount_chargeback,
             total_canceled, amount_canceled, total_ads, profit, roi,
             created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15,
                 ?16, ?17, ?18, ?19, ?20, ?21, ?22)
         ON CONFLICT(campaign_id, snapshot_date) DO UPDATE SET
            total_approved = excluded.total_approved,
            amount_approved = excluded.amount_approved,
            total_pending = excluded.total_pending,
            amount_pending = excluded.amount_pending,
            total_refunded = excluded.total_refunded,
            amount_refunded = excluded.amount_refunded,
            total_rejected = excluded.total_rejected,
            amount_rejected = excluded.amount_rejected,
            total_abandoned = excluded.total_abandoned,
            amount_abandoned = excluded.amount_abandoned,
            total_chargeback = excluded.total_chargeback,
            amount_chargeback = excluded.amount_chargeback,
            total_canceled = excluded.total_canceled,
            amount_canceled = excluded.amount_canceled,
            total_ads = excluded.total_ads,
            profit = excluded.profit,
            roi = excluded.roi,
            updated_at = excluded.updated_at",
        params![
            gen_id(),
            &campaign.id,
            date.format("%Y-%m-%d").to_string(),
            c.total_approved,
            c.amount_approved.to_string(),
            c.total_pending,
            c.amount_pending.to_string(),
            c.total_refunded,
            c.amount_refunded.to_string(),
            c.total_rejected,
            c.amount_rejected.to_string(),
            c.total_abandoned,
            c.amount_abandoned.to_string(),
            c.total_chargeback,
            c.amount_chargeback.to_string(),
            c.total_canceled,
            c.amount_canceled.to_string(),
            c.total_ads.to_string(),
            c.profit.to_string(),
            c.roi.to_string(),
            now,
            now,
        ],
    )?;
    Ok(())
}

pub fn get_finance_snapshot(
    conn: &Connection,
    campaign_id: &str,
    date: NaiveDate,
) -> Result<Option<FinanceSnapshot>> {
    query_one(
        conn,
        &format!(
            "SELECT {} FROM finance_snapshots
             WHERE campaign_id = ?1 AND snapshot_date = ?2",
            snapshot_cols()
        ),
        &[&campaign_id, &date.format("%Y-%m-%d").to_string()],
    )
}

pub fn list_finance_snapshots(conn: &Connection, campaign_id: &str) -> Result<Vec<FinanceSnapshot>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM finance_snapshots
             WHERE campaign_id = ?1 ORDER BY snapshot_date DESC",
            snapshot_cols()
        ),
        &[&campaign_id],
    )
}

pub fn count_finance_snapshots(conn: &Connection, campaign_id: &str) -> Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM finance_snapshots WHERE campaign_id = ?1",
        params![campaign_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

// ============ Gateway samples ============

/// Record one raw payload sample for a gateway. Write-once: the first webhook
/// ever received for a gateway wins, later calls are no-ops.
pub fn record_gateway_sample(conn: &Connection, gateway: Gateway, payload: &str) -> Result<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO gateway_samples (gateway, payload, created_at)
         VALUES (?1, ?2, ?3)",
        params![gateway.as_str(), payload, now()],
    )?;
    Ok(inserted > 0)
}

pub fn get_gateway_sample(conn: &Connection, gateway: Gateway) -> Result<Option<String>> {
    use rusqlite::OptionalExtension;
    conn.query_row(
        "SELECT payload FROM gateway_samples WHERE gateway = ?1",
        params![gateway.as_str()],
        |row| row.get(0),
    )
    .optional()
    .map_err(Into::into)
}
