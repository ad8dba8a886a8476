//! Row mapping trait and helpers for reducing boilerplate in queries.

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, ToSql};
use rust_decimal::Decimal;

use crate::models::*;

/// Parse a string column into a type with `FromStr`, converting parse errors
/// to rusqlite errors instead of panicking on corrupt data.
fn parse_str_col<T: FromStr>(row: &Row, col: usize, col_name: &str) -> rusqlite::Result<T> {
    row.get::<_, String>(col)?.parse::<T>().map_err(|_| {
        rusqlite::Error::InvalidColumnType(col, col_name.to_string(), rusqlite::types::Type::Text)
    })
}

/// Decimal columns are stored as TEXT.
fn parse_decimal(row: &Row, col: usize, col_name: &str) -> rusqlite::Result<Decimal> {
    let raw: String = row.get(col)?;
    Decimal::from_str(&raw).map_err(|_| {
        rusqlite::Error::InvalidColumnType(col, col_name.to_string(), rusqlite::types::Type::Text)
    })
}

/// Trait for constructing a type from a database row.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

/// Query for a single optional result.
pub fn query_one<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> crate::error::Result<Option<T>> {
    conn.query_row(sql, params, T::from_row)
        .optional()
        .map_err(Into::into)
}

/// Query for multiple results.
pub fn query_all<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> crate::error::Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, T::from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ============ SQL SELECT Constants ============

pub const INTEGRATION_COLS: &str =
    "id, gateway, name, in_use, active, created_at, updated_at, deleted_at";

/// Counter columns shared by campaigns and finance_snapshots.
pub const COUNTER_COLS: &str = "total_approved, amount_approved, total_pending, amount_pending, \
     total_refunded, amount_refunded, total_rejected, amount_rejected, \
     total_abandoned, amount_abandoned, total_chargeback, amount_chargeback, \
     total_canceled, amount_canceled, total_ads, profit, roi";

pub const PAYMENT_EVENT_COLS: &str = "id, integration_id, external_payment_id, status, payment_method, amount, \
     customer_name, customer_email, customer_phone, raw_payload, created_at, updated_at";

pub fn campaign_cols() -> String {
    format!("id, integration_id, name, {}, created_at, updated_at, deleted_at", COUNTER_COLS)
}

pub fn snapshot_cols() -> String {
    format!("id, campaign_id, snapshot_date, {}, created_at, updated_at", COUNTER_COLS)
}

/// Read the 17 counter columns starting at `base`.
fn counters_from_row(row: &Row, base: usize) -> rusqlite::Result<CampaignCounters> {
    Ok(CampaignCounters {
        total_approved: row.get(base)?,
        amount_approved: parse_decimal(row, base + 1, "amount_approved")?,
        total_pending: row.get(base + 2)?,
        amount_pending: parse_decimal(row, base + 3, "amount_pending")?,
        total_refunded: row.get(base + 4)?,
        amount_refunded: parse_decimal(row, base + 5, "amount_refunded")?,
        total_rejected: row.get(base + 6)?,
        amount_rejected: parse_decimal(row, base + 7, "amount_rejected")?,
        total_abandoned: row.get(base + 8)?,
        amount_abandoned: parse_decimal(row, base + 9, "amount_abandoned")?,
        total_chargeback: row.get(base + 10)?,
        amount_chargeback: parse_decimal(row, base + 11, "amount_chargeback")?,
        total_canceled: row.get(base + 12)?,
        amount_canceled: parse_decimal(row, base + 13, "amount_canceled")?,
        total_ads: parse_decimal(row, base + 14, "total_ads")?,
        profit: parse_decimal(row, base + 15, "profit")?,
        roi: parse_decimal(row, base + 16, "roi")?,
    })
}

// ============ FromRow Implementations ============

impl FromRow for Integration {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Integration {
            id: row.get(0)?,
            gateway: parse_str_col(row, 1, "gateway")?,
            name: row.get(2)?,
            in_use: row.get::<_, i32>(3)? != 0,
            active: row.get::<_, i32>(4)? != 0,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
            deleted_at: row.get(7)?,
        })
    }
}

impl FromRow for Campaign {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Campaign {
            id: row.get(0)?,
            integration_id: row.get(1)?,
            name: row.get(2)?,
            counters: counters_from_row(row, 3)?,
            created_at: row.get(20)?,
            updated_at: row.get(21)?,
            deleted_at: row.get(22)?,
        })
    }
}

impl FromRow for PaymentEvent {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(PaymentEvent {
            id: row.get(0)?,
            integration_id: row.get(1)?,
            external_payment_id: row.get(2)?,
            status: parse_str_col(row, 3, "status")?,
            payment_method: row.get(4)?,
            amount: parse_decimal(row, 5, "amount")?,
            customer: Customer {
                name: row.get(6)?,
                email: row.get(7)?,
                phone: row.get(8)?,
            },
            raw_payload: row.get(9)?,
            created_at: row.get(10)?,
            updated_at: row.get(11)?,
        })
    }
}

impl FromRow for FinanceSnapshot {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let date_raw: String = row.get(2)?;
        let snapshot_date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                2,
                "snapshot_date".to_string(),
                rusqlite::types::Type::Text,
            )
        })?;
        Ok(FinanceSnapshot {
            id: row.get(0)?,
            campaign_id: row.get(1)?,
            snapshot_date,
            counters: counters_from_row(row, 3)?,
            created_at: row.get(20)?,
            updated_at: row.get(21)?,
        })
    }
}
