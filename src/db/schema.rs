use rusqlite::Connection;

/// Initialize the database schema.
///
/// Decimal currency values are stored as TEXT and parsed with rust_decimal
/// on read; SQLite REAL would lose the fixed-point guarantees the ledger
/// depends on.
pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        -- Integrations (configured gateway credentials/endpoints)
        -- Soft delete: deleted_at = timestamp when deleted, NULL = active
        CREATE TABLE IF NOT EXISTS integrations (
            id TEXT PRIMARY KEY,
            gateway TEXT NOT NULL CHECK (gateway IN (
                'cloudfy', 'disrupty', 'wolfpay', 'vegacheckout', 'paradisepag',
                'zeroone', 'westpay', 'tribopay', 'sunize', 'ghostspay'
            )),
            name TEXT NOT NULL,
            in_use INTEGER NOT NULL DEFAULT 0,
            active INTEGER NOT NULL DEFAULT 1,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            deleted_at INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_integrations_gateway ON integrations(gateway);
        CREATE INDEX IF NOT EXISTS idx_integrations_active ON integrations(id) WHERE deleted_at IS NULL;

        -- Campaigns (running financial counters, one bucket per canonical status)
        -- The CRUD layer guarantees at most one non-deleted campaign per integration.
        CREATE TABLE IF NOT EXISTS campaigns (
            id TEXT PRIMARY KEY,
            integration_id TEXT NOT NULL REFERENCES integrations(id),
            name TEXT NOT NULL,

            total_approved INTEGER NOT NULL DEFAULT 0,
            amount_approved TEXT NOT NULL DEFAULT '0',
            total_pending INTEGER NOT NULL DEFAULT 0,
            amount_pending TEXT NOT NULL DEFAULT '0',
            total_refunded INTEGER NOT NULL DEFAULT 0,
            amount_refunded TEXT NOT NULL DEFAULT '0',
            total_rejected INTEGER NOT NULL DEFAULT 0,
            amount_rejected TEXT NOT NULL DEFAULT '0',
            total_abandoned INTEGER NOT NULL DEFAULT 0,
            amount_abandoned TEXT NOT NULL DEFAULT '0',
            total_chargeback INTEGER NOT NULL DEFAULT 0,
            amount_chargeback TEXT NOT NULL DEFAULT '0',
            total_canceled INTEGER NOT NULL DEFAULT 0,
            amount_canceled TEXT NOT NULL DEFAULT '0',

            total_ads TEXT NOT NULL DEFAULT '0',
            profit TEXT NOT NULL DEFAULT '0',
            roi TEXT NOT NULL DEFAULT '0',

            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            deleted_at INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_campaigns_integration ON campaigns(integration_id) WHERE deleted_at IS NULL;

        -- Payment events (the normalized ledger; one row per payment attempt)
        -- (integration_id, external_payment_id) is the idempotency key: repeated
        -- deliveries for the same payment id mutate the row in place.
        CREATE TABLE IF NOT EXISTS payment_events (
            id TEXT PRIMARY KEY,
            integration_id TEXT NOT NULL REFERENCES integrations(id),
            external_payment_id TEXT NOT NULL,
            status TEXT NOT NULL CHECK (status IN (
                'approved', 'pending', 'refunded', 'rejected',
                'abandoned', 'chargeback', 'canceled'
            )),
            payment_method TEXT NOT NULL,
            amount TEXT NOT NULL,
            customer_name TEXT,
            customer_email TEXT,
            customer_phone TEXT,
            raw_payload TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            UNIQUE(integration_id, external_payment_id)
        );
        CREATE INDEX IF NOT EXISTS idx_payment_events_integration ON payment_events(integration_id);
        CREATE INDEX IF NOT EXISTS idx_payment_events_status ON payment_events(integration_id, status);

        -- Finance snapshots (daily upserted copy of campaign counters)
        CREATE TABLE IF NOT EXISTS finance_snapshots (
            id TEXT PRIMARY KEY,
            campaign_id TEXT NOT NULL REFERENCES campaigns(id),
            snapshot_date TEXT NOT NULL,

            total_approved INTEGER NOT NULL DEFAULT 0,
            amount_approved TEXT NOT NULL DEFAULT '0',
            total_pending INTEGER NOT NULL DEFAULT 0,
            amount_pending TEXT NOT NULL DEFAULT '0',
            total_refunded INTEGER NOT NULL DEFAULT 0,
            amount_refunded TEXT NOT NULL DEFAULT '0',
            total_rejected INTEGER NOT NULL DEFAULT 0,
            amount_rejected TEXT NOT NULL DEFAULT '0',
            total_abandoned INTEGER NOT NULL DEFAULT 0,
            amount_abandoned TEXT NOT NULL DEFAULT '0',
            total_chargeback INTEGER NOT NULL DEFAULT 0,
            amount_chargeback TEXT NOT NULL DEFAULT '0',
            total_canceled INTEGER NOT NULL DEFAULT 0,
            amount_canceled TEXT NOT NULL DEFAULT '0',

            total_ads TEXT NOT NULL DEFAULT '0',
            profit TEXT NOT NULL DEFAULT '0',
            roi TEXT NOT NULL DEFAULT '0',

            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            UNIQUE(campaign_id, snapshot_date)
        );
        CREATE INDEX IF NOT EXISTS idx_finance_snapshots_campaign ON finance_snapshots(campaign_id, snapshot_date DESC);

        -- Gateway samples (write-once raw payload per gateway, for adapter audits)
        CREATE TABLE IF NOT EXISTS gateway_samples (
            gateway TEXT PRIMARY KEY,
            payload TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}
