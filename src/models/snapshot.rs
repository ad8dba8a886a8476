use chrono::NaiveDate;
use serde::Serialize;

use super::CampaignCounters;

/// Daily point-in-time copy of a campaign's counters, keyed by
/// (campaign_id, snapshot_date). Upserted, not appended: repeated webhooks
/// on the same day converge to the latest totals.
#[derive(Debug, Clone, Serialize)]
pub struct FinanceSnapshot {
    pub id: String,
    pub campaign_id: String,
    pub snapshot_date: NaiveDate,
    pub counters: CampaignCounters,
    pub created_at: i64,
    pub updated_at: i64,
}
