use rust_decimal::Decimal;
use serde::Serialize;

use super::CanonicalStatus;

/// Running per-campaign aggregates: one (count, amount) bucket per canonical
/// status, the ad spend, and the derived profit/ROI.
///
/// Mutated only through [`crate::ledger::apply_delta`] and recalculated only
/// through [`crate::ledger::recalculate`] - never by direct field arithmetic
/// at call sites.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CampaignCounters {
    pub total_approved: i64,
    pub amount_approved: Decimal,
    pub total_pending: i64,
    pub amount_pending: Decimal,
    pub total_refunded: i64,
    pub amount_refunded: Decimal,
    pub total_rejected: i64,
    pub amount_rejected: Decimal,
    pub total_abandoned: i64,
    pub amount_abandoned: Decimal,
    pub total_chargeback: i64,
    pub amount_chargeback: Decimal,
    pub total_canceled: i64,
    pub amount_canceled: Decimal,

    /// Ad spend, written by the campaign CRUD layer.
    pub total_ads: Decimal,
    /// amount_approved - total_ads.
    pub profit: Decimal,
    /// profit / total_ads * 100, rounded to 5 places; 0 when spend is 0.
    pub roi: Decimal,
}

impl CampaignCounters {
    /// The (count, amount) bucket for a status. `Unknown` has no bucket:
    /// the pipeline rejects unknown statuses before the ledger runs.
    pub fn bucket_mut(&mut self, status: CanonicalStatus) -> Option<(&mut i64, &mut Decimal)> {
        match status {
            CanonicalStatus::Approved => Some((&mut self.total_approved, &mut self.amount_approved)),
            CanonicalStatus::Pending => Some((&mut self.total_pending, &mut self.amount_pending)),
            CanonicalStatus::Refunded => Some((&mut self.total_refunded, &mut self.amount_refunded)),
            CanonicalStatus::Rejected => Some((&mut self.total_rejected, &mut self.amount_rejected)),
            CanonicalStatus::Abandoned => {
                Some((&mut self.total_abandoned, &mut self.amount_abandoned))
            }
            CanonicalStatus::Chargeback => {
                Some((&mut self.total_chargeback, &mut self.amount_chargeback))
            }
            CanonicalStatus::Canceled => Some((&mut self.total_canceled, &mut self.amount_canceled)),
            CanonicalStatus::Unknown => None,
        }
    }

    pub fn bucket(&self, status: CanonicalStatus) -> Option<(i64, Decimal)> {
        match status {
            CanonicalStatus::Approved => Some((self.total_approved, self.amount_approved)),
            CanonicalStatus::Pending => Some((self.total_pending, self.amount_pending)),
            CanonicalStatus::Refunded => Some((self.total_refunded, self.amount_refunded)),
            CanonicalStatus::Rejected => Some((self.total_rejected, self.amount_rejected)),
            CanonicalStatus::Abandoned => Some((self.total_abandoned, self.amount_abandoned)),
            CanonicalStatus::Chargeback => Some((self.total_chargeback, self.amount_chargeback)),
            CanonicalStatus::Canceled => Some((self.total_canceled, self.amount_canceled)),
            CanonicalStatus::Unknown => None,
        }
    }
}

/// A campaign bound to an integration, carrying the running counters.
#[derive(Debug, Clone, Serialize)]
pub struct Campaign {
    pub id: String,
    pub integration_id: String,
    pub name: String,
    pub counters: CampaignCounters,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}
