//! Campaign counter ledger: the delta-apply protocol.
//!
//! Counters are never assigned directly. Every webhook produces at most one
//! delta: reverse the event's previous contribution (if the ledger row
//! already existed), apply the new one, recompute derived metrics. A pure
//! redelivery reverses and re-applies the same bucket, netting to zero.

use rust_decimal::Decimal;

use crate::models::{CampaignCounters, CanonicalStatus, LedgerOutcome};

/// Apply one ledger outcome to a campaign's counters.
///
/// `old` is the (status, amount) pair captured from the existing ledger row
/// before it was overwritten; `None` on first delivery of a payment id.
pub fn apply_delta(
    counters: &mut CampaignCounters,
    old: Option<(CanonicalStatus, Decimal)>,
    new_status: CanonicalStatus,
    new_amount: Decimal,
) {
    if let Some((old_status, old_amount)) = old {
        if let Some((count, amount)) = counters.bucket_mut(old_status) {
            *count -= 1;
            *amount -= old_amount;
        }
    }
    if let Some((count, amount)) = counters.bucket_mut(new_status) {
        *count += 1;
        *amount += new_amount;
    }
    recalculate(counters);
}

/// Convenience wrapper taking the event-ledger outcome directly.
pub fn apply_outcome(counters: &mut CampaignCounters, outcome: &LedgerOutcome) {
    apply_delta(
        counters,
        outcome.old,
        outcome.new_status,
        outcome.new_amount,
    );
}

/// The single recalculation entry point for derived metrics.
///
/// profit = amount_approved - total_ads (spend). ROI is profit over spend as
/// a percentage, rounded to 5 places, and 0 when there is no spend.
pub fn recalculate(counters: &mut CampaignCounters) {
    counters.profit = counters.amount_approved - counters.total_ads;
    counters.roi = if counters.total_ads > Decimal::ZERO {
        (counters.profit / counters.total_ads * Decimal::ONE_HUNDRED).round_dp(5)
    } else {
        Decimal::ZERO
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn approved(counters: &CampaignCounters) -> (i64, Decimal) {
        (counters.total_approved, counters.amount_approved)
    }

    #[test]
    fn first_delivery_fills_one_bucket() {
        let mut c = CampaignCounters::default();
        apply_delta(&mut c, None, CanonicalStatus::Pending, dec!(10.00));

        assert_eq!(c.total_pending, 1);
        assert_eq!(c.amount_pending, dec!(10.00));
        assert_eq!(approved(&c), (0, Decimal::ZERO));
    }

    #[test]
    fn transition_moves_contribution_between_buckets() {
        let mut c = CampaignCounters::default();
        apply_delta(&mut c, None, CanonicalStatus::Pending, dec!(10.00));
        apply_delta(
            &mut c,
            Some((CanonicalStatus::Pending, dec!(10.00))),
            CanonicalStatus::Approved,
            dec!(10.00),
        );

        assert_eq!(c.total_pending, 0);
        assert_eq!(c.amount_pending, Decimal::ZERO);
        assert_eq!(c.total_approved, 1);
        assert_eq!(c.amount_approved, dec!(10.00));
    }

    #[test]
    fn redelivery_nets_to_zero_drift() {
        let mut c = CampaignCounters::default();
        apply_delta(&mut c, None, CanonicalStatus::Approved, dec!(25.50));
        let after_first = c.clone();

        // Same status, same amount: decrement and increment cancel out.
        apply_delta(
            &mut c,
            Some((CanonicalStatus::Approved, dec!(25.50))),
            CanonicalStatus::Approved,
            dec!(25.50),
        );
        assert_eq!(c, after_first);
    }

    #[test]
    fn profit_and_roi_formula() {
        let mut c = CampaignCounters {
            total_ads: dec!(0.40182),
            ..Default::default()
        };
        apply_delta(&mut c, None, CanonicalStatus::Approved, dec!(150.00));

        assert_eq!(c.profit, dec!(149.59818));
        let expected_roi = (dec!(149.59818) / dec!(0.40182) * Decimal::ONE_HUNDRED).round_dp(5);
        assert_eq!(c.roi, expected_roi);
    }

    #[test]
    fn roi_is_zero_without_spend() {
        let mut c = CampaignCounters::default();
        apply_delta(&mut c, None, CanonicalStatus::Approved, dec!(99.99));

        assert_eq!(c.profit, dec!(99.99));
        assert_eq!(c.roi, Decimal::ZERO);
    }

    #[test]
    fn chargeback_after_approval() {
        let mut c = CampaignCounters {
            total_ads: dec!(5),
            ..Default::default()
        };
        apply_delta(&mut c, None, CanonicalStatus::Approved, dec!(30.00));
        assert_eq!(c.profit, dec!(25.00));

        apply_delta(
            &mut c,
            Some((CanonicalStatus::Approved, dec!(30.00))),
            CanonicalStatus::Chargeback,
            dec!(30.00),
        );
        assert_eq!(c.total_approved, 0);
        assert_eq!(c.amount_approved, Decimal::ZERO);
        assert_eq!(c.total_chargeback, 1);
        assert_eq!(c.amount_chargeback, dec!(30.00));
        assert_eq!(c.profit, dec!(-5.00));
    }
}
