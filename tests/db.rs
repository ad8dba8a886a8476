//! Query-layer tests against an in-memory database.

mod common;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::*;

fn draft(id: &str, amount: Decimal) -> EventDraft {
    EventDraft {
        external_payment_id: id.to_string(),
        raw_status: "approved".to_string(),
        payment_method: "pix".to_string(),
        amount,
        customer: Customer {
            name: Some("Test Buyer".to_string()),
            email: Some("buyer@example.com".to_string()),
            phone: None,
        },
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn integration_marked_in_use_when_campaign_claims_it() {
    let conn = setup_test_db();
    let integration = create_test_integration(&conn, Gateway::Disrupty);
    assert!(!integration.in_use);

    create_test_campaign(&conn, &integration.id);

    let reloaded = queries::get_integration_by_id(&conn, &integration.id)
        .unwrap()
        .unwrap();
    assert!(reloaded.in_use);
}

#[test]
fn event_upsert_captures_previous_contribution() {
    let conn = setup_test_db();
    let integration = create_test_integration(&conn, Gateway::Disrupty);

    let first = queries::upsert_payment_event(
        &conn,
        &integration.id,
        CanonicalStatus::Pending,
        &draft("ev-1", dec!(10.00)),
        "{}",
    )
    .unwrap();
    assert_eq!(first.operation, LedgerOperation::Insert);
    assert!(first.old.is_none());

    let second = queries::upsert_payment_event(
        &conn,
        &integration.id,
        CanonicalStatus::Approved,
        &draft("ev-1", dec!(12.00)),
        "{}",
    )
    .unwrap();
    assert_eq!(second.operation, LedgerOperation::Update);
    assert_eq!(second.old, Some((CanonicalStatus::Pending, dec!(10.00))));
    assert_eq!(second.new_amount, dec!(12.00));

    // Still one ledger row for the payment id.
    let event = queries::get_payment_event(&conn, &integration.id, "ev-1")
        .unwrap()
        .unwrap();
    assert_eq!(event.status, CanonicalStatus::Approved);
    assert_eq!(event.amount, dec!(12.00));
}

#[test]
fn same_external_id_on_other_integration_is_a_separate_row() {
    let conn = setup_test_db();
    let a = create_test_integration(&conn, Gateway::Disrupty);
    let b = create_test_integration(&conn, Gateway::WolfPay);

    let first = queries::upsert_payment_event(
        &conn,
        &a.id,
        CanonicalStatus::Approved,
        &draft("shared-id", dec!(10.00)),
        "{}",
    )
    .unwrap();
    let second = queries::upsert_payment_event(
        &conn,
        &b.id,
        CanonicalStatus::Approved,
        &draft("shared-id", dec!(20.00)),
        "{}",
    )
    .unwrap();

    assert_eq!(first.operation, LedgerOperation::Insert);
    assert_eq!(second.operation, LedgerOperation::Insert);
}

#[test]
fn snapshots_accumulate_one_row_per_day() {
    let conn = setup_test_db();
    let integration = create_test_integration(&conn, Gateway::Disrupty);
    let mut campaign = create_test_campaign(&conn, &integration.id);
    campaign.counters.total_approved = 2;
    campaign.counters.amount_approved = dec!(30.00);

    let day1 = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let day2 = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();

    queries::upsert_finance_snapshot(&conn, &campaign, day1).unwrap();
    // Same day again with moved counters: converges, no second row.
    campaign.counters.total_approved = 3;
    campaign.counters.amount_approved = dec!(45.00);
    queries::upsert_finance_snapshot(&conn, &campaign, day1).unwrap();
    queries::upsert_finance_snapshot(&conn, &campaign, day2).unwrap();

    assert_eq!(queries::count_finance_snapshots(&conn, &campaign.id).unwrap(), 2);

    let snap1 = queries::get_finance_snapshot(&conn, &campaign.id, day1)
        .unwrap()
        .unwrap();
    assert_eq!(snap1.counters.total_approved, 3);
    assert_eq!(snap1.counters.amount_approved, dec!(45.00));

    let listed = queries::list_finance_snapshots(&conn, &campaign.id).unwrap();
    assert_eq!(listed.len(), 2);
    // Newest first.
    assert_eq!(listed[0].snapshot_date, day2);
}

#[test]
fn gateway_sample_is_write_once() {
    let conn = setup_test_db();

    assert!(queries::record_gateway_sample(&conn, Gateway::Sunize, r#"{"first":true}"#).unwrap());
    assert!(!queries::record_gateway_sample(&conn, Gateway::Sunize, r#"{"second":true}"#).unwrap());

    let sample = queries::get_gateway_sample(&conn, Gateway::Sunize)
        .unwrap()
        .unwrap();
    assert_eq!(sample, r#"{"first":true}"#);
}

#[test]
fn counters_survive_a_read_write_cycle() {
    let conn = setup_test_db();
    let integration = create_test_integration(&conn, Gateway::Disrupty);
    let mut campaign = create_test_campaign(&conn, &integration.id);

    campaign.counters.total_approved = 4;
    campaign.counters.amount_approved = dec!(199.96);
    campaign.counters.total_ads = dec!(0.40182);
    adtrack::ledger::recalculate(&mut campaign.counters);
    queries::update_campaign_counters(&conn, &campaign.id, &campaign.counters).unwrap();

    let reloaded = queries::get_campaign_by_id(&conn, &campaign.id)
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.counters, campaign.counters);
}
