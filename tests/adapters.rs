//! Per-gateway adapter parse tests: payload shapes, amount normalization,
//! missing-field rejection.

mod common;

use rust_decimal_macros::dec;
use serde_json::json;

use adtrack::error::AppError;
use adtrack::handlers::webhooks::{adapter_for, GatewayAdapter};
use common::*;

fn parse(gateway: Gateway, payload: serde_json::Value) -> adtrack::error::Result<EventDraft> {
    adapter_for(gateway).parse(payload.to_string().as_bytes())
}

#[test]
fn cloudfy_flat_payload() {
    let draft = parse(
        Gateway::CloudFy,
        json!({
            "id": "cf-123",
            "status": "approved",
            "payment_method": "pix",
            "amount": 49.90,
            "customer": { "name": "Ana", "email": "ana@example.com", "phone": "+5511999990000" },
            "created_at": "2026-08-29T12:00:00Z"
        }),
    )
    .unwrap();

    assert_eq!(draft.external_payment_id, "cf-123");
    assert_eq!(draft.raw_status, "approved");
    assert_eq!(draft.payment_method, "pix");
    assert_eq!(draft.amount, dec!(49.90));
    assert_eq!(draft.customer.name.as_deref(), Some("Ana"));
    assert!(draft.created_at.is_some());
}

#[test]
fn disrupty_amount_is_decimal_passthrough() {
    let draft = parse(
        Gateway::Disrupty,
        json!({
            "payment_id": "dis-1",
            "status": "paid",
            "payment_method": "credit_card",
            "amount": 10.00,
            "customer": { "name": "Bob", "email": "bob@example.com", "phone_number": "123" }
        }),
    )
    .unwrap();

    assert_eq!(draft.amount, dec!(10.00));
    assert_eq!(draft.customer.phone.as_deref(), Some("123"));
}

#[test]
fn wolfpay_nested_transaction_and_client() {
    let draft = parse(
        Gateway::WolfPay,
        json!({
            "transaction": { "id": "wp-9", "status": "paid", "method": "boleto", "value": 120.50 },
            "client": { "name": "Carla", "email": "carla@example.com" }
        }),
    )
    .unwrap();

    assert_eq!(draft.external_payment_id, "wp-9");
    assert_eq!(draft.raw_status, "paid");
    assert_eq!(draft.amount, dec!(120.50));
}

#[test]
fn wolfpay_missing_nested_field_names_the_path() {
    let err = parse(
        Gateway::WolfPay,
        json!({
            "transaction": { "status": "paid", "method": "boleto", "value": 120.50 }
        }),
    )
    .unwrap_err();

    match err {
        AppError::MissingField(field) => assert_eq!(field, "transaction.id"),
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[test]
fn vegacheckout_converts_integer_cents() {
    let draft = parse(
        Gateway::VegaCheckout,
        json!({
            "order_id": "vc-1",
            "status": "approved",
            "method": "pix",
            "total_value": 1990,
            "customer": { "name": "Dora", "email": "dora@example.com", "cellphone": "555" }
        }),
    )
    .unwrap();

    assert_eq!(draft.amount, dec!(19.90));
}

#[test]
fn paradisepag_denormalized_customer_columns() {
    let draft = parse(
        Gateway::ParadisePag,
        json!({
            "transaction_id": "pp-1",
            "transaction_status": "approved",
            "payment_type": "pix",
            "transaction_amount": 75.00,
            "customer_name": "Eva",
            "customer_email": "eva@example.com",
            "customer_phone": "999"
        }),
    )
    .unwrap();

    assert_eq!(draft.external_payment_id, "pp-1");
    assert_eq!(draft.amount, dec!(75.00));
    assert_eq!(draft.customer.email.as_deref(), Some("eva@example.com"));
}

#[test]
fn zeroone_converts_cents_inside_data_envelope() {
    let draft = parse(
        Gateway::ZeroOne,
        json!({
            "data": {
                "id": "zo-1",
                "status": "paid",
                "paymentMethod": "pix",
                "totalValue": 1000,
                "customer": { "name": "Fred", "email": "fred@example.com" },
                "createdAt": "2026-08-29T10:00:00Z"
            }
        }),
    )
    .unwrap();

    assert_eq!(draft.external_payment_id, "zo-1");
    assert_eq!(draft.amount, dec!(10.00));
    assert!(draft.created_at.is_some());
}

#[test]
fn zeroone_missing_total_value_rejected() {
    let err = parse(
        Gateway::ZeroOne,
        json!({
            "data": { "id": "zo-2", "status": "paid", "paymentMethod": "pix" }
        }),
    )
    .unwrap_err();

    match err {
        AppError::MissingField(field) => assert_eq!(field, "totalValue"),
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[test]
fn westpay_charge_envelope() {
    let draft = parse(
        Gateway::WestPay,
        json!({
            "id": "west-1",
            "charge": { "status": "paid", "method": "credit_card", "amount": 300.00 },
            "customer": { "name": "Gina", "email": "gina@example.com", "phone": "777" }
        }),
    )
    .unwrap();

    assert_eq!(draft.external_payment_id, "west-1");
    assert_eq!(draft.raw_status, "paid");
    assert_eq!(draft.amount, dec!(300.00));
}

#[test]
fn tribopay_hash_identifier() {
    let draft = parse(
        Gateway::TriboPay,
        json!({
            "hash": "tb-hash-1",
            "payment_status": "paid",
            "payment_method": "pix",
            "amount_paid": 55.55,
            "customer": { "name": "Hugo", "email": "hugo@example.com", "phone_number": "888" }
        }),
    )
    .unwrap();

    assert_eq!(draft.external_payment_id, "tb-hash-1");
    assert_eq!(draft.amount, dec!(55.55));
    assert_eq!(draft.customer.phone.as_deref(), Some("888"));
}

#[test]
fn sunize_uppercase_status_is_kept_raw() {
    let draft = parse(
        Gateway::Sunize,
        json!({
            "order": { "id": "sz-1", "status": "APPROVED" },
            "payment": { "method": "pix", "amount": 80.00 },
            "customer": { "name": "Ivo", "email": "ivo@example.com" }
        }),
    )
    .unwrap();

    // The adapter does not normalize; the status map handles case.
    assert_eq!(draft.raw_status, "APPROVED");
    assert_eq!(draft.amount, dec!(80.00));
}

#[test]
fn ghostspay_camel_case_payload() {
    let draft = parse(
        Gateway::GhostsPay,
        json!({
            "paymentId": "gp-1",
            "status": "paid",
            "paymentMethod": "pix",
            "amount": 42.00,
            "customer": { "name": "Jade", "email": "jade@example.com" },
            "createdAt": "2026-08-29T09:30:00Z",
            "updatedAt": "2026-08-29T09:31:00Z"
        }),
    )
    .unwrap();

    assert_eq!(draft.external_payment_id, "gp-1");
    assert_eq!(draft.amount, dec!(42.00));
    assert!(draft.created_at.is_some());
    assert!(draft.updated_at.is_some());
}

#[test]
fn empty_string_field_counts_as_missing() {
    let err = parse(
        Gateway::CloudFy,
        json!({
            "id": "   ",
            "status": "approved",
            "payment_method": "pix",
            "amount": 10.0
        }),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::MissingField("id")));
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = adapter_for(Gateway::CloudFy).parse(b"not json at all").unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn every_gateway_normalizes_its_paid_vocabulary() {
    let map = StatusMap::builtin();
    let paid = [
        (Gateway::CloudFy, "approved"),
        (Gateway::Disrupty, "paid"),
        (Gateway::WolfPay, "paid"),
        (Gateway::VegaCheckout, "approved"),
        (Gateway::ParadisePag, "approved"),
        (Gateway::ZeroOne, "paid"),
        (Gateway::WestPay, "paid"),
        (Gateway::TriboPay, "paid"),
        (Gateway::Sunize, "APPROVED"),
        (Gateway::GhostsPay, "paid"),
    ];
    for (gateway, raw) in paid {
        assert_eq!(
            map.normalize(gateway, raw),
            CanonicalStatus::Approved,
            "{} should map '{}' to approved",
            gateway,
            raw
        );
    }
}
