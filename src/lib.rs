//! adtrack - Campaign tracking backend for affiliate/ad operations
//!
//! This library implements the payment webhook reconciliation core: parsing
//! gateway-specific webhook payloads, normalizing payment statuses into one
//! canonical vocabulary, and folding events idempotently into per-campaign
//! financial counters and daily finance snapshots.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod status;
