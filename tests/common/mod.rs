//! Test utilities and fixtures for adtrack integration tests

#![allow(dead_code)]

use axum::Router;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::sync::Arc;

pub use adtrack::db::{init_db, queries, AppState};
pub use adtrack::models::*;
pub use adtrack::status::StatusMap;

/// Create an in-memory test database with schema initialized
pub fn setup_test_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    init_db(&conn).expect("Failed to initialize schema");
    conn
}

/// Create an AppState for testing with an in-memory database.
/// Pool size is pinned to 1 so every checkout sees the same in-memory db.
pub fn create_test_app_state() -> AppState {
    let manager = SqliteConnectionManager::memory();
    let pool = Pool::builder().max_size(1).build(manager).unwrap();
    {
        let conn = pool.get().unwrap();
        init_db(&conn).unwrap();
    }

    AppState {
        db: pool,
        status_map: Arc::new(StatusMap::builtin()),
    }
}

/// Create a test integration for the given gateway
pub fn create_test_integration(conn: &Connection, gateway: Gateway) -> Integration {
    let input = CreateIntegration {
        gateway,
        name: format!("Test {} Integration", gateway),
    };
    queries::create_integration(conn, &input).expect("Failed to create test integration")
}

/// Create a test campaign bound to an integration
pub fn create_test_campaign(conn: &Connection, integration_id: &str) -> Campaign {
    queries::create_campaign(conn, integration_id, "Test Campaign")
        .expect("Failed to create test campaign")
}

/// Router wired with the webhook routes and the given state
pub fn webhook_app(state: AppState) -> Router {
    adtrack::handlers::webhooks::router().with_state(state)
}

/// Get the current timestamp
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
