mod from_row;
mod schema;
pub mod queries;

pub use schema::init_db;

use std::sync::Arc;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::status::StatusMap;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Application state holding the database pool and the status map.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    /// Loaded once at startup; webhook handlers only read it.
    pub status_map: Arc<StatusMap>,
}

pub fn create_pool(database_path: &str) -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::file(database_path);
    Pool::builder().max_size(10).build(manager)
}
