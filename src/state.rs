//! Application state for Roastery.
//!
//! Contains the shared state that is passed to all handlers.

use crate::db::DbPool;
use crate::{config, Result};

/// Application state shared across all handlers.
///
/// Constructed once at startup; the store handle lives for the whole
/// process and is closed at graceful shutdown.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DbPool,
}

impl AppState {
    /// Create a new application state, connecting the store and applying
    /// the schema.
    pub async fn new() -> Result<Self> {
        let config = config::config();

        let db = crate::db::init_pool(&config.database.path).await?;
        crate::db::initialize_schema(&db).await?;

        Ok(Self { db })
    }

    /// Build state around an existing pool. Used by tests.
    pub fn with_pool(db: DbPool) -> Self {
        Self { db }
    }
}
