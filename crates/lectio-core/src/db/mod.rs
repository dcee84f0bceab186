//! SQLite persistence for plans and read status.
//!
//! [`Database`] implements both [`PlanStore`](crate::store::PlanStore) and
//! [`ReadStatusStore`](crate::store::ReadStatusStore). The plan is stored as a
//! JSON document under a single key of the `kv_store` table; read status lives
//! in its own `read_status` table keyed by `(book, chapter)`.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, StoreResultExt};

pub mod migrations;
pub mod plan_queries;
pub mod status_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).store_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().store_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
