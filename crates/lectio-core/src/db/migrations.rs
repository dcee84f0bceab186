//! Database schema initialization and migrations.

use crate::error::{Result, StoreResultExt};

/// Schema version recorded in `PRAGMA user_version`.
const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .store_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings databases created by older versions up to date.
    fn apply_migrations(&self) -> Result<()> {
        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .store_context("Failed to read schema version")?;

        if version >= SCHEMA_VERSION {
            return Ok(());
        }

        // Early databases tracked the flag only, without a read timestamp
        let has_read_at: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('read_status') WHERE name = 'read_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .store_context("Failed to inspect read_status table")?;

        if !has_read_at {
            self.connection
                .execute("ALTER TABLE read_status ADD COLUMN read_at TEXT", [])
                .store_context("Failed to add read_at column to read_status table")?;
        }

        self.connection
            .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
            .store_context("Failed to record schema version")
    }

    /// Schema version of the open database.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .store_context("Failed to read schema version")
    }
}
