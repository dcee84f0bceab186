//! Plan record storage in the key-value table.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{PlanError, Result, StoreResultExt},
    models::ReadingPlan,
    store::PlanStore,
};

/// Key under which the current plan is stored.
pub const PLAN_KEY: &str = "reading_plan";

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";

impl super::Database {
    /// Raw value stored under `key`.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .store_context("Failed to query key-value store")
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(
                UPSERT_VALUE_SQL,
                params![key, value, Timestamp::now().to_string()],
            )
            .store_context("Failed to write key-value store")?;
        Ok(())
    }

    /// Removes `key`. Returns whether it existed.
    pub fn remove_value(&self, key: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .store_context("Failed to delete from key-value store")?;
        Ok(removed > 0)
    }
}

impl PlanStore for super::Database {
    fn load_plan(&self) -> Result<Option<ReadingPlan>> {
        self.get_value(PLAN_KEY)?
            .map(|json| serde_json::from_str::<ReadingPlan>(&json).map_err(PlanError::from))
            .transpose()
    }

    fn save_plan(&mut self, plan: &ReadingPlan) -> Result<()> {
        let json = serde_json::to_string(plan)?;
        self.set_value(PLAN_KEY, &json)?;
        debug!("Saved {} plan ({} bytes)", plan.plan_type(), json.len());
        Ok(())
    }

    fn delete_plan(&mut self) -> Result<bool> {
        self.remove_value(PLAN_KEY)
    }
}
