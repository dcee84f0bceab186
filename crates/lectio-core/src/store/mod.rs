//! Persistence contracts for plans and read status.
//!
//! The engine never touches storage directly. It reads and writes through
//! [`PlanStore`] and [`ReadStatusStore`], which are implemented by the SQLite
//! [`Database`](crate::db::Database) and by the in-memory [`MemoryStore`].
//!
//! The read-status store is the only authority on completion state. Plans
//! never carry their own copy of which chapters were read, and deleting a plan
//! leaves read status untouched.

use std::collections::HashMap;

use jiff::Timestamp;

use crate::{
    error::Result,
    models::{ChapterRef, ReadStatus, ReadingPlan},
};

mod memory;

pub use memory::MemoryStore;

/// Durable per-chapter completion flags.
pub trait ReadStatusStore {
    /// Whether a chapter is marked read; `false` when no record exists.
    fn get(&self, chapter: ChapterRef) -> Result<bool>;

    /// Read flag of every chapter with a record.
    fn get_all(&self) -> Result<HashMap<ChapterRef, bool>>;

    /// Records a chapter's read flag. The last write wins.
    fn set(&mut self, chapter: ChapterRef, is_read: bool, at: Timestamp) -> Result<()>;

    /// Removes every record.
    fn clear(&mut self) -> Result<()>;

    /// Full records, ordered by chapter.
    fn statuses(&self) -> Result<Vec<ReadStatus>>;

    /// Number of chapters marked read.
    fn read_count(&self) -> Result<usize> {
        Ok(self.get_all()?.values().filter(|is_read| **is_read).count())
    }
}

/// Storage for the single current reading plan.
pub trait PlanStore {
    /// The stored plan, if one exists.
    fn load_plan(&self) -> Result<Option<ReadingPlan>>;

    /// Stores `plan`, replacing any existing plan.
    fn save_plan(&mut self, plan: &ReadingPlan) -> Result<()>;

    /// Removes the stored plan. Returns whether a plan existed.
    fn delete_plan(&mut self) -> Result<bool>;
}
