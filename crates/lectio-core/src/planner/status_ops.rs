//! Read status operations for the Planner.

use jiff::Timestamp;

use super::Planner;
use crate::{
    error::Result,
    models::{ChapterRef, ReadStatus},
    params::SetReadStatus,
};

impl Planner {
    /// Marks a chapter read or unread, stamped with the current time.
    pub async fn set_read_status(&self, params: &SetReadStatus) -> Result<()> {
        let SetReadStatus { chapter, is_read } = *params;
        let at = Timestamp::now();

        self.run(move |engine, db| engine.set_read_status(db, chapter, is_read, at))
            .await
    }

    pub async fn mark_read(&self, chapter: ChapterRef) -> Result<()> {
        self.set_read_status(&SetReadStatus {
            chapter,
            is_read: true,
        })
        .await
    }

    pub async fn mark_unread(&self, chapter: ChapterRef) -> Result<()> {
        self.set_read_status(&SetReadStatus {
            chapter,
            is_read: false,
        })
        .await
    }

    /// Removes every read status record.
    pub async fn clear_read_status(&self) -> Result<()> {
        self.run(|engine, db| engine.clear_read_status(db)).await
    }

    pub async fn is_read(&self, chapter: ChapterRef) -> Result<bool> {
        self.run(move |engine, db| engine.is_read(&*db, chapter)).await
    }

    pub async fn read_statuses(&self) -> Result<Vec<ReadStatus>> {
        self.run(|engine, db| engine.read_statuses(&*db)).await
    }
}
