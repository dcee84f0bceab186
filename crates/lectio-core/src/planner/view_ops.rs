//! View queries for the Planner.
//!
//! `today` is supplied by the caller so that interfaces can honor a device
//! date or an override. None of these fail when no plan exists.

use std::sync::Arc;

use jiff::civil::Date;

use super::Planner;
use crate::{
    error::Result,
    models::{ChapterRef, ChapterStatus, PlanStatistics, ProgressSnapshot, TodayChapter},
};

impl Planner {
    pub async fn today(&self, today: Date) -> Result<Arc<Vec<TodayChapter>>> {
        self.run(move |engine, db| engine.today(&*db, today)).await
    }

    pub async fn chapter_status(&self, chapter: ChapterRef, today: Date) -> Result<ChapterStatus> {
        self.run(move |engine, db| engine.chapter_status(&*db, chapter, today))
            .await
    }

    /// Status of every chapter in a book.
    pub async fn book_statuses(
        &self,
        book: u16,
        today: Date,
    ) -> Result<Vec<(ChapterRef, ChapterStatus)>> {
        self.run(move |engine, db| engine.book_statuses(&*db, book, today))
            .await
    }

    pub async fn progress(&self, today: Date) -> Result<ProgressSnapshot> {
        self.run(move |engine, db| engine.progress(&*db, today)).await
    }

    pub async fn statistics(&self, today: Date) -> Result<PlanStatistics> {
        self.run(move |engine, db| engine.statistics(&*db, today)).await
    }
}
