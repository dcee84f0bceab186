//! Read status mutations.

use jiff::Timestamp;
use log::debug;

use super::ReadingEngine;
use crate::{
    error::{PlanError, Result},
    models::{ChapterRef, ReadStatus},
    store::ReadStatusStore,
};

impl ReadingEngine {
    /// Records a chapter's read flag and clears cached views.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::UnknownChapter` for chapters missing from the
    /// catalog, or the store's error when the write fails.
    pub fn set_read_status<S: ReadStatusStore>(
        &mut self,
        store: &mut S,
        chapter: ChapterRef,
        is_read: bool,
        at: Timestamp,
    ) -> Result<()> {
        if !self.catalog.contains(chapter) {
            return Err(PlanError::UnknownChapter {
                book: chapter.book,
                chapter: chapter.chapter,
            });
        }

        let written = store.set(chapter, is_read, at);
        self.cache.invalidate();
        written?;

        debug!(
            "Marked {}:{} as {}",
            chapter.book,
            chapter.chapter,
            if is_read { "read" } else { "unread" }
        );
        Ok(())
    }

    pub fn mark_read<S: ReadStatusStore>(
        &mut self,
        store: &mut S,
        chapter: ChapterRef,
        at: Timestamp,
    ) -> Result<()> {
        self.set_read_status(store, chapter, true, at)
    }

    pub fn mark_unread<S: ReadStatusStore>(
        &mut self,
        store: &mut S,
        chapter: ChapterRef,
        at: Timestamp,
    ) -> Result<()> {
        self.set_read_status(store, chapter, false, at)
    }

    /// Removes all read status records.
    pub fn clear_read_status<S: ReadStatusStore>(&mut self, store: &mut S) -> Result<()> {
        let cleared = store.clear();
        self.cache.invalidate();
        cleared
    }

    /// Whether a chapter is marked read, straight from the store.
    pub fn is_read<S: ReadStatusStore>(&self, store: &S, chapter: ChapterRef) -> Result<bool> {
        store.get(chapter)
    }

    /// Every read status record, ordered by chapter.
    pub fn read_statuses<S: ReadStatusStore>(&self, store: &S) -> Result<Vec<ReadStatus>> {
        store.statuses()
    }

    /// Chapters of `book` marked read, in chapter order.
    pub fn read_chapters_in_book<S: ReadStatusStore>(
        &self,
        store: &S,
        book: u16,
    ) -> Result<Vec<u16>> {
        Ok(store
            .statuses()?
            .into_iter()
            .filter(|status| status.is_read && status.chapter.book == book)
            .map(|status| status.chapter.chapter)
            .collect())
    }
}
