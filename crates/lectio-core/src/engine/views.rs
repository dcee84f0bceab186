//! Read-only views over the current plan.
//!
//! A missing plan is a normal state here: each view answers with its neutral
//! value instead of `PlanError::PlanNotFound`.

use std::sync::Arc;

use jiff::civil::Date;
use log::debug;

use super::ReadingEngine;
use crate::{
    classify,
    error::{PlanError, Result},
    models::{
        ChapterRef, ChapterStatus, PlanStatistics, ProgressSnapshot, ReadLookup, ReadingPlan,
        TodayChapter,
    },
    progress,
    store::{PlanStore, ReadStatusStore},
    today,
};

impl ReadingEngine {
    /// Today's chapters with their read state; empty without a plan or
    /// outside the plan's dates.
    pub fn today<S>(&mut self, store: &S, today: Date) -> Result<Arc<Vec<TodayChapter>>>
    where
        S: PlanStore + ReadStatusStore,
    {
        let Some(plan) = self.find_plan(store)? else {
            return Ok(Arc::new(Vec::new()));
        };

        let key = plan.identity();
        if let Some(cached) = self.cache.today(key, today) {
            debug!("Today cache hit for {today}");
            return Ok(cached);
        }

        let lookup = self.read_lookup(store, &plan)?;
        let chapters = Arc::new(today::today_chapters(
            &plan,
            |chapter| lookup.is_read(chapter),
            today,
        ));
        self.cache.store_today(key, today, Arc::clone(&chapters));
        Ok(chapters)
    }

    /// Display status of one chapter.
    pub fn chapter_status<S>(
        &mut self,
        store: &S,
        chapter: ChapterRef,
        today: Date,
    ) -> Result<ChapterStatus>
    where
        S: PlanStore + ReadStatusStore,
    {
        let Some(plan) = self.find_plan(store)? else {
            return Ok(if store.get(chapter)? {
                ChapterStatus::Completed
            } else {
                ChapterStatus::Normal
            });
        };

        let lookup = self.read_lookup(store, &plan)?;
        Ok(classify::classify(
            &plan,
            |chapter| lookup.is_read(chapter),
            chapter,
            today,
        ))
    }

    /// Display status of every chapter of `book`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` when the book is not in the catalog.
    pub fn book_statuses<S>(
        &mut self,
        store: &S,
        book: u16,
        today: Date,
    ) -> Result<Vec<(ChapterRef, ChapterStatus)>>
    where
        S: PlanStore + ReadStatusStore,
    {
        let chapter_count = self
            .catalog
            .book(book)
            .map(|entry| entry.chapters)
            .ok_or_else(|| {
                PlanError::invalid_input("book").with_reason(format!("unknown book index {book}"))
            })?;

        match self.find_plan(store)? {
            Some(plan) => {
                let lookup = self.read_lookup(store, &plan)?;
                Ok(classify::classify_book(
                    &plan,
                    |chapter| lookup.is_read(chapter),
                    book,
                    chapter_count,
                    today,
                ))
            }
            None => {
                let lookup = ReadLookup::from(&store.get_all()?);
                Ok((1..=chapter_count)
                    .map(|chapter| {
                        let chapter = ChapterRef::new(book, chapter);
                        let status = if lookup.is_read(chapter) {
                            ChapterStatus::Completed
                        } else {
                            ChapterStatus::Normal
                        };
                        (chapter, status)
                    })
                    .collect())
            }
        }
    }

    /// Progress snapshot; neutral without a plan.
    pub fn progress<S>(&mut self, store: &S, today: Date) -> Result<ProgressSnapshot>
    where
        S: PlanStore + ReadStatusStore,
    {
        let Some(plan) = self.find_plan(store)? else {
            return Ok(ProgressSnapshot::neutral());
        };

        let lookup = self.read_lookup(store, &plan)?;
        Ok(progress::compute(
            &plan,
            |chapter| lookup.is_read(chapter),
            today,
        ))
    }

    /// Plan statistics; neutral without a plan.
    pub fn statistics<S>(&mut self, store: &S, today: Date) -> Result<PlanStatistics>
    where
        S: PlanStore + ReadStatusStore,
    {
        let Some(plan) = self.find_plan(store)? else {
            return Ok(PlanStatistics::default());
        };

        let lookup = self.read_lookup(store, &plan)?;
        Ok(progress::statistics(
            &plan,
            |chapter| lookup.is_read(chapter),
            today,
        ))
    }

    fn read_lookup<S: ReadStatusStore>(
        &mut self,
        store: &S,
        plan: &ReadingPlan,
    ) -> Result<Arc<ReadLookup>> {
        let key = plan.identity();
        if let Some(cached) = self.cache.read_lookup(key) {
            return Ok(cached);
        }

        let lookup = Arc::new(ReadLookup::from(&store.get_all()?));
        self.cache.store_read_lookup(key, Arc::clone(&lookup));
        Ok(lookup)
    }
}
