//! Plan construction from a catalog and a date range.
//!
//! [`PlanBuilder`] resolves a plan type to its book range, totals the reading
//! time of every chapter in it and hands the chapters to [`partition`], which
//! fills one [`DaySchedule`](crate::models::DaySchedule) per calendar day.
//!
//! ```rust
//! use jiff::civil::date;
//! use lectio_core::{catalog::ContentCatalog, models::PlanType, schedule::PlanBuilder};
//!
//! let catalog = ContentCatalog::standard()?;
//! let plan = PlanBuilder::new(&catalog).build(
//!     PlanType::NewTestament,
//!     date(2025, 1, 1),
//!     date(2025, 3, 31),
//! )?;
//! assert_eq!(plan.total_days(), 90);
//! assert_eq!(plan.total_chapters(), 260);
//! # Ok::<(), lectio_core::PlanError>(())
//! ```

use jiff::{civil::Date, Timestamp};
use log::debug;

use crate::{
    catalog::ContentCatalog,
    dates,
    error::{PlanError, Result},
    models::{ChapterDuration, PartitionRule, PlanRecord, PlanType, ProgressMode, ReadingPlan},
};

mod partition;

#[cfg(test)]
mod tests;

pub use partition::{daily_budget, partition};

/// Builds immutable [`ReadingPlan`]s.
#[derive(Debug, Clone)]
pub struct PlanBuilder<'a> {
    catalog: &'a ContentCatalog,
    progress_mode: ProgressMode,
    partition_rule: PartitionRule,
    created_at: Option<Timestamp>,
}

impl<'a> PlanBuilder<'a> {
    pub fn new(catalog: &'a ContentCatalog) -> Self {
        Self {
            catalog,
            progress_mode: ProgressMode::default(),
            partition_rule: PartitionRule::default(),
            created_at: None,
        }
    }

    /// Sets how progress will be measured for the built plan.
    pub fn progress_mode(mut self, mode: ProgressMode) -> Self {
        self.progress_mode = mode;
        self
    }

    pub fn partition_rule(mut self, rule: PartitionRule) -> Self {
        self.partition_rule = rule;
        self
    }

    /// Fixes the creation timestamp instead of using the current time.
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds a plan covering `plan_type` from `start_date` to `end_date`
    /// inclusive.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidDateRange` if `end_date` is before
    /// `start_date`, and `PlanError::EmptyCorpus` if the book range holds no
    /// chapters.
    pub fn build(&self, plan_type: PlanType, start_date: Date, end_date: Date) -> Result<ReadingPlan> {
        let invalid_range = || PlanError::InvalidDateRange {
            start: start_date,
            end: end_date,
        };

        let day_count = dates::inclusive_day_count(start_date, end_date);
        if day_count < 1 {
            return Err(invalid_range());
        }
        let total_days = u32::try_from(day_count).map_err(|_| invalid_range())?;

        let (start_book, end_book) = self.catalog.book_range(plan_type);
        let chapters: Vec<ChapterDuration> = self.catalog.chapters(start_book, end_book).collect();
        if chapters.is_empty() {
            return Err(PlanError::EmptyCorpus { plan_type });
        }

        let total_chapters = u32::try_from(chapters.len()).map_err(|_| {
            PlanError::invalid_input("plan_type").with_reason("too many chapters in range")
        })?;
        let total_seconds: u64 = chapters.iter().map(|entry| u64::from(entry.seconds)).sum();
        let daily_budget_seconds = daily_budget(total_seconds, total_days);

        let daily_schedule = partition(
            &chapters,
            start_date,
            total_days,
            daily_budget_seconds,
            self.partition_rule,
        )?;

        debug!(
            "Built {plan_type} plan: {total_chapters} chapters over {total_days} days, budget {daily_budget_seconds}s ({})",
            self.partition_rule.as_str()
        );

        ReadingPlan::try_from(PlanRecord {
            plan_type,
            start_date,
            end_date,
            total_days,
            total_chapters,
            total_seconds,
            daily_budget_seconds,
            progress_mode: self.progress_mode,
            partition_rule: self.partition_rule,
            daily_schedule,
            created_at: self.created_at.unwrap_or_else(Timestamp::now),
        })
    }
}
