//! Progress measurement strategies.

use jiff::civil::Date;

use crate::models::{ChapterRef, ProgressMode, ReadingPlan};

/// Aggregate counts shared by every strategy, gathered in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total_chapters: u32,
    pub total_seconds: u64,
    pub read_chapters: u32,
    pub read_seconds: u64,
    pub scheduled_chapters: u32,
    pub scheduled_seconds: u64,
    /// Unclamped plan day number
    pub current_day: i64,
}

impl Tally {
    /// Counts read and due chapters of `plan` as of `today`.
    ///
    /// Only chapters in the plan are counted, so reads recorded for other
    /// books never inflate progress.
    pub fn collect(plan: &ReadingPlan, is_read: impl Fn(ChapterRef) -> bool, today: Date) -> Self {
        let current_day = plan.day_number_on(today);
        let mut tally = Self {
            current_day,
            ..Self::default()
        };

        for day in plan.daily_schedule() {
            let due = i64::from(day.day) <= current_day;
            for entry in &day.chapters {
                let seconds = u64::from(entry.seconds);
                tally.total_chapters += 1;
                tally.total_seconds += seconds;
                if due {
                    tally.scheduled_chapters += 1;
                    tally.scheduled_seconds += seconds;
                }
                if is_read(entry.chapter) {
                    tally.read_chapters += 1;
                    tally.read_seconds += seconds;
                }
            }
        }

        tally
    }

    pub fn remaining_chapters(&self) -> u32 {
        self.total_chapters.saturating_sub(self.read_chapters)
    }

    /// Days elapsed since the start date, never less than 1.
    pub fn days_elapsed(&self) -> i64 {
        self.current_day.max(1)
    }
}

/// Measures adherence to the schedule in a strategy-specific unit.
pub trait ProgressStrategy: Send + Sync {
    fn mode(&self) -> ProgressMode;

    /// Units the whole plan consists of.
    fn total_units(&self, tally: &Tally) -> u64;

    /// Units due by the current day.
    fn scheduled_units(&self, tally: &Tally) -> u64;

    /// Units actually read.
    fn achieved_units(&self, tally: &Tally) -> u64;

    fn is_on_track(&self, tally: &Tally) -> bool {
        self.achieved_units(tally) >= self.scheduled_units(tally)
    }
}

/// Counts chapters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapterCountStrategy;

impl ProgressStrategy for ChapterCountStrategy {
    fn mode(&self) -> ProgressMode {
        ProgressMode::Chapters
    }

    fn total_units(&self, tally: &Tally) -> u64 {
        u64::from(tally.total_chapters)
    }

    fn scheduled_units(&self, tally: &Tally) -> u64 {
        u64::from(tally.scheduled_chapters)
    }

    fn achieved_units(&self, tally: &Tally) -> u64 {
        u64::from(tally.read_chapters)
    }
}

/// Weighs chapters by their reading time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeProratedStrategy;

impl ProgressStrategy for TimeProratedStrategy {
    fn mode(&self) -> ProgressMode {
        ProgressMode::Time
    }

    fn total_units(&self, tally: &Tally) -> u64 {
        tally.total_seconds
    }

    fn scheduled_units(&self, tally: &Tally) -> u64 {
        tally.scheduled_seconds
    }

    fn achieved_units(&self, tally: &Tally) -> u64 {
        tally.read_seconds
    }
}

/// Strategy implementing a plan's progress mode.
pub fn strategy_for(mode: ProgressMode) -> &'static dyn ProgressStrategy {
    match mode {
        ProgressMode::Chapters => &ChapterCountStrategy,
        ProgressMode::Time => &TimeProratedStrategy,
    }
}
