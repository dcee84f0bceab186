//! Progress and statistics view-models.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ProgressMode;

/// Progress of a plan as of a given day.
///
/// Chapter-count and time-prorated modes fill the same fields; `mode` records
/// which one decided `is_on_track`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressSnapshot {
    /// Plan chapters marked read
    pub read_chapters: u32,

    pub total_chapters: u32,

    /// Unrounded share of plan chapters read, 0.0 to 100.0
    pub progress_percentage: f64,

    /// Chapters scheduled on days up to and including the current day
    pub scheduled_chapters: u32,

    /// Seconds scheduled on days up to and including the current day
    pub scheduled_seconds: u64,

    /// Seconds of plan chapters marked read
    pub read_seconds: u64,

    pub is_on_track: bool,

    /// Scheduled chapters not yet read
    pub missed_count: u32,

    /// Extrapolated finish date; `None` when there is no plan
    pub estimated_completion_date: Option<Date>,

    /// Unclamped plan day number of the snapshot's "today"
    pub current_day: i64,

    pub mode: ProgressMode,
}

impl ProgressSnapshot {
    /// Snapshot reported when no plan exists.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.total_chapters > 0 && self.read_chapters == self.total_chapters
    }
}

/// Derived statistics shown alongside progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanStatistics {
    pub progress: ProgressSnapshot,

    /// Share of the plan that should be read by now, 0.0 to 100.0
    pub expected_percentage: f64,

    /// Chapters read per elapsed day
    pub reading_velocity: f64,

    /// Actual progress relative to expected progress, capped at 100.0
    pub adherence_rate: f64,

    /// Days elapsed since the start date, at least 1
    pub days_elapsed: i64,

    /// Plan days left including today, 0 once the plan has ended
    pub remaining_days: i64,

    pub remaining_chapters: u32,
}
