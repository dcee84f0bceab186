//! Data models for reading plans and chapter state.
//!
//! This module holds the domain types shared by every layer of the engine:
//!
//! - [`ChapterRef`] and [`ChapterDuration`]: chapter identity and the static
//!   duration fact reported by the catalog
//! - [`ReadingPlan`] and [`DaySchedule`]: the immutable, day-by-day schedule
//!   produced by [`crate::schedule::PlanBuilder`]
//! - [`ReadStatus`] and [`ReadLookup`]: completion records owned by the
//!   read-status store and the snapshot derived from them
//! - [`ChapterStatus`], [`ProgressSnapshot`], [`PlanStatistics`] and
//!   [`TodayChapter`]: view-models returned to callers
//!
//! None of these types carry presentation logic. Rendering is left to the
//! consuming interface.

pub mod chapter;
pub mod plan;
pub mod progress;
pub mod read_status;
pub mod status;
pub mod today;

#[cfg(test)]
mod tests;

pub use chapter::{Book, ChapterDuration, ChapterRef};
pub(crate) use plan::PlanRecord;
pub use plan::{DaySchedule, PlanKey, PlanType, ReadingPlan};
pub use progress::{PlanStatistics, ProgressSnapshot};
pub use read_status::{ReadLookup, ReadStatus};
pub use status::{ChapterStatus, PartitionRule, ProgressMode};
pub use today::TodayChapter;
