//! Core library for the Lectio reading plan engine.
//!
//! Lectio turns a calendar window into a day-by-day reading schedule. Chapters
//! are distributed by estimated reading *time* rather than by count, so a long
//! chapter takes a larger share of its day. Read status is tracked per chapter
//! and compared against the schedule to report progress.
//!
//! # Layers
//!
//! - [`catalog`]: books, chapter counts and per-chapter durations
//! - [`schedule`]: the greedy partition that builds a [`ReadingPlan`]
//! - [`classify`], [`progress`], [`today`]: pure views over a plan and a
//!   read-status predicate
//! - [`store`]: storage contracts, with [`Database`] (SQLite) and
//!   [`store::MemoryStore`] implementations
//! - [`engine`]: the synchronous [`ReadingEngine`] with its view cache
//! - [`planner`]: the async [`Planner`] used by applications
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use lectio_core::{params::CreatePlan, PlanType, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let params = CreatePlan::new(PlanType::Psalms, date(2025, 1, 1), date(2025, 2, 19));
//! planner.create_plan(&params).await?;
//!
//! let progress = planner.progress(date(2025, 1, 15)).await?;
//! println!("{:.1}% read", progress.progress_percentage);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod catalog;
pub mod classify;
pub mod dates;
pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod progress;
pub mod schedule;
pub mod store;
pub mod today;

// Re-export commonly used types
pub use cache::{CacheStats, ViewCache};
pub use catalog::ContentCatalog;
pub use db::Database;
pub use engine::ReadingEngine;
pub use error::{PlanError, Result};
pub use models::{
    Book, ChapterDuration, ChapterRef, ChapterStatus, DaySchedule, PartitionRule, PlanStatistics,
    PlanType, ProgressMode, ProgressSnapshot, ReadStatus, ReadingPlan, TodayChapter,
};
pub use params::{CreatePlan, SetReadStatus};
pub use planner::{Planner, PlannerBuilder};
pub use schedule::PlanBuilder;
pub use store::{MemoryStore, PlanStore, ReadStatusStore};
