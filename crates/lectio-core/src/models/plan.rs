//! Reading plan model and its day-by-day schedule.

use std::{collections::HashMap, fmt, str::FromStr};

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{ChapterDuration, ChapterRef, PartitionRule, ProgressMode};
use crate::{dates, error::PlanError};

/// Selects the contiguous range of books a plan covers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    FullBible,
    OldTestament,
    NewTestament,
    Pentateuch,
    Psalms,
    Gospels,
    Wisdom,
    Prophets,
    Pauline,
}

impl PlanType {
    /// Every plan type, in the order they are offered to users.
    pub const ALL: [PlanType; 9] = [
        PlanType::FullBible,
        PlanType::OldTestament,
        PlanType::NewTestament,
        PlanType::Pentateuch,
        PlanType::Psalms,
        PlanType::Gospels,
        PlanType::Wisdom,
        PlanType::Prophets,
        PlanType::Pauline,
    ];

    /// Inclusive book-index interval covered by this plan type.
    pub fn book_range(&self) -> (u16, u16) {
        match self {
            PlanType::FullBible => (1, 66),
            PlanType::OldTestament => (1, 39),
            PlanType::NewTestament => (40, 66),
            PlanType::Pentateuch => (1, 5),
            PlanType::Psalms => (19, 19),
            PlanType::Gospels => (40, 43),
            PlanType::Wisdom => (18, 22),
            PlanType::Prophets => (23, 39),
            PlanType::Pauline => (45, 57),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::FullBible => "full_bible",
            PlanType::OldTestament => "old_testament",
            PlanType::NewTestament => "new_testament",
            PlanType::Pentateuch => "pentateuch",
            PlanType::Psalms => "psalms",
            PlanType::Gospels => "gospels",
            PlanType::Wisdom => "wisdom",
            PlanType::Prophets => "prophets",
            PlanType::Pauline => "pauline",
        }
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('-', "_");
        PlanType::ALL
            .into_iter()
            .find(|plan_type| plan_type.as_str() == normalized)
            .ok_or_else(|| format!("Invalid plan type: {s}"))
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day's share of the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySchedule {
    /// 1-based day number
    pub day: u32,

    /// Calendar date of this day
    pub date: Date,

    /// Chapters assigned to the day, in canonical order
    pub chapters: Vec<ChapterDuration>,

    /// Sum of the chapters' durations
    pub total_seconds: u64,
}

impl DaySchedule {
    /// Chapter references of this day, without durations.
    pub fn chapter_refs(&self) -> impl Iterator<Item = ChapterRef> + '_ {
        self.chapters.iter().map(|entry| entry.chapter)
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

/// Key identifying one plan instance, used to scope cached views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanKey {
    pub plan_type: PlanType,
    pub created_at: Timestamp,
}

/// An immutable, fully scheduled reading plan.
///
/// Built by [`crate::schedule::PlanBuilder`]. A `chapter -> day` index is kept
/// next to the schedule so lookups stay O(1); it is rebuilt whenever a plan is
/// deserialized, after the stored schedule has been checked for consistency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "PlanRecord")]
pub struct ReadingPlan {
    plan_type: PlanType,
    start_date: Date,
    end_date: Date,
    total_days: u32,
    total_chapters: u32,
    total_seconds: u64,
    daily_budget_seconds: u64,
    progress_mode: ProgressMode,
    partition_rule: PartitionRule,
    daily_schedule: Vec<DaySchedule>,
    created_at: Timestamp,
    #[serde(skip)]
    day_index: HashMap<ChapterRef, u32>,
}

/// Serialized shape of a plan, without the derived index.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlanRecord {
    pub plan_type: PlanType,
    pub start_date: Date,
    pub end_date: Date,
    pub total_days: u32,
    pub total_chapters: u32,
    pub total_seconds: u64,
    pub daily_budget_seconds: u64,
    #[serde(default)]
    pub progress_mode: ProgressMode,
    #[serde(default)]
    pub partition_rule: PartitionRule,
    pub daily_schedule: Vec<DaySchedule>,
    pub created_at: Timestamp,
}

impl TryFrom<PlanRecord> for ReadingPlan {
    type Error = PlanError;

    fn try_from(record: PlanRecord) -> Result<Self, PlanError> {
        let day_index = record.validate()?;

        Ok(Self {
            plan_type: record.plan_type,
            start_date: record.start_date,
            end_date: record.end_date,
            total_days: record.total_days,
            total_chapters: record.total_chapters,
            total_seconds: record.total_seconds,
            daily_budget_seconds: record.daily_budget_seconds,
            progress_mode: record.progress_mode,
            partition_rule: record.partition_rule,
            daily_schedule: record.daily_schedule,
            created_at: record.created_at,
            day_index,
        })
    }
}

impl PlanRecord {
    /// Checks the schedule against the record's totals and dates, returning
    /// the `chapter -> day` index.
    fn validate(&self) -> Result<HashMap<ChapterRef, u32>, PlanError> {
        let schedule_error =
            |reason: String| PlanError::invalid_input("daily_schedule").with_reason(reason);

        let expected_days = usize::try_from(self.total_days).unwrap_or(usize::MAX);
        if self.total_days == 0 || self.daily_schedule.len() != expected_days {
            return Err(schedule_error(format!(
                "{} scheduled days for a {}-day plan",
                self.daily_schedule.len(),
                self.total_days
            )));
        }
        if dates::date_for_day(self.start_date, self.total_days) != Some(self.end_date) {
            return Err(PlanError::invalid_input("end_date").with_reason(format!(
                "{} is not day {} of a plan starting {}",
                self.end_date, self.total_days, self.start_date
            )));
        }

        let mut day_index = HashMap::new();
        let mut total_seconds = 0_u64;
        for (expected, day) in (1..=self.total_days).zip(&self.daily_schedule) {
            if day.day != expected {
                return Err(schedule_error(format!(
                    "day {} found where day {expected} was expected",
                    day.day
                )));
            }
            if dates::date_for_day(self.start_date, day.day) != Some(day.date) {
                return Err(schedule_error(format!("day {} is dated {}", day.day, day.date)));
            }

            let day_seconds: u64 = day
                .chapters
                .iter()
                .map(|entry| u64::from(entry.seconds))
                .sum();
            if day_seconds != day.total_seconds {
                return Err(schedule_error(format!(
                    "day {} totals {}s but its chapters sum to {day_seconds}s",
                    day.day, day.total_seconds
                )));
            }
            total_seconds += day_seconds;

            for chapter in day.chapter_refs() {
                if let Some(first) = day_index.insert(chapter, day.day) {
                    return Err(schedule_error(format!(
                        "book {} chapter {} is scheduled on days {first} and {}",
                        chapter.book, chapter.chapter, day.day
                    )));
                }
            }
        }

        if u32::try_from(day_index.len()).ok() != Some(self.total_chapters) {
            return Err(PlanError::invalid_input("total_chapters").with_reason(format!(
                "{} recorded but {} scheduled",
                self.total_chapters,
                day_index.len()
            )));
        }
        if total_seconds != self.total_seconds {
            return Err(PlanError::invalid_input("total_seconds").with_reason(format!(
                "{}s recorded but the schedule sums to {total_seconds}s",
                self.total_seconds
            )));
        }

        Ok(day_index)
    }
}

impl ReadingPlan {
    pub fn plan_type(&self) -> PlanType {
        self.plan_type
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn total_chapters(&self) -> u32 {
        self.total_chapters
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn daily_budget_seconds(&self) -> u64 {
        self.daily_budget_seconds
    }

    pub fn progress_mode(&self) -> ProgressMode {
        self.progress_mode
    }

    pub fn partition_rule(&self) -> PartitionRule {
        self.partition_rule
    }

    pub fn daily_schedule(&self) -> &[DaySchedule] {
        &self.daily_schedule
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Identity used to scope cached views to this plan instance.
    pub fn identity(&self) -> PlanKey {
        PlanKey {
            plan_type: self.plan_type,
            created_at: self.created_at,
        }
    }

    /// Day number a chapter is scheduled on, if it belongs to the plan.
    pub fn day_of(&self, chapter: ChapterRef) -> Option<u32> {
        self.day_index.get(&chapter).copied()
    }

    pub fn contains(&self, chapter: ChapterRef) -> bool {
        self.day_index.contains_key(&chapter)
    }

    /// Schedule for a 1-based day number.
    pub fn day(&self, day: u32) -> Option<&DaySchedule> {
        let position = usize::try_from(day.checked_sub(1)?).ok()?;
        self.daily_schedule.get(position)
    }

    /// Plan day number that `today` falls on.
    ///
    /// Not clamped: zero or negative before the start date, greater than
    /// [`Self::total_days`] after the end date.
    pub fn day_number_on(&self, today: Date) -> i64 {
        dates::inclusive_day_count(self.start_date, today)
    }

    /// Every scheduled chapter with its duration, in schedule order.
    pub fn chapters(&self) -> impl Iterator<Item = &ChapterDuration> + '_ {
        self.daily_schedule.iter().flat_map(|day| day.chapters.iter())
    }

    /// Informational only; scheduling never relies on this value.
    pub fn average_chapters_per_day(&self) -> u32 {
        if self.total_days == 0 {
            return 0;
        }
        self.total_chapters.div_ceil(self.total_days)
    }
}
