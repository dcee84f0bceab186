//! Status enumerations for chapters and plan configuration flags.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status of a chapter relative to the plan schedule and "today".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChapterStatus {
    /// Chapter has been read, whatever its scheduled day
    Completed,

    /// Scheduled for the current plan day
    Today,

    /// Scheduled for the previous plan day and not yet read
    Yesterday,

    /// Scheduled two or more days ago and not yet read
    Missed,

    /// Scheduled for a later day
    Future,

    /// Not part of the plan's schedule
    Normal,
}

impl FromStr for ChapterStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(ChapterStatus::Completed),
            "today" => Ok(ChapterStatus::Today),
            "yesterday" => Ok(ChapterStatus::Yesterday),
            "missed" => Ok(ChapterStatus::Missed),
            "future" => Ok(ChapterStatus::Future),
            "normal" => Ok(ChapterStatus::Normal),
            _ => Err(format!("Invalid chapter status: {s}")),
        }
    }
}

impl ChapterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterStatus::Completed => "completed",
            ChapterStatus::Today => "today",
            ChapterStatus::Yesterday => "yesterday",
            ChapterStatus::Missed => "missed",
            ChapterStatus::Future => "future",
            ChapterStatus::Normal => "normal",
        }
    }
}

/// How progress against the schedule is measured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Compare chapters read with chapters scheduled so far
    #[default]
    Chapters,

    /// Compare seconds read with seconds scheduled so far
    Time,
}

impl FromStr for ProgressMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chapters" | "chapter" | "count" => Ok(ProgressMode::Chapters),
            "time" | "seconds" => Ok(ProgressMode::Time),
            _ => Err(format!("Invalid progress mode: {s}")),
        }
    }
}

impl ProgressMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressMode::Chapters => "chapters",
            ProgressMode::Time => "time",
        }
    }
}

/// Rule used when distributing chapters across days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartitionRule {
    /// Keep adding chapters until the day reaches its budget, then close it
    #[default]
    FillToBudget,

    /// Close the day before a chapter that would push it past the budget
    StayWithinBudget,
}

impl FromStr for PartitionRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fill" | "fill_to_budget" => Ok(PartitionRule::FillToBudget),
            "within" | "stay_within_budget" => Ok(PartitionRule::StayWithinBudget),
            _ => Err(format!("Invalid partition rule: {s}")),
        }
    }
}

impl PartitionRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionRule::FillToBudget => "fill_to_budget",
            PartitionRule::StayWithinBudget => "stay_within_budget",
        }
    }
}
