//! Parameter structures for reading plan operations.
//!
//! These structures are shared by every interface (CLI, embedding UI code)
//! without framework-specific derives. Interface layers define their own
//! argument types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │ ReadingEngine / │
//! │  (clap derives) │───▶│ (serde derives) │───▶│    Planner      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{ChapterRef, PartitionRule, PlanType, ProgressMode};

/// Parameters for creating a new reading plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePlan {
    /// Which books the plan covers
    pub plan_type: PlanType,
    /// First day of the plan
    pub start_date: Date,
    /// Last day of the plan, inclusive
    pub end_date: Date,
    /// How progress is measured
    #[serde(default)]
    pub progress_mode: ProgressMode,
    /// How chapters are distributed across days
    #[serde(default)]
    pub partition_rule: PartitionRule,
}

impl CreatePlan {
    /// Plan with the default progress mode and partition rule.
    pub fn new(plan_type: PlanType, start_date: Date, end_date: Date) -> Self {
        Self {
            plan_type,
            start_date,
            end_date,
            progress_mode: ProgressMode::default(),
            partition_rule: PartitionRule::default(),
        }
    }
}

/// Parameters for marking a chapter read or unread.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetReadStatus {
    /// Chapter to update
    pub chapter: ChapterRef,
    /// New read flag
    pub is_read: bool,
}
