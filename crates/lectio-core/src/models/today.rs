//! Today's reading list view-model.

use serde::{Deserialize, Serialize};

use super::ChapterRef;

/// One chapter of the current day's assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodayChapter {
    pub chapter: ChapterRef,
    pub is_read: bool,
    pub seconds: u32,
}
