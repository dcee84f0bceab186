//! Per-chapter completion records.

use std::collections::{HashMap, HashSet};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ChapterRef;

/// Completion state of one chapter as held by the read-status store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadStatus {
    pub chapter: ChapterRef,

    pub is_read: bool,

    /// When the chapter was marked read; `None` while unread
    pub read_at: Option<Timestamp>,
}

/// Snapshot of the chapters currently marked read.
///
/// Built from the store on demand; never mutated independently of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadLookup {
    read: HashSet<ChapterRef>,
}

impl ReadLookup {
    pub fn is_read(&self, chapter: ChapterRef) -> bool {
        self.read.contains(&chapter)
    }

    pub fn len(&self) -> usize {
        self.read.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read.is_empty()
    }
}

impl From<&HashMap<ChapterRef, bool>> for ReadLookup {
    fn from(statuses: &HashMap<ChapterRef, bool>) -> Self {
        statuses
            .iter()
            .filter(|(_, is_read)| **is_read)
            .map(|(chapter, _)| *chapter)
            .collect()
    }
}

impl FromIterator<ChapterRef> for ReadLookup {
    fn from_iter<I: IntoIterator<Item = ChapterRef>>(iter: I) -> Self {
        Self {
            read: iter.into_iter().collect(),
        }
    }
}
