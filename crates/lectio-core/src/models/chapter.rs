//! Chapter identity and static catalog facts.

use serde::{Deserialize, Serialize};

/// Identity of a single chapter within the corpus.
///
/// Ordering is canonical: by book, then by chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChapterRef {
    /// 1-based book index
    pub book: u16,

    /// 1-based chapter number within the book
    pub chapter: u16,
}

impl ChapterRef {
    /// Creates a chapter reference.
    pub const fn new(book: u16, chapter: u16) -> Self {
        Self { book, chapter }
    }
}

/// Reading duration of one chapter, as reported by the content catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterDuration {
    pub chapter: ChapterRef,
    pub seconds: u32,
}

/// A book in the content catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// 1-based position of the book in the corpus
    pub index: u16,

    /// Full display name
    pub name: String,

    /// Short name used for lookups
    pub abbreviation: String,

    /// Number of chapters in the book
    pub chapters: u16,
}

impl Book {
    pub fn new(
        index: u16,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        chapters: u16,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            abbreviation: abbreviation.into(),
            chapters,
        }
    }
}
