//! Static content catalog: books, chapter counts and reading durations.
//!
//! The catalog answers two questions for the scheduler: which chapters a book
//! range contains, and how long each chapter takes to read. Measured durations
//! come from a `book,chapter,seconds` table. Missing entries fall back, in
//! order, to:
//!
//! 1. the rounded mean of the book's measured chapters
//! 2. the average for the book's canon section ([`section_average`])
//! 3. [`DEFAULT_CHAPTER_SECONDS`]
//!
//! Every lookup is pure and deterministic.
//!
//! ```rust
//! use lectio_core::{catalog::ContentCatalog, models::ChapterRef};
//!
//! let catalog = ContentCatalog::standard()?;
//! assert_eq!(catalog.chapter_count(1), 50);
//! assert_eq!(catalog.duration_seconds(ChapterRef::new(1, 1)), 271);
//! # Ok::<(), lectio_core::PlanError>(())
//! ```

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::{
    error::{PlanError, Result},
    models::{Book, ChapterDuration, ChapterRef, PlanType},
};

mod books;
pub mod durations;

pub use durations::{parse_duration_table, section_average, DEFAULT_CHAPTER_SECONDS};

/// Lookup of books, chapter counts and per-chapter durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    books: Vec<Book>,
    known: HashMap<ChapterRef, u32>,
    book_averages: HashMap<u16, u32>,
}

impl ContentCatalog {
    /// The 66-book canon with the bundled duration table.
    pub fn standard() -> Result<Self> {
        let durations = parse_duration_table(durations::STANDARD_DURATIONS_CSV)?;
        Self::new(books::standard_books(), durations)
    }

    /// Builds a catalog from a book list and measured durations.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` when book indices repeat or are zero,
    /// or when a duration refers to a chapter the books do not contain.
    pub fn new(
        mut books: Vec<Book>,
        durations: impl IntoIterator<Item = ChapterDuration>,
    ) -> Result<Self> {
        books.sort_by_key(|book| book.index);
        if books.first().is_some_and(|book| book.index == 0) {
            return Err(PlanError::invalid_input("books").with_reason("book indices are 1-based"));
        }
        if books.windows(2).any(|pair| pair[0].index == pair[1].index) {
            return Err(PlanError::invalid_input("books").with_reason("duplicate book index"));
        }

        let mut catalog = Self {
            books,
            known: HashMap::new(),
            book_averages: HashMap::new(),
        };

        for entry in durations {
            if !catalog.contains(entry.chapter) {
                return Err(PlanError::invalid_input("durations").with_reason(format!(
                    "book {} has no chapter {}",
                    entry.chapter.book, entry.chapter.chapter
                )));
            }
            catalog.known.insert(entry.chapter, entry.seconds.max(1));
        }

        catalog.book_averages = book_averages(&catalog.known);
        debug!(
            "Content catalog ready: {} books, {} measured chapters",
            catalog.books.len(),
            catalog.known.len()
        );
        Ok(catalog)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, index: u16) -> Option<&Book> {
        self.books
            .binary_search_by_key(&index, |book| book.index)
            .ok()
            .map(|position| &self.books[position])
    }

    /// Finds a book by index, abbreviation or name, ignoring case.
    pub fn find_book(&self, query: &str) -> Option<&Book> {
        let query = query.trim();
        if let Ok(index) = query.parse::<u16>() {
            return self.book(index);
        }
        self.books.iter().find(|book| {
            book.abbreviation.eq_ignore_ascii_case(query) || book.name.eq_ignore_ascii_case(query)
        })
    }

    /// Number of chapters in a book; 0 for books not in the catalog.
    pub fn chapter_count(&self, book: u16) -> u16 {
        self.book(book).map_or(0, |book| book.chapters)
    }

    pub fn contains(&self, chapter: ChapterRef) -> bool {
        chapter.chapter >= 1 && chapter.chapter <= self.chapter_count(chapter.book)
    }

    pub fn book_range(&self, plan_type: PlanType) -> (u16, u16) {
        plan_type.book_range()
    }

    /// Reading duration of a chapter in seconds, always at least 1.
    pub fn duration_seconds(&self, chapter: ChapterRef) -> u32 {
        self.known
            .get(&chapter)
            .or_else(|| self.book_averages.get(&chapter.book))
            .copied()
            .or_else(|| section_average(chapter.book))
            .unwrap_or(DEFAULT_CHAPTER_SECONDS)
    }

    pub fn chapter_duration(&self, chapter: ChapterRef) -> ChapterDuration {
        ChapterDuration {
            chapter,
            seconds: self.duration_seconds(chapter),
        }
    }

    /// Every chapter of books `start_book..=end_book`, in canonical order.
    pub fn chapters(
        &self,
        start_book: u16,
        end_book: u16,
    ) -> impl Iterator<Item = ChapterDuration> + '_ {
        self.books
            .iter()
            .filter(move |book| (start_book..=end_book).contains(&book.index))
            .flat_map(move |book| {
                (1..=book.chapters)
                    .map(move |chapter| self.chapter_duration(ChapterRef::new(book.index, chapter)))
            })
    }

    /// Number of chapters with a measured duration.
    pub fn measured_chapters(&self) -> usize {
        self.known.len()
    }
}

/// Rounded mean of each book's measured chapters.
fn book_averages(known: &HashMap<ChapterRef, u32>) -> HashMap<u16, u32> {
    let mut totals: BTreeMap<u16, (u64, u64)> = BTreeMap::new();
    for (chapter, seconds) in known {
        let entry = totals.entry(chapter.book).or_default();
        entry.0 += u64::from(*seconds);
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(book, (sum, count))| {
            let mean = (sum + count / 2) / count;
            (book, u32::try_from(mean).unwrap_or(u32::MAX))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> ContentCatalog {
        ContentCatalog::new(
            vec![Book::new(1, "Alpha", "Alp", 4), Book::new(70, "Omega", "Ome", 2)],
            vec![
                ChapterDuration {
                    chapter: ChapterRef::new(1, 1),
                    seconds: 100,
                },
                ChapterDuration {
                    chapter: ChapterRef::new(1, 2),
                    seconds: 201,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = ContentCatalog::standard().unwrap();
        assert_eq!(catalog.books().len(), 66);
        let total: u32 = catalog.books().iter().map(|b| u32::from(b.chapters)).sum();
        assert_eq!(total, 1189);
        assert_eq!(catalog.chapter_count(19), 150);
        assert_eq!(catalog.chapter_count(67), 0);
        assert_eq!(catalog.book(40).unwrap().name, "Matthew");
    }

    #[test]
    fn test_measured_duration_wins() {
        let catalog = ContentCatalog::standard().unwrap();
        let genesis: Vec<u32> = (1..=9)
            .map(|chapter| catalog.duration_seconds(ChapterRef::new(1, chapter)))
            .collect();
        assert_eq!(genesis, vec![271, 202, 238, 238, 150, 193, 173, 175, 225]);
        assert_eq!(catalog.duration_seconds(ChapterRef::new(19, 119)), 510);
    }

    #[test]
    fn test_book_average_fallback() {
        let catalog = small_catalog();
        assert_eq!(catalog.measured_chapters(), 2);
        assert_eq!(catalog.duration_seconds(ChapterRef::new(1, 1)), 100);
        // (100 + 201) / 2 = 150.5 rounds up
        assert_eq!(catalog.duration_seconds(ChapterRef::new(1, 3)), 151);
    }

    #[test]
    fn test_section_and_global_fallback() {
        let catalog = ContentCatalog::new(
            vec![
                Book::new(19, "Psalms", "Psa", 150),
                Book::new(45, "Romans", "Rom", 16),
                Book::new(70, "Omega", "Ome", 2),
            ],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(catalog.measured_chapters(), 0);
        assert_eq!(catalog.duration_seconds(ChapterRef::new(19, 5)), 150);
        assert_eq!(catalog.duration_seconds(ChapterRef::new(45, 1)), 252);
        assert_eq!(
            catalog.duration_seconds(ChapterRef::new(70, 1)),
            DEFAULT_CHAPTER_SECONDS
        );
    }

    #[test]
    fn test_psalms_shorter_than_narrative() {
        let catalog = ContentCatalog::standard().unwrap();
        let psalm = catalog.duration_seconds(ChapterRef::new(19, 40));
        let kings = catalog.duration_seconds(ChapterRef::new(11, 10));
        assert!(psalm < kings);
    }

    #[test]
    fn test_chapters_in_canonical_order() {
        let catalog = small_catalog();
        let refs: Vec<ChapterRef> = catalog.chapters(1, 70).map(|d| d.chapter).collect();
        assert_eq!(
            refs,
            vec![
                ChapterRef::new(1, 1),
                ChapterRef::new(1, 2),
                ChapterRef::new(1, 3),
                ChapterRef::new(1, 4),
                ChapterRef::new(70, 1),
                ChapterRef::new(70, 2),
            ]
        );
        assert_eq!(catalog.chapters(2, 69).count(), 0);
    }

    #[test]
    fn test_find_book() {
        let catalog = ContentCatalog::standard().unwrap();
        assert_eq!(catalog.find_book("gen").unwrap().index, 1);
        assert_eq!(catalog.find_book("Revelation").unwrap().index, 66);
        assert_eq!(catalog.find_book("43").unwrap().abbreviation, "Joh");
        assert!(catalog.find_book("Maccabees").is_none());
    }

    #[test]
    fn test_contains() {
        let catalog = ContentCatalog::standard().unwrap();
        assert!(catalog.contains(ChapterRef::new(1, 50)));
        assert!(!catalog.contains(ChapterRef::new(1, 51)));
        assert!(!catalog.contains(ChapterRef::new(1, 0)));
        assert!(!catalog.contains(ChapterRef::new(0, 1)));
    }

    #[test]
    fn test_rejects_invalid_input() {
        let duplicate = ContentCatalog::new(
            vec![Book::new(1, "A", "A", 1), Book::new(1, "B", "B", 1)],
            Vec::new(),
        );
        assert!(matches!(duplicate, Err(PlanError::InvalidInput { .. })));

        let stray = ContentCatalog::new(
            vec![Book::new(1, "A", "A", 1)],
            vec![ChapterDuration {
                chapter: ChapterRef::new(1, 2),
                seconds: 60,
            }],
        );
        assert!(matches!(stray, Err(PlanError::InvalidInput { .. })));
    }
}
