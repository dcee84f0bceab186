//! Duration table parsing and fallback defaults.

use crate::{
    error::{PlanError, Result},
    models::{ChapterDuration, ChapterRef},
};

/// Bundled `book,chapter,seconds` table of measured chapter durations.
pub(crate) const STANDARD_DURATIONS_CSV: &str = include_str!("../../assets/chapter_durations.csv");

/// Used when neither the book nor its section has a better estimate.
pub const DEFAULT_CHAPTER_SECONDS: u32 = 240;

const PSALMS_BOOK: u16 = 19;
const PROVERBS_BOOK: u16 = 20;
const LAST_OLD_TESTAMENT_BOOK: u16 = 39;
const LAST_NEW_TESTAMENT_BOOK: u16 = 66;

const PSALMS_SECONDS: u32 = 150;
const PROVERBS_SECONDS: u32 = 210;
const OLD_TESTAMENT_SECONDS: u32 = 240;
const NEW_TESTAMENT_SECONDS: u32 = 252;

/// Average chapter duration for the canon section a book belongs to.
///
/// Psalms run shorter than narrative books. Books outside the 66-book canon
/// have no section estimate.
pub fn section_average(book: u16) -> Option<u32> {
    match book {
        PSALMS_BOOK => Some(PSALMS_SECONDS),
        PROVERBS_BOOK => Some(PROVERBS_SECONDS),
        1..=LAST_OLD_TESTAMENT_BOOK => Some(OLD_TESTAMENT_SECONDS),
        40..=LAST_NEW_TESTAMENT_BOOK => Some(NEW_TESTAMENT_SECONDS),
        _ => None,
    }
}

/// Parses a duration table with one `book,chapter,seconds` entry per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_duration_table(text: &str) -> Result<Vec<ChapterDuration>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| parse_line(number, line))
        .collect()
}

fn parse_line(number: usize, line: &str) -> Result<ChapterDuration> {
    let invalid = |reason: &str| {
        PlanError::invalid_input("durations").with_reason(format!("line {number}: {reason}"))
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [book, chapter, seconds] = fields.as_slice() else {
        return Err(invalid("expected book,chapter,seconds"));
    };

    let book: u16 = book.parse().map_err(|_| invalid("book is not a number"))?;
    let chapter: u16 = chapter
        .parse()
        .map_err(|_| invalid("chapter is not a number"))?;
    let seconds: u32 = seconds
        .parse()
        .map_err(|_| invalid("seconds is not a number"))?;

    if book == 0 || chapter == 0 {
        return Err(invalid("book and chapter are 1-based"));
    }
    if seconds == 0 {
        return Err(invalid("duration must be positive"));
    }

    Ok(ChapterDuration {
        chapter: ChapterRef::new(book, chapter),
        seconds,
    })
}
