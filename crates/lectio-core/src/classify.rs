//! Chapter status classification relative to "today".

use jiff::civil::Date;

use crate::models::{ChapterRef, ChapterStatus, ReadingPlan};

/// Labels a chapter for display against the plan schedule.
///
/// A read chapter is always [`ChapterStatus::Completed`]. Otherwise the
/// chapter's scheduled day is compared with the unclamped plan day of
/// `today`; chapters outside the plan are [`ChapterStatus::Normal`].
pub fn classify(
    plan: &ReadingPlan,
    is_read: impl Fn(ChapterRef) -> bool,
    chapter: ChapterRef,
    today: Date,
) -> ChapterStatus {
    if is_read(chapter) {
        return ChapterStatus::Completed;
    }
    let Some(scheduled_day) = plan.day_of(chapter) else {
        return ChapterStatus::Normal;
    };
    status_for_day(i64::from(scheduled_day), plan.day_number_on(today))
}

/// Status of every chapter `1..=chapter_count` of a book.
pub fn classify_book(
    plan: &ReadingPlan,
    is_read: impl Fn(ChapterRef) -> bool,
    book: u16,
    chapter_count: u16,
    today: Date,
) -> Vec<(ChapterRef, ChapterStatus)> {
    (1..=chapter_count)
        .map(|chapter| {
            let chapter = ChapterRef::new(book, chapter);
            (chapter, classify(plan, &is_read, chapter, today))
        })
        .collect()
}

fn status_for_day(scheduled_day: i64, current_day: i64) -> ChapterStatus {
    if scheduled_day == current_day {
        ChapterStatus::Today
    } else if scheduled_day == current_day - 1 {
        ChapterStatus::Yesterday
    } else if scheduled_day < current_day - 1 {
        ChapterStatus::Missed
    } else {
        ChapterStatus::Future
    }
}
