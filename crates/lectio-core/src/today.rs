//! Resolution of the current day's reading assignment.

use jiff::civil::Date;

use crate::models::{ChapterRef, DaySchedule, ReadingPlan, TodayChapter};

/// Schedule entry for the plan day `today` falls on.
///
/// `None` before the start date and after the end date.
pub fn current_day(plan: &ReadingPlan, today: Date) -> Option<&DaySchedule> {
    let day = u32::try_from(plan.day_number_on(today)).ok()?;
    plan.day(day)
}

/// Today's chapters annotated with their read state.
///
/// Empty when the plan has not started yet or has already finished.
pub fn today_chapters(
    plan: &ReadingPlan,
    is_read: impl Fn(ChapterRef) -> bool,
    today: Date,
) -> Vec<TodayChapter> {
    current_day(plan, today)
        .map(|day| {
            day.chapters
                .iter()
                .map(|entry| TodayChapter {
                    chapter: entry.chapter,
                    is_read: is_read(entry.chapter),
                    seconds: entry.seconds,
                })
                .collect()
        })
        .unwrap_or_default()
}
