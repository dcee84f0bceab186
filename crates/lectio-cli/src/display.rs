//! Markdown formatting for plan views.
//!
//! Each wrapper pairs a core view-model with the catalog so chapters can be
//! shown by book name, and implements [`fmt::Display`] to produce markdown
//! for the [`TerminalRenderer`](crate::renderer::TerminalRenderer).

use std::fmt;

use jiff::civil::Date;
use lectio_core::{
    ChapterRef, ChapterStatus, ContentCatalog, DaySchedule, PlanStatistics, PlanType,
    ReadingPlan, TodayChapter,
};

/// Days listed by `plan show` unless `--all` is given.
const SCHEDULE_PREVIEW_DAYS: usize = 7;

/// Formats a duration as `45s`, `4m 31s` or `1h 05m`.
pub fn format_duration(seconds: u64) -> String {
    let (hours, minutes, secs) = (seconds / 3600, seconds % 3600 / 60, seconds % 60);
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs:02}s")
    } else {
        format!("{secs}s")
    }
}

/// `Genesis 3`, or `1:3` when the book is unknown.
pub fn chapter_label(catalog: &ContentCatalog, chapter: ChapterRef) -> String {
    match catalog.book(chapter.book) {
        Some(book) => format!("{} {}", book.name, chapter.chapter),
        None => format!("{}:{}", chapter.book, chapter.chapter),
    }
}

/// Compact listing of a day's chapters, e.g. `Gen 1-3, Exo 1`.
fn chapter_ranges(catalog: &ContentCatalog, day: &DaySchedule) -> String {
    let mut ranges: Vec<(u16, u16, u16)> = Vec::new();
    for chapter in day.chapter_refs() {
        match ranges.last_mut() {
            Some((book, _, last))
                if *book == chapter.book && last.checked_add(1) == Some(chapter.chapter) =>
            {
                *last = chapter.chapter;
            }
            _ => ranges.push((chapter.book, chapter.chapter, chapter.chapter)),
        }
    }

    ranges
        .into_iter()
        .map(|(book, first, last)| {
            let name = catalog
                .book(book)
                .map_or_else(|| book.to_string(), |entry| entry.abbreviation.clone());
            if first == last {
                format!("{name} {first}")
            } else {
                format!("{name} {first}-{last}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// A plan with its schedule.
pub struct PlanView<'a> {
    pub plan: &'a ReadingPlan,
    pub catalog: &'a ContentCatalog,
    pub show_all: bool,
}

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        writeln!(f, "# Reading plan: {}", plan.plan_type())?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Dates:** {} to {} ({} days)",
            plan.start_date(),
            plan.end_date(),
            plan.total_days()
        )?;
        writeln!(
            f,
            "- **Chapters:** {} (about {} per day)",
            plan.total_chapters(),
            plan.average_chapters_per_day()
        )?;
        writeln!(
            f,
            "- **Total time:** {}",
            format_duration(plan.total_seconds())
        )?;
        writeln!(
            f,
            "- **Daily budget:** {}",
            format_duration(plan.daily_budget_seconds())
        )?;
        writeln!(f, "- **Progress mode:** {}", plan.progress_mode().as_str())?;
        writeln!(f, "- **Partition:** {}", plan.partition_rule().as_str())?;
        writeln!(f)?;
        writeln!(f, "## Schedule")?;
        writeln!(f)?;

        let days = plan.daily_schedule();
        let shown = if self.show_all {
            days.len()
        } else {
            days.len().min(SCHEDULE_PREVIEW_DAYS)
        };

        for day in &days[..shown] {
            if day.is_empty() {
                writeln!(f, "- Day {} ({}): rest", day.day, day.date)?;
            } else {
                writeln!(
                    f,
                    "- Day {} ({}): {} [{}]",
                    day.day,
                    day.date,
                    chapter_ranges(self.catalog, day),
                    format_duration(day.total_seconds)
                )?;
            }
        }

        if shown < days.len() {
            writeln!(f)?;
            writeln!(
                f,
                "... {} more days (use --all to list them)",
                days.len() - shown
            )?;
        }
        Ok(())
    }
}

/// The chapters assigned to one day.
pub struct TodayView<'a> {
    pub date: Date,
    pub plan: &'a ReadingPlan,
    pub chapters: &'a [TodayChapter],
    pub catalog: &'a ContentCatalog,
}

impl fmt::Display for TodayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.chapters.is_empty() {
            let day = self.plan.day_number_on(self.date);
            let reason = if day < 1 {
                format!("the plan starts on {}", self.plan.start_date())
            } else if day > i64::from(self.plan.total_days()) {
                format!("the plan ended on {}", self.plan.end_date())
            } else {
                "this is a rest day".to_string()
            };
            return writeln!(f, "Nothing scheduled for {}: {reason}.", self.date);
        }

        writeln!(
            f,
            "# Today: {} (day {} of {})",
            self.date,
            self.plan.day_number_on(self.date),
            self.plan.total_days()
        )?;
        writeln!(f)?;

        for entry in self.chapters {
            writeln!(
                f,
                "- [{}] {} ({})",
                if entry.is_read { "x" } else { " " },
                chapter_label(self.catalog, entry.chapter),
                format_duration(u64::from(entry.seconds))
            )?;
        }

        let done = self.chapters.iter().filter(|entry| entry.is_read).count();
        writeln!(f)?;
        writeln!(f, "{done} of {} read", self.chapters.len())
    }
}

/// Progress snapshot and derived statistics.
pub struct ProgressView<'a> {
    pub statistics: &'a PlanStatistics,
}

impl fmt::Display for ProgressView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.statistics;
        let progress = &stats.progress;

        writeln!(f, "# Progress")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Read:** {} of {} chapters ({:.1}%)",
            progress.read_chapters, progress.total_chapters, progress.progress_percentage
        )?;
        writeln!(
            f,
            "- **Expected by today:** {} chapters ({:.1}%)",
            progress.scheduled_chapters, stats.expected_percentage
        )?;
        writeln!(
            f,
            "- **Time read:** {} of {} scheduled",
            format_duration(progress.read_seconds),
            format_duration(progress.scheduled_seconds)
        )?;
        writeln!(f, "- **Missed:** {}", progress.missed_count)?;
        writeln!(
            f,
            "- **On track:** {} (by {})",
            yes_no(progress.is_on_track),
            progress.mode.as_str()
        )?;
        if let Some(date) = progress.estimated_completion_date {
            writeln!(f, "- **Estimated completion:** {date}")?;
        }
        writeln!(f)?;
        writeln!(f, "## Statistics")?;
        writeln!(f)?;
        writeln!(f, "- **Current day:** {}", progress.current_day)?;
        writeln!(f, "- **Days elapsed:** {}", stats.days_elapsed)?;
        writeln!(f, "- **Days remaining:** {}", stats.remaining_days)?;
        writeln!(f, "- **Chapters remaining:** {}", stats.remaining_chapters)?;
        writeln!(
            f,
            "- **Reading velocity:** {:.2} chapters per day",
            stats.reading_velocity
        )?;
        writeln!(f, "- **Adherence:** {:.1}%", stats.adherence_rate)
    }
}

/// Status of the chapters of one book.
pub struct BookStatusView<'a> {
    pub book_name: &'a str,
    pub statuses: &'a [(ChapterRef, ChapterStatus)],
}

impl fmt::Display for BookStatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.book_name)?;
        writeln!(f)?;
        for (chapter, status) in self.statuses {
            writeln!(f, "- {}: {}", chapter.chapter, status.as_str())?;
        }

        let completed = self
            .statuses
            .iter()
            .filter(|(_, status)| *status == ChapterStatus::Completed)
            .count();
        writeln!(f)?;
        writeln!(f, "{completed} of {} chapters read", self.statuses.len())
    }
}

/// The plan types with the books each covers.
pub struct PlanTypesView<'a> {
    pub catalog: &'a ContentCatalog,
}

impl fmt::Display for PlanTypesView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan types")?;
        writeln!(f)?;
        for plan_type in PlanType::ALL {
            let (first, last) = plan_type.book_range();
            let name = |index: u16| {
                self.catalog
                    .book(index)
                    .map_or_else(|| index.to_string(), |book| book.name.clone())
            };
            let chapters = self.catalog.chapters(first, last).count();
            let books = if first == last {
                name(first)
            } else {
                format!("{} to {}", name(first), name(last))
            };
            writeln!(f, "- `{plan_type}`: {books} ({chapters} chapters)")?;
        }
        Ok(())
    }
}
