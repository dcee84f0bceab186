//! Progress and adherence metrics.
//!
//! Both measurement modes share one [`Tally`] pass over the plan. The plan's
//! [`ProgressMode`](crate::models::ProgressMode) picks the
//! [`ProgressStrategy`] that decides whether the reader is on track; every
//! other field of the snapshot is computed the same way in either mode.

use jiff::civil::Date;

use crate::{
    dates,
    models::{ChapterRef, PlanStatistics, ProgressSnapshot, ReadingPlan},
};

mod strategy;

#[cfg(test)]
mod tests;

pub use strategy::{
    strategy_for, ChapterCountStrategy, ProgressStrategy, Tally, TimeProratedStrategy,
};

/// Computes the progress snapshot of `plan` as of `today`.
pub fn compute(
    plan: &ReadingPlan,
    is_read: impl Fn(ChapterRef) -> bool,
    today: Date,
) -> ProgressSnapshot {
    let tally = Tally::collect(plan, is_read, today);
    snapshot(plan, &tally, today)
}

/// Derived statistics for `plan` as of `today`.
pub fn statistics(
    plan: &ReadingPlan,
    is_read: impl Fn(ChapterRef) -> bool,
    today: Date,
) -> PlanStatistics {
    let tally = Tally::collect(plan, is_read, today);
    let strategy = strategy_for(plan.progress_mode());

    let total = strategy.total_units(&tally);
    let scheduled = strategy.scheduled_units(&tally);
    let achieved = strategy.achieved_units(&tally);

    let adherence_rate = if scheduled == 0 {
        100.0
    } else {
        percentage(achieved, scheduled).min(100.0)
    };

    let total_days = i64::from(plan.total_days());
    let days_elapsed = tally.days_elapsed();

    PlanStatistics {
        progress: snapshot(plan, &tally, today),
        expected_percentage: percentage(scheduled, total),
        reading_velocity: f64::from(tally.read_chapters) / days_elapsed as f64,
        adherence_rate,
        days_elapsed,
        remaining_days: (total_days - tally.current_day + 1).clamp(0, total_days),
        remaining_chapters: tally.remaining_chapters(),
    }
}

fn snapshot(plan: &ReadingPlan, tally: &Tally, today: Date) -> ProgressSnapshot {
    let strategy = strategy_for(plan.progress_mode());

    ProgressSnapshot {
        read_chapters: tally.read_chapters,
        total_chapters: tally.total_chapters,
        progress_percentage: percentage(
            u64::from(tally.read_chapters),
            u64::from(tally.total_chapters),
        ),
        scheduled_chapters: tally.scheduled_chapters,
        scheduled_seconds: tally.scheduled_seconds,
        read_seconds: tally.read_seconds,
        is_on_track: strategy.is_on_track(tally),
        missed_count: tally.scheduled_chapters.saturating_sub(tally.read_chapters),
        estimated_completion_date: Some(estimate_completion(plan, tally, today)),
        current_day: tally.current_day,
        mode: strategy.mode(),
    }
}

/// Extrapolates the finish date from the observed read rate.
///
/// Without any reads the remaining scheduled days are used instead, which
/// lands on the plan's end date (or today, once that has passed).
fn estimate_completion(plan: &ReadingPlan, tally: &Tally, today: Date) -> Date {
    let remaining = i64::from(tally.remaining_chapters());
    if remaining == 0 {
        return today;
    }

    if tally.read_chapters == 0 {
        let remaining_days = (i64::from(plan.total_days()) - tally.current_day).max(0);
        return dates::saturating_offset(today, remaining_days);
    }

    // ceil(remaining / (read / elapsed)), kept in integers
    let read = i64::from(tally.read_chapters);
    let days = (remaining * tally.days_elapsed() + read - 1) / read;
    dates::saturating_offset(today, days)
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}
