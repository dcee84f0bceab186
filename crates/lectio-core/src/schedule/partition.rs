//! Greedy distribution of chapters across plan days.

use jiff::civil::Date;

use crate::{
    dates,
    error::{PlanError, Result},
    models::{ChapterDuration, DaySchedule, PartitionRule},
};

/// Even share of the corpus per day, rounding halves up.
pub fn daily_budget(total_seconds: u64, total_days: u32) -> u64 {
    let days = u64::from(total_days.max(1));
    (total_seconds + days / 2) / days
}

/// Splits `chapters` into exactly `total_days` consecutive days.
///
/// Chapters keep their order. A day never stays empty while chapters remain,
/// and a lone chapter longer than the budget gets a day to itself. The final
/// day takes every chapter still unassigned, so nothing is dropped. If the
/// chapters run out first, the remaining days are empty.
pub fn partition(
    chapters: &[ChapterDuration],
    start_date: Date,
    total_days: u32,
    daily_budget_seconds: u64,
    rule: PartitionRule,
) -> Result<Vec<DaySchedule>> {
    let mut remaining = chapters.iter().copied().peekable();
    let mut schedule = Vec::with_capacity(usize::try_from(total_days).unwrap_or_default());

    for day in 1..=total_days {
        let date = dates::date_for_day(start_date, day).ok_or_else(|| {
            PlanError::invalid_input("end_date").with_reason("plan extends past the supported calendar")
        })?;

        let mut entries: Vec<ChapterDuration> = Vec::new();
        let mut total_seconds = 0u64;

        if day == total_days {
            entries.extend(remaining.by_ref());
            total_seconds = entries.iter().map(|entry| u64::from(entry.seconds)).sum();
        } else {
            while let Some(next) = remaining.peek() {
                let seconds = u64::from(next.seconds);
                let fits = match rule {
                    PartitionRule::FillToBudget => total_seconds < daily_budget_seconds,
                    PartitionRule::StayWithinBudget => {
                        total_seconds + seconds <= daily_budget_seconds
                    }
                };
                if !entries.is_empty() && !fits {
                    break;
                }
                entries.push(*next);
                total_seconds += seconds;
                remaining.next();
            }
        }

        schedule.push(DaySchedule {
            day,
            date,
            chapters: entries,
            total_seconds,
        });
    }

    Ok(schedule)
}
