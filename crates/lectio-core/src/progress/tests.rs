//! Tests for progress metrics.

use std::collections::HashSet;

use jiff::civil::date;

use super::*;
use crate::{
    catalog::ContentCatalog,
    models::{Book, ChapterDuration, ProgressMode, PlanType},
    schedule::PlanBuilder,
};

/// Nine chapters over 2025-01-01..=2025-01-03: days [1-3], [4-7], [8-9].
fn nine_chapter_plan(mode: ProgressMode) -> ReadingPlan {
    let seconds = [271, 202, 238, 238, 150, 193, 173, 175, 225];
    let durations = (1u16..).zip(seconds).map(|(chapter, seconds)| ChapterDuration {
        chapter: ChapterRef::new(1, chapter),
        seconds,
    });
    let catalog =
        ContentCatalog::new(vec![Book::new(1, "Genesis", "Gen", 9)], durations).unwrap();
    PlanBuilder::new(&catalog)
        .progress_mode(mode)
        .build(PlanType::Pentateuch, date(2025, 1, 1), date(2025, 1, 3))
        .unwrap()
}

/// Ten equal chapters, one per day over 2025-01-01..=2025-01-10.
fn ten_day_plan() -> ReadingPlan {
    let catalog = ContentCatalog::new(vec![Book::new(1, "Genesis", "Gen", 10)], Vec::new()).unwrap();
    PlanBuilder::new(&catalog)
        .build(PlanType::Pentateuch, date(2025, 1, 1), date(2025, 1, 10))
        .unwrap()
}

fn reads(chapters: &[u16]) -> HashSet<ChapterRef> {
    chapters.iter().map(|chapter| ChapterRef::new(1, *chapter)).collect()
}

#[test]
fn test_chapter_mode_behind_schedule() {
    let plan = nine_chapter_plan(ProgressMode::Chapters);
    let read = reads(&[1, 2, 3]);
    let snapshot = compute(&plan, |c| read.contains(&c), date(2025, 1, 2));

    assert_eq!(snapshot.read_chapters, 3);
    assert_eq!(snapshot.total_chapters, 9);
    assert_eq!(snapshot.scheduled_chapters, 7);
    assert_eq!(snapshot.scheduled_seconds, 711 + 754);
    assert_eq!(snapshot.read_seconds, 711);
    assert_eq!(snapshot.missed_count, 4);
    assert_eq!(snapshot.current_day, 2);
    assert!(!snapshot.is_on_track);
    assert!((snapshot.progress_percentage - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(snapshot.mode, ProgressMode::Chapters);
}

#[test]
fn test_modes_differ_only_in_on_track_decision() {
    // Three short chapters read against three long ones scheduled.
    let read = reads(&[5, 6, 7]);
    let today = date(2025, 1, 1);

    let by_count = compute(&nine_chapter_plan(ProgressMode::Chapters), |c| read.contains(&c), today);
    let by_time = compute(&nine_chapter_plan(ProgressMode::Time), |c| read.contains(&c), today);

    assert!(by_count.is_on_track);
    assert!(!by_time.is_on_track);
    assert_eq!(by_time.mode, ProgressMode::Time);
    assert_eq!(by_count.read_seconds, 516);
    assert_eq!(by_count.scheduled_seconds, 711);
    assert_eq!(by_count.progress_percentage, by_time.progress_percentage);
    assert_eq!(by_count.missed_count, by_time.missed_count);
}

#[test]
fn test_percentage_is_monotonic_and_exact_at_completion() {
    let plan = nine_chapter_plan(ProgressMode::Chapters);
    let mut read = HashSet::new();
    let mut previous = 0.0;

    for chapter in [9, 1, 5, 2, 8, 3, 7, 4, 6] {
        read.insert(ChapterRef::new(1, chapter));
        let snapshot = compute(&plan, |c| read.contains(&c), date(2025, 1, 2));
        assert!(snapshot.progress_percentage >= previous);
        if read.len() < 9 {
            assert!(snapshot.progress_percentage < 100.0);
        }
        previous = snapshot.progress_percentage;
    }

    assert_eq!(previous, 100.0);
}

#[test]
fn test_reads_outside_plan_do_not_count() {
    let plan = nine_chapter_plan(ProgressMode::Chapters);
    let snapshot = compute(
        &plan,
        |c| c.book == 40 || c == ChapterRef::new(1, 1),
        date(2025, 1, 1),
    );
    assert_eq!(snapshot.read_chapters, 1);
}

#[test]
fn test_after_end_on_track_only_when_complete() {
    let after = date(2025, 2, 1);
    for mode in [ProgressMode::Chapters, ProgressMode::Time] {
        let plan = nine_chapter_plan(mode);

        let partial = reads(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let snapshot = compute(&plan, |c| partial.contains(&c), after);
        assert!(!snapshot.is_on_track);
        assert_eq!(snapshot.scheduled_chapters, 9);
        assert_eq!(snapshot.missed_count, 1);

        let snapshot = compute(&plan, |_| true, after);
        assert!(snapshot.is_on_track);
        assert!(snapshot.is_complete());
        assert_eq!(snapshot.progress_percentage, 100.0);
    }
}

#[test]
fn test_before_start_nothing_is_due() {
    let plan = ten_day_plan();
    let snapshot = compute(&plan, |_| false, date(2024, 12, 25));

    assert_eq!(snapshot.scheduled_chapters, 0);
    assert_eq!(snapshot.missed_count, 0);
    assert!(snapshot.is_on_track);
    assert_eq!(snapshot.current_day, -6);
}

#[test]
fn test_estimated_completion_from_read_rate() {
    let plan = ten_day_plan();
    let read = reads(&[1, 2]);
    let snapshot = compute(&plan, |c| read.contains(&c), date(2025, 1, 4));

    // 2 chapters in 4 days leaves 8 chapters at half a chapter per day.
    assert_eq!(snapshot.estimated_completion_date, Some(date(2025, 1, 20)));
}

#[test]
fn test_estimated_completion_without_reads() {
    let plan = ten_day_plan();

    let during = compute(&plan, |_| false, date(2025, 1, 4));
    assert_eq!(during.estimated_completion_date, Some(date(2025, 1, 10)));

    let before = compute(&plan, |_| false, date(2024, 12, 20));
    assert_eq!(before.estimated_completion_date, Some(date(2025, 1, 10)));

    let after = compute(&plan, |_| false, date(2025, 3, 1));
    assert_eq!(after.estimated_completion_date, Some(date(2025, 3, 1)));
}

#[test]
fn test_estimated_completion_when_done() {
    let plan = ten_day_plan();
    let snapshot = compute(&plan, |_| true, date(2025, 1, 6));
    assert_eq!(snapshot.estimated_completion_date, Some(date(2025, 1, 6)));
}

#[test]
fn test_statistics_mid_plan() {
    let plan = ten_day_plan();
    let read = reads(&[1, 2]);
    let stats = statistics(&plan, |c| read.contains(&c), date(2025, 1, 4));

    assert_eq!(stats.expected_percentage, 40.0);
    assert_eq!(stats.adherence_rate, 50.0);
    assert_eq!(stats.reading_velocity, 0.5);
    assert_eq!(stats.days_elapsed, 4);
    assert_eq!(stats.remaining_days, 7);
    assert_eq!(stats.remaining_chapters, 8);
    assert_eq!(stats.progress.read_chapters, 2);
}

#[test]
fn test_statistics_caps_and_bounds() {
    let plan = ten_day_plan();

    let ahead = statistics(&plan, |_| true, date(2025, 1, 2));
    assert_eq!(ahead.adherence_rate, 100.0);

    let before = statistics(&plan, |_| false, date(2024, 12, 31));
    assert_eq!(before.expected_percentage, 0.0);
    assert_eq!(before.adherence_rate, 100.0);
    assert_eq!(before.days_elapsed, 1);
    assert_eq!(before.remaining_days, 10);

    let after = statistics(&plan, |_| false, date(2025, 2, 1));
    assert_eq!(after.remaining_days, 0);
    assert_eq!(after.adherence_rate, 0.0);
}

#[test]
fn test_strategy_for_mode() {
    assert_eq!(strategy_for(ProgressMode::Chapters).mode(), ProgressMode::Chapters);
    assert_eq!(strategy_for(ProgressMode::Time).mode(), ProgressMode::Time);

    let tally = Tally {
        total_chapters: 4,
        total_seconds: 400,
        read_chapters: 1,
        read_seconds: 300,
        scheduled_chapters: 2,
        scheduled_seconds: 200,
        current_day: 2,
    };
    assert!(!ChapterCountStrategy.is_on_track(&tally));
    assert!(TimeProratedStrategy.is_on_track(&tally));
}
