//! Tests for plan construction.

use std::collections::HashSet;

use jiff::civil::date;
use proptest::prelude::*;

use super::*;
use crate::models::{Book, ChapterRef, ReadingPlan};

const GENESIS_OPENING: [u32; 9] = [271, 202, 238, 238, 150, 193, 173, 175, 225];

/// A one-book catalog whose nine chapters carry the given durations.
fn nine_chapter_catalog() -> ContentCatalog {
    let durations = (1u16..).zip(GENESIS_OPENING).map(|(chapter, seconds)| ChapterDuration {
        chapter: ChapterRef::new(1, chapter),
        seconds,
    });
    ContentCatalog::new(vec![Book::new(1, "Genesis", "Gen", 9)], durations).unwrap()
}

fn day_chapters(plan: &ReadingPlan, day: u32) -> Vec<u16> {
    plan.day(day)
        .unwrap()
        .chapter_refs()
        .map(|chapter| chapter.chapter)
        .collect()
}

fn assert_covers_range_once(plan: &ReadingPlan, catalog: &ContentCatalog) {
    let (start_book, end_book) = plan.plan_type().book_range();
    let expected: Vec<ChapterRef> = catalog
        .chapters(start_book, end_book)
        .map(|entry| entry.chapter)
        .collect();
    let scheduled: Vec<ChapterRef> = plan.chapters().map(|entry| entry.chapter).collect();

    assert_eq!(scheduled, expected);
    let unique: HashSet<ChapterRef> = scheduled.iter().copied().collect();
    assert_eq!(unique.len(), scheduled.len());
}

#[test]
fn test_worked_scenario_partition() {
    let catalog = nine_chapter_catalog();
    let plan = PlanBuilder::new(&catalog)
        .build(PlanType::Pentateuch, date(2025, 1, 1), date(2025, 1, 3))
        .unwrap();

    assert_eq!(plan.total_days(), 3);
    assert_eq!(plan.total_chapters(), 9);
    assert_eq!(plan.total_seconds(), 1865);
    assert_eq!(plan.daily_budget_seconds(), 622);

    assert_eq!(day_chapters(&plan, 1), vec![1, 2, 3]);
    assert_eq!(day_chapters(&plan, 2), vec![4, 5, 6, 7]);
    assert_eq!(day_chapters(&plan, 3), vec![8, 9]);

    let totals: Vec<u64> = plan
        .daily_schedule()
        .iter()
        .map(|day| day.total_seconds)
        .collect();
    assert_eq!(totals, vec![711, 754, 400]);
}

#[test]
fn test_worked_scenario_with_standard_catalog() {
    let catalog = ContentCatalog::standard().unwrap();
    let chapters: Vec<ChapterDuration> = catalog.chapters(1, 1).take(9).collect();
    let budget = daily_budget(1865, 3);
    let days = partition(
        &chapters,
        date(2025, 1, 1),
        3,
        budget,
        PartitionRule::FillToBudget,
    )
    .unwrap();

    let sizes: Vec<usize> = days.iter().map(|day| day.chapters.len()).collect();
    assert_eq!(sizes, vec![3, 4, 2]);
}

#[test]
fn test_stay_within_budget_variant() {
    let catalog = nine_chapter_catalog();
    let plan = PlanBuilder::new(&catalog)
        .partition_rule(PartitionRule::StayWithinBudget)
        .build(PlanType::Pentateuch, date(2025, 1, 1), date(2025, 1, 3))
        .unwrap();

    assert_eq!(day_chapters(&plan, 1), vec![1, 2]);
    assert_eq!(day_chapters(&plan, 2), vec![3, 4]);
    assert_eq!(day_chapters(&plan, 3), vec![5, 6, 7, 8, 9]);
    assert_eq!(plan.partition_rule(), PartitionRule::StayWithinBudget);
}

#[test]
fn test_days_and_dates_are_contiguous() {
    let catalog = ContentCatalog::standard().unwrap();
    let plan = PlanBuilder::new(&catalog)
        .build(PlanType::Gospels, date(2025, 2, 20), date(2025, 3, 10))
        .unwrap();

    assert_eq!(plan.total_days(), 19);
    assert_eq!(plan.daily_schedule().len(), 19);
    for (position, day) in plan.daily_schedule().iter().enumerate() {
        assert_eq!(day.day as usize, position + 1);
        assert_eq!(
            dates::inclusive_day_count(plan.start_date(), day.date),
            i64::from(day.day)
        );
    }
    assert_eq!(plan.daily_schedule()[18].date, date(2025, 3, 10));
}

#[test]
fn test_full_bible_covers_every_chapter_once() {
    let catalog = ContentCatalog::standard().unwrap();
    let plan = PlanBuilder::new(&catalog)
        .build(PlanType::FullBible, date(2025, 1, 1), date(2025, 12, 31))
        .unwrap();

    assert_eq!(plan.total_chapters(), 1189);
    assert_eq!(plan.total_days(), 365);
    assert_covers_range_once(&plan, &catalog);

    let summed: u64 = plan
        .daily_schedule()
        .iter()
        .map(|day| day.total_seconds)
        .sum();
    assert_eq!(summed, plan.total_seconds());
    assert_eq!(plan.average_chapters_per_day(), 4);
}

#[test]
fn test_single_day_plan() {
    let catalog = ContentCatalog::standard().unwrap();
    let plan = PlanBuilder::new(&catalog)
        .build(PlanType::Psalms, date(2025, 5, 5), date(2025, 5, 5))
        .unwrap();

    assert_eq!(plan.total_days(), 1);
    assert_eq!(plan.day(1).unwrap().chapters.len(), 150);
    assert_eq!(plan.daily_budget_seconds(), plan.total_seconds());
}

#[test]
fn test_invalid_date_range() {
    let catalog = ContentCatalog::standard().unwrap();
    let result =
        PlanBuilder::new(&catalog).build(PlanType::Psalms, date(2025, 5, 5), date(2025, 5, 4));

    assert!(matches!(result, Err(PlanError::InvalidDateRange { .. })));
}

#[test]
fn test_empty_corpus() {
    let catalog = nine_chapter_catalog();
    let result =
        PlanBuilder::new(&catalog).build(PlanType::Psalms, date(2025, 1, 1), date(2025, 1, 30));

    assert!(matches!(
        result,
        Err(PlanError::EmptyCorpus {
            plan_type: PlanType::Psalms
        })
    ));
}

#[test]
fn test_day_index_lookup() {
    let catalog = nine_chapter_catalog();
    let plan = PlanBuilder::new(&catalog)
        .build(PlanType::Pentateuch, date(2025, 1, 1), date(2025, 1, 3))
        .unwrap();

    assert_eq!(plan.day_of(ChapterRef::new(1, 1)), Some(1));
    assert_eq!(plan.day_of(ChapterRef::new(1, 4)), Some(2));
    assert_eq!(plan.day_of(ChapterRef::new(1, 9)), Some(3));
    assert_eq!(plan.day_of(ChapterRef::new(2, 1)), None);
    assert!(plan.day(0).is_none());
    assert!(plan.day(4).is_none());
}

#[test]
fn test_builder_records_options() {
    let catalog = nine_chapter_catalog();
    let created_at: Timestamp = "2025-01-01T08:00:00Z".parse().unwrap();
    let plan = PlanBuilder::new(&catalog)
        .progress_mode(ProgressMode::Time)
        .created_at(created_at)
        .build(PlanType::Pentateuch, date(2025, 1, 1), date(2025, 1, 3))
        .unwrap();

    assert_eq!(plan.progress_mode(), ProgressMode::Time);
    assert_eq!(plan.created_at(), created_at);
    assert_eq!(plan.identity().plan_type, PlanType::Pentateuch);
}

#[test]
fn test_plan_json_round_trip_is_lossless() {
    let catalog = ContentCatalog::standard().unwrap();
    let plan = PlanBuilder::new(&catalog)
        .build(PlanType::NewTestament, date(2025, 1, 1), date(2025, 2, 15))
        .unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    let restored: ReadingPlan = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, plan);
    assert_eq!(serde_json::to_string(&restored).unwrap(), json);
    assert_eq!(
        restored.day_of(ChapterRef::new(66, 22)),
        Some(plan.total_days())
    );
    assert!(json.contains("\"start_date\":\"2025-01-01\""));
}

#[test]
fn test_record_without_flags_uses_defaults() {
    let catalog = nine_chapter_catalog();
    let plan = PlanBuilder::new(&catalog)
        .build(PlanType::Pentateuch, date(2025, 1, 1), date(2025, 1, 3))
        .unwrap();

    let mut value = serde_json::to_value(&plan).unwrap();
    let object = value.as_object_mut().unwrap();
    object.remove("progress_mode");
    object.remove("partition_rule");

    let restored: ReadingPlan = serde_json::from_value(value).unwrap();
    assert_eq!(restored.progress_mode(), ProgressMode::Chapters);
    assert_eq!(restored.partition_rule(), PartitionRule::FillToBudget);
}

proptest! {
    #[test]
    fn prop_every_chapter_scheduled_once(
        seconds in prop::collection::vec(1u32..900, 1..120),
        total_days in 1u32..60,
        within in any::<bool>(),
    ) {
        let rule = if within { PartitionRule::StayWithinBudget } else { PartitionRule::FillToBudget };
        let chapters: Vec<ChapterDuration> = (1u16..)
            .zip(&seconds)
            .map(|(chapter, seconds)| ChapterDuration { chapter: ChapterRef::new(1, chapter), seconds: *seconds })
            .collect();
        let total: u64 = seconds.iter().map(|s| u64::from(*s)).sum();
        let budget = daily_budget(total, total_days);

        let days = partition(&chapters, date(2025, 1, 1), total_days, budget, rule).unwrap();

        prop_assert_eq!(days.len(), total_days as usize);
        let flattened: Vec<ChapterDuration> = days.iter().flat_map(|day| day.chapters.iter().copied()).collect();
        prop_assert_eq!(&flattened, &chapters);
        prop_assert_eq!(days.iter().map(|day| day.total_seconds).sum::<u64>(), total);

        // Empty days only trail the schedule.
        if let Some(first_empty) = days.iter().position(|day| day.is_empty()) {
            prop_assert!(days[first_empty..].iter().all(|day| day.is_empty()));
        }

        if rule == PartitionRule::StayWithinBudget {
            for day in &days[..days.len() - 1] {
                prop_assert!(day.total_seconds <= budget || day.chapters.len() == 1);
            }
        }
    }
}
