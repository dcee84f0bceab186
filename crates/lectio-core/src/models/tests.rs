#[cfg(test)]
mod model_tests {
    use std::collections::HashMap;

    use jiff::civil::date;
    use serde_json::{json, Value};

    use crate::{
        catalog::ContentCatalog,
        models::{
            ChapterRef, ChapterStatus, PartitionRule, PlanType, ProgressMode, ProgressSnapshot,
            ReadLookup, ReadingPlan,
        },
        schedule::PlanBuilder,
    };

    /// Serialized Pentateuch plan spread over ten days.
    fn pentateuch_record() -> Value {
        let catalog = ContentCatalog::standard().unwrap();
        let plan = PlanBuilder::new(&catalog)
            .build(PlanType::Pentateuch, date(2025, 1, 1), date(2025, 1, 10))
            .unwrap();
        serde_json::to_value(&plan).unwrap()
    }

    fn load(record: Value) -> Result<ReadingPlan, serde_json::Error> {
        serde_json::from_value(record)
    }

    #[test]
    fn test_chapter_ref_canonical_order() {
        let mut refs = vec![
            ChapterRef::new(2, 1),
            ChapterRef::new(1, 10),
            ChapterRef::new(1, 2),
        ];
        refs.sort();
        assert_eq!(
            refs,
            vec![
                ChapterRef::new(1, 2),
                ChapterRef::new(1, 10),
                ChapterRef::new(2, 1)
            ]
        );
    }

    #[test]
    fn test_plan_type_book_ranges() {
        assert_eq!(PlanType::FullBible.book_range(), (1, 66));
        assert_eq!(PlanType::OldTestament.book_range(), (1, 39));
        assert_eq!(PlanType::NewTestament.book_range(), (40, 66));
        assert_eq!(PlanType::Pentateuch.book_range(), (1, 5));
        assert_eq!(PlanType::Psalms.book_range(), (19, 19));
        assert_eq!(PlanType::Gospels.book_range(), (40, 43));
    }

    #[test]
    fn test_plan_type_parsing() {
        assert_eq!("full_bible".parse::<PlanType>(), Ok(PlanType::FullBible));
        assert_eq!("New-Testament".parse::<PlanType>(), Ok(PlanType::NewTestament));
        assert_eq!("psalms".parse::<PlanType>(), Ok(PlanType::Psalms));
        assert!("apocrypha".parse::<PlanType>().is_err());

        for plan_type in PlanType::ALL {
            assert_eq!(plan_type.as_str().parse::<PlanType>(), Ok(plan_type));
            assert_eq!(plan_type.to_string(), plan_type.as_str());
        }
    }

    #[test]
    fn test_plan_type_serializes_snake_case() {
        let json = serde_json::to_string(&PlanType::OldTestament).unwrap();
        assert_eq!(json, "\"old_testament\"");
    }

    #[test]
    fn test_chapter_status_parsing() {
        for status in [
            ChapterStatus::Completed,
            ChapterStatus::Today,
            ChapterStatus::Yesterday,
            ChapterStatus::Missed,
            ChapterStatus::Future,
            ChapterStatus::Normal,
        ] {
            assert_eq!(status.as_str().parse::<ChapterStatus>(), Ok(status));
        }
        assert!("late".parse::<ChapterStatus>().is_err());
    }

    #[test]
    fn test_mode_and_rule_parsing() {
        assert_eq!("time".parse::<ProgressMode>(), Ok(ProgressMode::Time));
        assert_eq!("Chapters".parse::<ProgressMode>(), Ok(ProgressMode::Chapters));
        assert_eq!(ProgressMode::default(), ProgressMode::Chapters);

        assert_eq!("within".parse::<PartitionRule>(), Ok(PartitionRule::StayWithinBudget));
        assert_eq!(
            "fill-to-budget".parse::<PartitionRule>(),
            Ok(PartitionRule::FillToBudget)
        );
        assert_eq!(PartitionRule::default(), PartitionRule::FillToBudget);
    }

    #[test]
    fn test_read_lookup_ignores_unread_entries() {
        let mut statuses = HashMap::new();
        statuses.insert(ChapterRef::new(1, 1), true);
        statuses.insert(ChapterRef::new(1, 2), false);
        statuses.insert(ChapterRef::new(40, 3), true);

        let lookup = ReadLookup::from(&statuses);
        assert_eq!(lookup.len(), 2);
        assert!(lookup.is_read(ChapterRef::new(1, 1)));
        assert!(!lookup.is_read(ChapterRef::new(1, 2)));
        assert!(!lookup.is_read(ChapterRef::new(2, 1)));
    }

    #[test]
    fn test_neutral_snapshot() {
        let snapshot = ProgressSnapshot::neutral();
        assert_eq!(snapshot.read_chapters, 0);
        assert_eq!(snapshot.total_chapters, 0);
        assert_eq!(snapshot.progress_percentage, 0.0);
        assert!(!snapshot.is_on_track);
        assert!(!snapshot.is_complete());
        assert_eq!(snapshot.estimated_completion_date, None);
    }

    #[test]
    fn test_consistent_record_loads() {
        let plan = load(pentateuch_record()).unwrap();
        assert_eq!(plan.total_days(), 10);
        assert_eq!(plan.day_of(ChapterRef::new(1, 1)), Some(1));
        assert_eq!(plan.day_of(ChapterRef::new(5, 34)), Some(10));
    }

    #[test]
    fn test_record_with_missing_day_is_rejected() {
        let mut record = pentateuch_record();
        record["daily_schedule"].as_array_mut().unwrap().remove(1);

        let err = load(record).unwrap_err();
        assert!(err.to_string().contains("9 scheduled days for a 10-day plan"));
    }

    #[test]
    fn test_record_with_renumbered_day_is_rejected() {
        let mut record = pentateuch_record();
        record["daily_schedule"][1]["day"] = json!(3);

        assert!(load(record).is_err());
    }

    #[test]
    fn test_record_with_shifted_date_is_rejected() {
        let mut record = pentateuch_record();
        record["daily_schedule"][2]["date"] = json!("2025-01-04");
        assert!(load(record).is_err());

        let mut record = pentateuch_record();
        record["end_date"] = json!("2025-01-11");
        assert!(load(record).is_err());
    }

    #[test]
    fn test_record_with_duplicate_chapter_is_rejected() {
        let mut record = pentateuch_record();
        let first = record["daily_schedule"][0]["chapters"][0].clone();
        let seconds = first["seconds"].as_u64().unwrap();
        let second_day = &mut record["daily_schedule"][1];
        second_day["chapters"].as_array_mut().unwrap().push(first);
        let day_total = second_day["total_seconds"].as_u64().unwrap() + seconds;
        second_day["total_seconds"] = json!(day_total);

        let err = load(record).unwrap_err();
        assert!(err.to_string().contains("book 1 chapter 1 is scheduled on days 1 and 2"));
    }

    #[test]
    fn test_record_with_wrong_totals_is_rejected() {
        let mut record = pentateuch_record();
        record["total_chapters"] = json!(1);
        assert!(load(record).is_err());

        let mut record = pentateuch_record();
        let total = record["total_seconds"].as_u64().unwrap();
        record["total_seconds"] = json!(total + 1);
        assert!(load(record).is_err());

        let mut record = pentateuch_record();
        record["daily_schedule"][0]["total_seconds"] = json!(0);
        assert!(load(record).is_err());
    }
}
