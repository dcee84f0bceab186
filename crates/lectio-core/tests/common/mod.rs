use std::time::Duration;

use jiff::{civil::date, Timestamp};
use lectio_core::{CreatePlan, PlanType, Planner, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_cache_ttl(Duration::from_secs(30))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Ninety-day New Testament plan starting 2025-01-01.
#[allow(dead_code)]
pub fn new_testament_quarter() -> CreatePlan {
    CreatePlan::new(PlanType::NewTestament, date(2025, 1, 1), date(2025, 3, 31))
}

#[allow(dead_code)]
pub fn fixed_timestamp() -> Timestamp {
    Timestamp::from_second(1_735_689_600).expect("valid timestamp")
}
