//! Plan operations for the Planner.

use std::sync::Arc;

use jiff::Timestamp;

use super::Planner;
use crate::{error::Result, models::ReadingPlan, params::CreatePlan};

impl Planner {
    /// Builds and stores a new plan, replacing the current one.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<ReadingPlan> {
        let params = params.clone();
        let created_at = Timestamp::now();

        self.run(move |engine, db| engine.create_plan(db, &params, created_at))
            .await
    }

    /// The current plan; `PlanError::PlanNotFound` when there is none.
    pub async fn current_plan(&self) -> Result<Arc<ReadingPlan>> {
        self.run(|engine, db| engine.current_plan(&*db)).await
    }

    pub async fn find_plan(&self) -> Result<Option<Arc<ReadingPlan>>> {
        self.run(|engine, db| engine.find_plan(&*db)).await
    }

    /// Deletes the current plan, keeping read status. Returns whether a plan
    /// existed.
    pub async fn delete_plan(&self) -> Result<bool> {
        self.run(|engine, db| engine.delete_plan(db)).await
    }
}
