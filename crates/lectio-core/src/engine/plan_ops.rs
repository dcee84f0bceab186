//! Plan lifecycle operations.

use std::sync::Arc;

use jiff::Timestamp;
use log::{debug, info};

use super::ReadingEngine;
use crate::{
    error::{PlanError, Result},
    models::ReadingPlan,
    params::CreatePlan,
    schedule::PlanBuilder,
    store::PlanStore,
};

impl ReadingEngine {
    /// Builds a plan and stores it, replacing any current plan.
    ///
    /// Read status is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidDateRange` or `PlanError::EmptyCorpus` when
    /// the plan cannot be built, or the store's error when saving fails.
    pub fn create_plan<S: PlanStore>(
        &mut self,
        store: &mut S,
        params: &CreatePlan,
        created_at: Timestamp,
    ) -> Result<ReadingPlan> {
        let plan = PlanBuilder::new(&self.catalog)
            .progress_mode(params.progress_mode)
            .partition_rule(params.partition_rule)
            .created_at(created_at)
            .build(params.plan_type, params.start_date, params.end_date)?;

        let saved = store.save_plan(&plan);
        self.cache.invalidate();
        saved?;

        info!(
            "Created {} plan from {} to {}",
            plan.plan_type(),
            plan.start_date(),
            plan.end_date()
        );
        Ok(plan)
    }

    /// The current plan.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::PlanNotFound` when no plan has been created.
    pub fn current_plan<S: PlanStore>(&mut self, store: &S) -> Result<Arc<ReadingPlan>> {
        self.find_plan(store)?.ok_or(PlanError::PlanNotFound)
    }

    /// The current plan, or `None` when no plan has been created.
    ///
    /// Served from the cache while it is fresh, whichever store is passed.
    pub fn find_plan<S: PlanStore>(&mut self, store: &S) -> Result<Option<Arc<ReadingPlan>>> {
        if let Some(cached) = self.cache.plan() {
            return Ok(cached);
        }

        let plan = store.load_plan()?.map(Arc::new);
        debug!("Loaded plan from store (present: {})", plan.is_some());
        self.cache.store_plan(plan.clone());
        Ok(plan)
    }

    /// Deletes the current plan. Read status persists.
    ///
    /// Returns whether a plan existed.
    pub fn delete_plan<S: PlanStore>(&mut self, store: &mut S) -> Result<bool> {
        let deleted = store.delete_plan();
        self.cache.invalidate();
        let deleted = deleted?;

        if deleted {
            info!("Deleted reading plan");
        }
        Ok(deleted)
    }
}
