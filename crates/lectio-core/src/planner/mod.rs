//! Async facade over the reading engine and its SQLite store.
//!
//! [`Planner`] is what application code holds. Each method moves the blocking
//! database work onto tokio's blocking pool, opens a fresh [`Database`]
//! connection there and runs the matching [`ReadingEngine`] operation:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │  ReadingEngine  │    │    Database     │
//! │  (async, owns   │───▶│ (builds plans,  │───▶│  (PlanStore +   │
//! │   the engine)   │    │  caches views)  │    │ ReadStatusStore)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The engine sits behind a mutex that is only locked inside the blocking
//! task, never across an `.await`.
//!
//! # Usage
//!
//! ```rust
//! use jiff::civil::date;
//! use lectio_core::{params::CreatePlan, PlanType, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("lectio.db"))
//!     .build()
//!     .await?;
//!
//! let params = CreatePlan::new(PlanType::NewTestament, date(2025, 1, 1), date(2025, 3, 31));
//! let plan = planner.create_plan(&params).await?;
//! println!("{} chapters over {} days", plan.total_chapters(), plan.total_days());
//!
//! for entry in planner.today(date(2025, 1, 1)).await?.iter() {
//!     println!("{}:{} read={}", entry.chapter.book, entry.chapter.chapter, entry.is_read);
//! }
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::task;

use crate::{
    cache::CacheStats,
    catalog::ContentCatalog,
    db::Database,
    engine::ReadingEngine,
    error::{PlanError, Result},
};

pub mod builder;
pub mod plan_ops;
pub mod status_ops;
pub mod view_ops;


pub use builder::PlannerBuilder;

/// Async interface to a persisted reading plan.
#[derive(Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
    catalog: Arc<ContentCatalog>,
    engine: Arc<Mutex<ReadingEngine>>,
}

impl Planner {
    pub(crate) fn new(
        db_path: PathBuf,
        catalog: Arc<ContentCatalog>,
        cache_ttl: Duration,
    ) -> Self {
        let engine = ReadingEngine::with_cache_ttl(Arc::clone(&catalog), cache_ttl);
        Self {
            db_path,
            catalog,
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Catalog the plans are built from.
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.lock_engine().cache_stats()
    }

    /// Drops cached views, e.g. after another process changed the database.
    pub fn invalidate_cache(&self) {
        self.lock_engine().invalidate();
    }

    fn lock_engine(&self) -> MutexGuard<'_, ReadingEngine> {
        // Only derived data lives behind this lock.
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `op` on the blocking pool with a fresh connection.
    pub(crate) async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut ReadingEngine, &mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let engine = Arc::clone(&self.engine);

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut engine = engine.lock().unwrap_or_else(PoisonError::into_inner);
            op(&mut *engine, &mut db)
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
