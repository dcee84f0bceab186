//! Synchronous reading plan engine.
//!
//! [`ReadingEngine`] ties the pure components together: it builds and stores
//! plans, records read status, and answers view queries (today's list,
//! chapter status, progress) through its own [`ViewCache`]. The engine holds
//! no storage itself; each call receives a backend implementing
//! [`PlanStore`](crate::store::PlanStore) and
//! [`ReadStatusStore`](crate::store::ReadStatusStore).
//!
//! Every write clears the cache before returning, even if the write failed.
//!
//! An engine serves one logical store. Cached views are not keyed by the
//! backend passed in, so a caller that points the same engine at a different
//! store must call [`ReadingEngine::invalidate`] first. [`crate::Planner`]
//! reopens the same database file on every call, which counts as one store.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use jiff::{civil::date, Timestamp};
//! use lectio_core::{
//!     catalog::ContentCatalog,
//!     engine::ReadingEngine,
//!     models::{ChapterRef, ChapterStatus, PlanType},
//!     params::CreatePlan,
//!     store::MemoryStore,
//! };
//!
//! let mut engine = ReadingEngine::new(Arc::new(ContentCatalog::standard()?));
//! let mut store = MemoryStore::new();
//!
//! let params = CreatePlan::new(PlanType::Psalms, date(2025, 1, 1), date(2025, 2, 19));
//! engine.create_plan(&mut store, &params, Timestamp::now())?;
//!
//! let psalm = ChapterRef::new(19, 1);
//! engine.mark_read(&mut store, psalm, Timestamp::now())?;
//! assert_eq!(
//!     engine.chapter_status(&store, psalm, date(2025, 1, 1))?,
//!     ChapterStatus::Completed
//! );
//! # Ok::<(), lectio_core::PlanError>(())
//! ```

use std::{sync::Arc, time::Duration};

use crate::{
    cache::{CacheStats, ViewCache, DEFAULT_TTL},
    catalog::ContentCatalog,
};

pub mod plan_ops;
pub mod status_ops;
pub mod views;


/// Plan engine owning one view cache.
#[derive(Debug, Clone)]
pub struct ReadingEngine {
    catalog: Arc<ContentCatalog>,
    cache: ViewCache,
}

impl ReadingEngine {
    /// Creates an engine with the default cache lifetime.
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self::with_cache_ttl(catalog, DEFAULT_TTL)
    }

    pub fn with_cache_ttl(catalog: Arc<ContentCatalog>, ttl: Duration) -> Self {
        Self {
            catalog,
            cache: ViewCache::new(ttl),
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drops all cached views.
    ///
    /// Needed only when the backing store was changed by someone other than
    /// this engine.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }
}
