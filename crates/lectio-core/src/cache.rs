//! Short-lived memoization of plan views.
//!
//! UI code re-renders often and asks for the same views many times per second.
//! [`ViewCache`] keeps the loaded plan, today's list and the read-status
//! snapshot for a few seconds. Expiry is only a backstop: every write must
//! call [`ViewCache::invalidate`] before it returns, so a caller never observes
//! stale data after its own write.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::Arc,
    time::{Duration, Instant},
};

use jiff::civil::Date;

use crate::models::{PlanKey, ReadLookup, ReadingPlan, TodayChapter};

/// Default lifetime of cached views.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
struct Entry<V> {
    stored_at: Instant,
    value: V,
}

/// Map whose entries expire `ttl` after insertion.
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Value for `key` if it is still fresh at `now`.
    pub fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| now.saturating_duration_since(entry.stored_at) < self.ttl)
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    /// Stores `value` as of `now`, dropping entries that have expired.
    pub fn insert_at(&mut self, key: K, value: V, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) < ttl);
        self.entries.insert(
            key,
            Entry {
                stored_at: now,
                value,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Memoized `get_today` results per plan and calendar day.
pub type TodayCache = TtlCache<(PlanKey, Date), Arc<Vec<TodayChapter>>>;

/// Memoized read-status snapshots per plan.
pub type ReadLookupCache = TtlCache<PlanKey, Arc<ReadLookup>>;

/// Counters describing cache effectiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub invalidations: u64,
    /// Entries currently held across all caches
    pub entries: usize,
}

/// Cached views owned by one engine instance.
#[derive(Debug, Clone)]
pub struct ViewCache {
    plan: TtlCache<(), Option<Arc<ReadingPlan>>>,
    today: TodayCache,
    read_lookup: ReadLookupCache,
    hits: u64,
    misses: u64,
    invalidations: u64,
}

impl ViewCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            plan: TtlCache::new(ttl),
            today: TtlCache::new(ttl),
            read_lookup: TtlCache::new(ttl),
            hits: 0,
            misses: 0,
            invalidations: 0,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.plan.ttl()
    }

    /// Cached result of loading the plan; `Some(None)` records that no plan
    /// exists.
    pub fn plan(&mut self) -> Option<Option<Arc<ReadingPlan>>> {
        let cached = self.plan.get(&());
        self.record(cached.is_some());
        cached
    }

    pub fn store_plan(&mut self, plan: Option<Arc<ReadingPlan>>) {
        self.plan.insert((), plan);
    }

    pub fn today(&mut self, plan: PlanKey, date: Date) -> Option<Arc<Vec<TodayChapter>>> {
        let cached = self.today.get(&(plan, date));
        self.record(cached.is_some());
        cached
    }

    pub fn store_today(&mut self, plan: PlanKey, date: Date, chapters: Arc<Vec<TodayChapter>>) {
        self.today.insert((plan, date), chapters);
    }

    pub fn read_lookup(&mut self, plan: PlanKey) -> Option<Arc<ReadLookup>> {
        let cached = self.read_lookup.get(&plan);
        self.record(cached.is_some());
        cached
    }

    pub fn store_read_lookup(&mut self, plan: PlanKey, lookup: Arc<ReadLookup>) {
        self.read_lookup.insert(plan, lookup);
    }

    /// Drops every cached view.
    pub fn invalidate(&mut self) {
        self.plan.clear();
        self.today.clear();
        self.read_lookup.clear();
        self.invalidations += 1;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            invalidations: self.invalidations,
            entries: self.plan.len() + self.today.len() + self.read_lookup.len(),
        }
    }

    fn record(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
