//! In-memory store for tests and embedders that persist elsewhere.

use std::collections::{BTreeMap, HashMap};

use jiff::Timestamp;

use super::{PlanStore, ReadStatusStore};
use crate::{
    error::Result,
    models::{ChapterRef, ReadStatus, ReadingPlan},
};

/// Plan and read status held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    plan: Option<ReadingPlan>,
    statuses: BTreeMap<ChapterRef, ReadStatus>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadStatusStore for MemoryStore {
    fn get(&self, chapter: ChapterRef) -> Result<bool> {
        Ok(self
            .statuses
            .get(&chapter)
            .is_some_and(|status| status.is_read))
    }

    fn get_all(&self) -> Result<HashMap<ChapterRef, bool>> {
        Ok(self
            .statuses
            .values()
            .map(|status| (status.chapter, status.is_read))
            .collect())
    }

    fn set(&mut self, chapter: ChapterRef, is_read: bool, at: Timestamp) -> Result<()> {
        self.statuses.insert(
            chapter,
            ReadStatus {
                chapter,
                is_read,
                read_at: is_read.then_some(at),
            },
        );
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.statuses.clear();
        Ok(())
    }

    fn statuses(&self) -> Result<Vec<ReadStatus>> {
        Ok(self.statuses.values().copied().collect())
    }
}

impl PlanStore for MemoryStore {
    fn load_plan(&self) -> Result<Option<ReadingPlan>> {
        Ok(self.plan.clone())
    }

    fn save_plan(&mut self, plan: &ReadingPlan) -> Result<()> {
        self.plan = Some(plan.clone());
        Ok(())
    }

    fn delete_plan(&mut self) -> Result<bool> {
        Ok(self.plan.take().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_and_last_write_wins() {
        let mut store = MemoryStore::new();
        let chapter = ChapterRef::new(1, 1);
        let at = Timestamp::from_second(1_735_689_600).unwrap();

        assert!(!store.get(chapter).unwrap());
        store.set(chapter, true, at).unwrap();
        assert!(store.get(chapter).unwrap());
        store.set(chapter, false, at).unwrap();
        assert!(!store.get(chapter).unwrap());

        let statuses = store.statuses().unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].read_at, None);
        assert_eq!(store.read_count().unwrap(), 0);
    }

    #[test]
    fn test_get_all_and_clear() {
        let mut store = MemoryStore::new();
        let at = Timestamp::from_second(1_735_689_600).unwrap();
        store.set(ChapterRef::new(1, 2), true, at).unwrap();
        store.set(ChapterRef::new(1, 1), true, at).unwrap();
        store.set(ChapterRef::new(2, 1), false, at).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 3);
        assert!(all[&ChapterRef::new(1, 1)]);
        assert_eq!(store.read_count().unwrap(), 2);
        assert_eq!(store.statuses().unwrap()[0].chapter, ChapterRef::new(1, 1));
        assert_eq!(store.statuses().unwrap()[0].read_at, Some(at));

        store.clear().unwrap();
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_plan_reports_existence() {
        let mut store = MemoryStore::new();
        assert!(store.load_plan().unwrap().is_none());
        assert!(!store.delete_plan().unwrap());
    }
}
