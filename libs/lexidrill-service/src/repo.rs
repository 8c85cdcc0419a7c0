//! Repository traits and the in-memory implementation backing the tests.
//!
//! The core never touches storage directly; everything goes through these
//! traits. Real deployments put a database behind them.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use lexidrill_core::types::VocabItem;

use crate::error::{Result, ServiceError};
use crate::models::{LearnTestResult, StoredTest, TestResult};

/// Vocabulary storage, one row per item.
///
/// Scheduling mutations go through [`VocabRepository::update_item`] so the
/// read-modify-write is atomic per item.
pub trait VocabRepository: Send + Sync {
    fn get_item(&self, id: i64) -> Result<Option<VocabItem>>;

    fn save_item(&self, item: &VocabItem) -> Result<()>;

    /// Atomically replace one item with `apply(current)`.
    ///
    /// Two near-simultaneous calls for the same id (duplicate form posts)
    /// must serialize; neither update may be lost.
    fn update_item(
        &self,
        id: i64,
        apply: &dyn Fn(&VocabItem) -> VocabItem,
    ) -> Result<VocabItem>;

    /// Items due at `now`, soonest first.
    fn list_due(&self, user_id: i64, now: DateTime<Utc>) -> Result<Vec<VocabItem>>;

    /// The learner's whole vocabulary.
    fn list_all(&self, user_id: i64) -> Result<Vec<VocabItem>>;
}

/// Stored tests.
pub trait TestRepository: Send + Sync {
    fn get_test(&self, id: i64) -> Result<Option<StoredTest>>;
}

/// Append-only sink for result records.
pub trait ResultSink: Send + Sync {
    fn record_test_result(&self, result: &TestResult) -> Result<()>;
    fn record_learn_result(&self, result: &LearnTestResult) -> Result<()>;
}

/// In-memory repository. Single-row operations are atomic under one lock,
/// matching the single-writer guarantee a database transaction would give.
#[derive(Default)]
pub struct MemoryRepository {
    items: Mutex<HashMap<i64, VocabItem>>,
    tests: Mutex<HashMap<i64, StoredTest>>,
    test_results: Mutex<Vec<TestResult>>,
    learn_results: Mutex<Vec<LearnTestResult>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_item(&self, item: VocabItem) {
        self.items.lock().expect("items lock").insert(item.id, item);
    }

    pub fn insert_test(&self, test: StoredTest) {
        self.tests.lock().expect("tests lock").insert(test.id, test);
    }

    pub fn test_results(&self) -> Vec<TestResult> {
        self.test_results.lock().expect("results lock").clone()
    }

    pub fn learn_results(&self) -> Vec<LearnTestResult> {
        self.learn_results.lock().expect("results lock").clone()
    }
}

impl VocabRepository for MemoryRepository {
    fn get_item(&self, id: i64) -> Result<Option<VocabItem>> {
        Ok(self.items.lock().expect("items lock").get(&id).cloned())
    }

    fn save_item(&self, item: &VocabItem) -> Result<()> {
        self.items
            .lock()
            .expect("items lock")
            .insert(item.id, item.clone());
        Ok(())
    }

    fn update_item(
        &self,
        id: i64,
        apply: &dyn Fn(&VocabItem) -> VocabItem,
    ) -> Result<VocabItem> {
        let mut items = self.items.lock().expect("items lock");
        let current = items
            .get(&id)
            .ok_or_else(|| ServiceError::NotFound(format!("vocabulary item {id}")))?;
        let updated = apply(current);
        items.insert(id, updated.clone());
        Ok(updated)
    }

    fn list_due(&self, user_id: i64, now: DateTime<Utc>) -> Result<Vec<VocabItem>> {
        let items = self.items.lock().expect("items lock");
        let mut due: Vec<VocabItem> = items
            .values()
            .filter(|i| i.user_id == user_id && i.is_due(now))
            .cloned()
            .collect();
        due.sort_by_key(|i| (i.next_review, i.id));
        Ok(due)
    }

    fn list_all(&self, user_id: i64) -> Result<Vec<VocabItem>> {
        let items = self.items.lock().expect("items lock");
        let mut all: Vec<VocabItem> = items
            .values()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect();
        all.sort_by_key(|i| i.id);
        Ok(all)
    }
}

impl TestRepository for MemoryRepository {
    fn get_test(&self, id: i64) -> Result<Option<StoredTest>> {
        Ok(self.tests.lock().expect("tests lock").get(&id).cloned())
    }
}

impl ResultSink for MemoryRepository {
    fn record_test_result(&self, result: &TestResult) -> Result<()> {
        self.test_results
            .lock()
            .expect("results lock")
            .push(result.clone());
        Ok(())
    }

    fn record_learn_result(&self, result: &LearnTestResult) -> Result<()> {
        self.learn_results
            .lock()
            .expect("results lock")
            .push(result.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn item(id: i64, user_id: i64) -> VocabItem {
        VocabItem::new(id, user_id, format!("w{id}"), format!("t{id}"), Utc::now())
    }

    #[test]
    fn due_listing_filters_by_user_and_time() {
        let repo = MemoryRepository::new();
        let now = Utc::now();
        repo.insert_item(item(1, 1));
        repo.insert_item(item(2, 2));
        let mut future = item(3, 1);
        future.next_review = now + chrono::Duration::days(1);
        repo.insert_item(future);

        let due = repo.list_due(1, now).unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, 1);

        let all = repo.list_all(1).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn update_item_is_atomic_across_threads() {
        let repo = Arc::new(MemoryRepository::new());
        repo.insert_item(item(1, 1));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    repo.update_item(1, &|cur: &VocabItem| {
                        let mut next = cur.clone();
                        next.learning_stage += 1;
                        next
                    })
                    .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // No lost updates.
        assert_eq!(repo.get_item(1).unwrap().unwrap().learning_stage, 8);
    }

    #[test]
    fn update_of_unknown_item_is_not_found() {
        let repo = MemoryRepository::new();
        let result = repo.update_item(99, &|cur: &VocabItem| cur.clone());
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
