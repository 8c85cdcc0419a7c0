//! Persistence-facing records the service reads and writes.

use chrono::{DateTime, Utc};
use lexidrill_core::types::TestContent;
use serde::{Deserialize, Serialize};

/// A stored test row: raw markup plus presentation flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTest {
    pub id: i64,
    pub name: String,
    pub book_id: i64,
    pub created_by: i64,
    pub content: TestContent,
}

/// Append-only record of one scored test submission. Written exactly once
/// per submission, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub user_id: i64,
    pub test_id: i64,
    pub score: u32,
    pub total_questions: u32,
    pub timestamp: DateTime<Utc>,
}

/// Append-only record of a completed (non-practice) review walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnTestResult {
    pub user_id: i64,
    pub completed_at: DateTime<Utc>,
}
