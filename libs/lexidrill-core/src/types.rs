//! Core types for the test-content engine and the review scheduler.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a test's content is split and scrambled for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    None,
    Sentences,
    Paragraphs,
}

impl Default for ShuffleMode {
    fn default() -> Self {
        Self::None
    }
}

/// A test's raw markup plus its presentation flags.
///
/// The two shuffle flags are mutually exclusive by convention; sentence
/// shuffling wins when both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestContent {
    pub content: String,
    #[serde(default)]
    pub shuffle_sentences: bool,
    #[serde(default)]
    pub shuffle_paragraphs: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<u32>,
}

impl TestContent {
    /// Plain field-based content with no shuffling and no time limit.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            shuffle_sentences: false,
            shuffle_paragraphs: false,
            time_limit_minutes: None,
        }
    }

    pub fn mode(&self) -> ShuffleMode {
        if self.shuffle_sentences {
            ShuffleMode::Sentences
        } else if self.shuffle_paragraphs {
            ShuffleMode::Paragraphs
        } else {
            ShuffleMode::None
        }
    }
}

/// Kind of graded field embedded in test content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Dropdown,
    Blank,
}

/// One graded field, identified by `q1, q2, ...` in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedField {
    pub id: String,
    pub kind: FieldKind,
    pub correct_answer: String,
    /// Choices shown to the learner; empty for blanks.
    #[serde(default)]
    pub options: Vec<String>,
}

/// A run of literal text or a graded field within one content line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Literal(String),
    Field(ParsedField),
}

/// Parsed test content: one segment sequence per input line.
///
/// Ephemeral: recomputed from the stored markup on every request, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedContent {
    pub lines: Vec<Vec<Segment>>,
}

impl ParsedContent {
    /// All graded fields in discovery order.
    pub fn fields(&self) -> impl Iterator<Item = &ParsedField> {
        self.lines.iter().flatten().filter_map(|seg| match seg {
            Segment::Field(field) => Some(field),
            Segment::Literal(_) => None,
        })
    }

    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    /// Field ID to correct answer, for scoring.
    pub fn answer_key(&self) -> HashMap<&str, &str> {
        self.fields()
            .map(|f| (f.id.as_str(), f.correct_answer.as_str()))
            .collect()
    }
}

/// One unit of a reordering exercise as presented to the learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShuffleUnit {
    pub id: String,
    pub content: String,
}

/// A reordering exercise: scrambled presentation plus scoring ground truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderingTest {
    /// Units in discovery order: the scoring ground truth, never shuffled.
    pub original_order: Vec<String>,
    /// Units in presentation order, with synthetic `item_1, item_2, ...` IDs.
    pub items: Vec<ShuffleUnit>,
    /// Synthetic ID to unit content, for resolving submissions.
    pub answers: HashMap<String, String>,
}

/// What a test-taking request renders and scores against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsedStructure {
    Fields(ParsedContent),
    Ordering(OrderingTest),
}

/// Outcome of scoring one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub score: u32,
    pub total: u32,
}

/// One vocabulary item owned by a learner.
///
/// Scheduling fields are mutated only by a [`crate::scheduler::ReviewScheduler`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabItem {
    pub id: i64,
    pub user_id: i64,
    pub word: String,
    pub translation: String,
    pub next_review: DateTime<Utc>,
    pub interval_days: f64,
    pub ease_factor: f64,
    pub learning_stage: u32,
}

impl VocabItem {
    /// A freshly added item: stage 0, due immediately.
    pub fn new(
        id: i64,
        user_id: i64,
        word: impl Into<String>,
        translation: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            word: word.into(),
            translation: translation.into(),
            next_review: now,
            interval_days: 0.0,
            ease_factor: 2.5,
            learning_stage: 0,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }
}
