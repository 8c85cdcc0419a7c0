//! Test taking: render on request, score on submission.
//!
//! Rendering parses the stored markup (shuffling it when flagged) and
//! stamps a start marker in the session store. Scoring recomputes the same
//! parse from the stored content, never from a structure kept in memory,
//! and writes one result record.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use lexidrill_core::evaluate::{grade_fields, score_fields, score_ordering, FieldFeedback, Submission};
use lexidrill_core::parser::{parse, parse_structure};
use lexidrill_core::types::{OrderingTest, ParsedStructure, Score, ShuffleMode};
use lexidrill_core::Error as CoreError;

use crate::error::{Result, ServiceError};
use crate::models::TestResult;
use crate::repo::{ResultSink, TestRepository};
use crate::session_store::SessionStore;

/// Outcome of one scored submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TestOutcome {
    pub score: Score,
    /// Per-field grading for redisplay; empty for ordering tests.
    pub feedback: Vec<FieldFeedback>,
    /// Whether the submission arrived past the test's time limit. The score
    /// still stands; acting on the flag is the caller's call.
    pub time_exceeded: bool,
}

/// The test-taking flow over injected storage.
pub struct TestService<'a> {
    tests: &'a dyn TestRepository,
    results: &'a dyn ResultSink,
    sessions: &'a dyn SessionStore,
}

impl<'a> TestService<'a> {
    pub fn new(
        tests: &'a dyn TestRepository,
        results: &'a dyn ResultSink,
        sessions: &'a dyn SessionStore,
    ) -> Self {
        Self {
            tests,
            results,
            sessions,
        }
    }

    fn start_key(test_id: i64) -> String {
        format!("start_time_{test_id}")
    }

    fn ordering_key(test_id: i64) -> String {
        format!("ordering_{test_id}")
    }

    /// Render a test for taking.
    ///
    /// For ordering tests the shuffled structure is kept in the session
    /// store: the synthetic IDs the learner saw must resolve the same way
    /// when the submission comes back.
    pub fn render<R: Rng + ?Sized>(
        &self,
        test_id: i64,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<ParsedStructure> {
        let test = self
            .tests
            .get_test(test_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("test {test_id}")))?;

        let structure = parse_structure(&test.content, rng);
        if let ParsedStructure::Ordering(ordering) = &structure {
            let raw = serde_json::to_string(ordering)
                .map_err(|e| ServiceError::Corrupt(e.to_string()))?;
            self.sessions.set(&Self::ordering_key(test_id), raw);
        }
        self.sessions
            .set(&Self::start_key(test_id), now.to_rfc3339());

        tracing::debug!(test_id, "test rendered");
        Ok(structure)
    }

    /// Score a submission.
    ///
    /// Validation failures surface before anything is persisted: the result
    /// record is written exactly once, and only for a scored submission.
    pub fn score(
        &self,
        user_id: i64,
        test_id: i64,
        submission: &Submission,
        now: DateTime<Utc>,
    ) -> Result<TestOutcome> {
        let test = self
            .tests
            .get_test(test_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("test {test_id}")))?;

        let started_raw = self
            .sessions
            .get(&Self::start_key(test_id))
            .ok_or(ServiceError::SessionExpired)?;
        let started = DateTime::parse_from_rfc3339(&started_raw)
            .map_err(|e| ServiceError::Corrupt(e.to_string()))?
            .with_timezone(&Utc);

        let time_exceeded = match test.content.time_limit_minutes {
            Some(limit) => now - started > Duration::minutes(i64::from(limit)),
            None => false,
        };

        let (score, feedback) = match test.content.mode() {
            ShuffleMode::None => {
                let answers = match submission {
                    Submission::Fields(answers) => answers,
                    Submission::Ordering(_) => return Err(CoreError::SubmissionShape.into()),
                };
                let parsed = parse(&test.content.content);
                (score_fields(&parsed, answers), grade_fields(&parsed, answers))
            }
            _ => {
                let ids = match submission {
                    Submission::Ordering(ids) => ids,
                    Submission::Fields(_) => return Err(CoreError::SubmissionShape.into()),
                };
                let raw = self
                    .sessions
                    .get(&Self::ordering_key(test_id))
                    .ok_or(ServiceError::SessionExpired)?;
                let ordering: OrderingTest =
                    serde_json::from_str(&raw).map_err(|e| ServiceError::Corrupt(e.to_string()))?;
                (score_ordering(&ordering, ids)?, Vec::new())
            }
        };

        self.results.record_test_result(&TestResult {
            user_id,
            test_id,
            score: score.score,
            total_questions: score.total,
            timestamp: now,
        })?;
        self.sessions.remove(&Self::start_key(test_id));
        self.sessions.remove(&Self::ordering_key(test_id));

        tracing::info!(
            user_id,
            test_id,
            score = score.score,
            total = score.total,
            time_exceeded,
            "test scored"
        );

        Ok(TestOutcome {
            score,
            feedback,
            time_exceeded,
        })
    }
}
