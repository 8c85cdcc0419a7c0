//! Review walkthrough across a learner's vocabulary.
//!
//! Due items are reviewed and rescheduled; when nothing is due the whole
//! vocabulary is walked in practice mode, which evaluates answers but
//! leaves scheduling state strictly untouched.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use lexidrill_core::distractors::pick_distractors;
use lexidrill_core::normalize::answers_match;
use lexidrill_core::scheduler::ReviewScheduler;
use lexidrill_core::session::{ReviewSessionState, SessionNext};
use lexidrill_core::types::VocabItem;

use crate::error::{Result, ServiceError};
use crate::models::LearnTestResult;
use crate::repo::{ResultSink, VocabRepository};
use crate::session_store::SessionStore;

const SESSION_KEY: &str = "review_session";

/// What the caller renders next.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkthroughStep {
    Prompt {
        item: VocabItem,
        remaining: usize,
        practice_mode: bool,
    },
    Complete {
        practice_mode: bool,
    },
}

/// Outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub correct: bool,
    pub correct_answer: String,
    pub next: WalkthroughStep,
}

/// The review flow over injected storage and a scheduling policy.
pub struct ReviewService<'a> {
    repo: &'a dyn VocabRepository,
    results: &'a dyn ResultSink,
    sessions: &'a dyn SessionStore,
    scheduler: &'a dyn ReviewScheduler,
}

impl<'a> ReviewService<'a> {
    pub fn new(
        repo: &'a dyn VocabRepository,
        results: &'a dyn ResultSink,
        sessions: &'a dyn SessionStore,
        scheduler: &'a dyn ReviewScheduler,
    ) -> Self {
        Self {
            repo,
            results,
            sessions,
            scheduler,
        }
    }

    /// Start a walkthrough: the due set if there is one, otherwise the
    /// whole vocabulary in practice mode. An empty vocabulary cannot start.
    pub fn start(&self, user_id: i64, now: DateTime<Utc>) -> Result<WalkthroughStep> {
        let due = self.repo.list_due(user_id, now)?;
        let (items, practice_mode) = if due.is_empty() {
            (self.repo.list_all(user_id)?, true)
        } else {
            (due, false)
        };

        let state = ReviewSessionState::new(items, practice_mode)?;
        tracing::info!(
            user_id,
            practice_mode,
            count = state.items.len(),
            "review walkthrough started"
        );
        self.save_state(&state)?;
        Ok(Self::step(&state))
    }

    /// The current prompt without advancing.
    pub fn current(&self) -> Result<WalkthroughStep> {
        Ok(Self::step(&self.load_state()?))
    }

    /// Evaluate one typed answer, reschedule the item (outside practice
    /// mode) and advance, right or wrong.
    pub fn submit(
        &self,
        user_id: i64,
        answer: &str,
        now: DateTime<Utc>,
    ) -> Result<SubmissionResult> {
        let mut state = self.load_state()?;
        let item = match state.current() {
            SessionNext::Item(item) => item.clone(),
            SessionNext::Complete { .. } => {
                // Stale leftovers; completion already cleared the real state.
                self.sessions.remove(SESSION_KEY);
                return Err(ServiceError::SessionExpired);
            }
        };

        let correct = answers_match(answer, &item.translation);
        if state.practice_mode {
            tracing::debug!(item_id = item.id, correct, "practice answer evaluated");
        } else {
            self.repo.update_item(item.id, &|current: &VocabItem| {
                self.scheduler.schedule(current, correct, now)
            })?;
            tracing::debug!(item_id = item.id, correct, "item rescheduled");
        }

        state.advance();
        let next = if state.is_complete() {
            self.sessions.remove(SESSION_KEY);
            if !state.practice_mode {
                self.results.record_learn_result(&LearnTestResult {
                    user_id,
                    completed_at: now,
                })?;
            }
            tracing::info!(
                user_id,
                practice_mode = state.practice_mode,
                "review walkthrough complete"
            );
            WalkthroughStep::Complete {
                practice_mode: state.practice_mode,
            }
        } else {
            self.save_state(&state)?;
            Self::step(&state)
        };

        Ok(SubmissionResult {
            correct,
            correct_answer: item.translation,
            next,
        })
    }

    /// Assemble a multiple-choice option list for the current item: the
    /// correct translation plus `n` distractors drawn from the learner's
    /// other translations, shuffled together.
    pub fn multiple_choice<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let state = self.load_state()?;
        let item = match state.current() {
            SessionNext::Item(item) => item.clone(),
            SessionNext::Complete { .. } => return Err(ServiceError::SessionExpired),
        };

        let pool: Vec<String> = self
            .repo
            .list_all(item.user_id)?
            .into_iter()
            .filter(|other| other.id != item.id)
            .map(|other| other.translation)
            .collect();

        let mut options = pick_distractors(&item.translation, &pool, n, rng)?;
        options.push(item.translation);
        options.shuffle(rng);
        Ok(options)
    }

    fn step(state: &ReviewSessionState) -> WalkthroughStep {
        match state.current() {
            SessionNext::Item(item) => WalkthroughStep::Prompt {
                item: item.clone(),
                remaining: state.remaining(),
                practice_mode: state.practice_mode,
            },
            SessionNext::Complete { practice } => WalkthroughStep::Complete {
                practice_mode: practice,
            },
        }
    }

    fn load_state(&self) -> Result<ReviewSessionState> {
        let raw = self
            .sessions
            .get(SESSION_KEY)
            .ok_or(ServiceError::SessionExpired)?;
        serde_json::from_str(&raw).map_err(|e| ServiceError::Corrupt(e.to_string()))
    }

    fn save_state(&self, state: &ReviewSessionState) -> Result<()> {
        let raw =
            serde_json::to_string(state).map_err(|e| ServiceError::Corrupt(e.to_string()))?;
        self.sessions.set(SESSION_KEY, raw);
        Ok(())
    }
}
