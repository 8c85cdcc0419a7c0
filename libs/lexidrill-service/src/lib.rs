//! Orchestration layer over the core engine.
//!
//! Everything the excluded web tier calls into lives here: repository and
//! session-store abstractions, the test-taking flow (render/score) and the
//! review walkthrough (due-set selection, practice fallback, transactional
//! rescheduling). Storage and transport stay behind the injected traits.

pub mod error;
pub mod models;
pub mod repo;
pub mod review;
pub mod session_store;
pub mod take;

pub use error::{Result, ServiceError};
pub use models::{LearnTestResult, StoredTest, TestResult};
pub use repo::{MemoryRepository, ResultSink, TestRepository, VocabRepository};
pub use review::{ReviewService, SubmissionResult, WalkthroughStep};
pub use session_store::{MemorySessionStore, SessionStore};
pub use take::{TestOutcome, TestService};
