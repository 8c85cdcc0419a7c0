//! Core engine for markup-driven language tests and vocabulary review.
//!
//! Provides:
//! - Markup parser turning embedded `[blank]` / `#[options] answer#` syntax
//!   into graded fields
//! - Sentence/paragraph shuffling for drag-and-drop reordering exercises
//! - Submission scoring against parsed ground truth
//! - Spaced-repetition scheduling (stage-based ease-factor model, plus a
//!   fixed day-table alternative)
//! - Distractor selection and review-session sequencing
//!
//! Everything here is a pure transform of its inputs; randomness enters
//! only through caller-supplied [`rand::Rng`] values, and persistence is
//! the caller's concern.

pub mod distractors;
pub mod error;
pub mod evaluate;
pub mod normalize;
pub mod parser;
pub mod scheduler;
pub mod session;
pub mod shuffle;
pub mod types;

pub use distractors::pick_distractors;
pub use error::{Error, Result};
pub use evaluate::{evaluate, grade_fields, score_fields, score_ordering, FieldFeedback, Submission};
pub use normalize::{answers_match, loose_eq, normalize};
pub use parser::{parse, parse_structure, ContentParser};
pub use scheduler::{get_scheduler, ReviewScheduler, MIN_EASE_FACTOR};
pub use session::{ReviewSessionState, SessionNext};
pub use shuffle::{build_ordering, split_units};
pub use types::{
    FieldKind, OrderingTest, ParsedContent, ParsedField, ParsedStructure, Score, Segment,
    ShuffleMode, ShuffleUnit, TestContent, VocabItem,
};
