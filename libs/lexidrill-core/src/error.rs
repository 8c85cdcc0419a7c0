//! Error types for lexidrill-core.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by evaluation and session setup.
///
/// Parsing and scheduling are total: malformed markup degrades to literal
/// text, and every `(state, success)` pair maps to a defined transition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A reordered submission whose length differs from the canonical order.
    /// The whole submission is rejected; no partial score is computed.
    #[error("submitted order has {submitted} items, expected {expected}")]
    OrderMismatch { submitted: usize, expected: usize },

    /// The submission shape does not match the parsed structure (field
    /// answers for an ordering test, or the reverse).
    #[error("submission shape does not match the test structure")]
    SubmissionShape,

    /// The distractor pool holds no usable alternatives.
    #[error("no alternative values available for distractor selection")]
    InsufficientData,

    /// A review walkthrough cannot start over an empty vocabulary.
    #[error("vocabulary is empty")]
    EmptyVocabulary,
}
