//! Text canonicalization for answer comparison.
//!
//! Two comparison strengths coexist on purpose:
//! - [`normalize`] / [`answers_match`]: Unicode decomposition, letters only,
//!   lowercased. Used on the review path, where typed translations carry
//!   accents and stray punctuation.
//! - [`loose_eq`]: trim + lowercase, no decomposition. Used on the
//!   test-content path.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize a string for comparison.
///
/// Decomposes combined characters (NFD), drops everything that is not a
/// letter (combining marks, digits, punctuation, whitespace), and lowercases
/// the rest. Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether a typed answer matches the expected one on the review path.
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    normalize(submitted) == normalize(expected)
}

/// Case-insensitive trimmed comparison used by the content engine.
pub fn loose_eq(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
