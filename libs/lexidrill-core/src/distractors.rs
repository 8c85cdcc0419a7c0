//! Distractor selection for multiple-choice review exercises.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// Pick `n` incorrect options for a multiple-choice prompt.
///
/// Values equal to the correct answer are filtered out of the pool first.
/// With enough alternatives the pick is a uniform sample without
/// replacement; with too few, the pool is cycled from the start to pad to
/// exactly `n`. An empty pool is an error; distractors are never invented.
pub fn pick_distractors<R: Rng + ?Sized>(
    correct: &str,
    pool: &[String],
    n: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    let candidates: Vec<&String> = pool.iter().filter(|v| v.as_str() != correct).collect();
    if candidates.is_empty() {
        return Err(Error::InsufficientData);
    }

    if candidates.len() >= n {
        Ok(candidates
            .choose_multiple(rng, n)
            .map(|v| (*v).clone())
            .collect())
    } else {
        Ok(candidates
            .iter()
            .cycle()
            .take(n)
            .map(|v| (**v).clone())
            .collect())
    }
}
