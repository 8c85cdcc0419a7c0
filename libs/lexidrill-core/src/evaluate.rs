//! Scoring submissions against parsed ground truth.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::normalize::loose_eq;
use crate::types::{OrderingTest, ParsedContent, ParsedStructure, Score};

/// A learner's submission, keyed the way the rendered structure was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Submission {
    /// Field ID to submitted value.
    Fields(HashMap<String, String>),
    /// Synthetic unit IDs in the order the learner arranged them.
    Ordering(Vec<String>),
}

/// Per-field grading detail for rendering a scored submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFeedback {
    pub id: String,
    pub submitted: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Score a submission against the structure it was rendered from.
pub fn evaluate(parsed: &ParsedStructure, submission: &Submission) -> Result<Score> {
    match (parsed, submission) {
        (ParsedStructure::Fields(content), Submission::Fields(answers)) => {
            Ok(score_fields(content, answers))
        }
        (ParsedStructure::Ordering(test), Submission::Ordering(ids)) => {
            score_ordering(test, ids)
        }
        _ => Err(Error::SubmissionShape),
    }
}

/// Score field answers. A missing or blank value counts as incorrect, never
/// as an error.
pub fn score_fields(content: &ParsedContent, answers: &HashMap<String, String>) -> Score {
    let mut score = 0;
    let mut total = 0;
    for field in content.fields() {
        total += 1;
        let submitted = answers.get(&field.id).map(String::as_str).unwrap_or("");
        if loose_eq(submitted, &field.correct_answer) {
            score += 1;
        }
    }
    Score { score, total }
}

/// Grade each field individually, for post-submission rendering: correct
/// flag plus the answer to reveal when wrong.
pub fn grade_fields(
    content: &ParsedContent,
    answers: &HashMap<String, String>,
) -> Vec<FieldFeedback> {
    content
        .fields()
        .map(|field| {
            let submitted = answers.get(&field.id).cloned().unwrap_or_default();
            let is_correct = loose_eq(&submitted, &field.correct_answer);
            FieldFeedback {
                id: field.id.clone(),
                submitted,
                correct_answer: field.correct_answer.clone(),
                is_correct,
            }
        })
        .collect()
}

/// Score a reordering submission position-by-position against the canonical
/// order.
///
/// A submission whose length differs from the canonical order is rejected
/// outright with no partial score. An ID the test never issued simply fails
/// to match at its position.
pub fn score_ordering(test: &OrderingTest, submitted_ids: &[String]) -> Result<Score> {
    if submitted_ids.len() != test.original_order.len() {
        return Err(Error::OrderMismatch {
            submitted: submitted_ids.len(),
            expected: test.original_order.len(),
        });
    }

    let mut score = 0;
    for (id, expected) in submitted_ids.iter().zip(&test.original_order) {
        if test.answers.get(id) == Some(expected) {
            score += 1;
        }
    }
    Ok(Score {
        score,
        total: test.original_order.len() as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::shuffle::build_ordering;
    use crate::types::ShuffleMode;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn case_insensitive_field_match() {
        let parsed = parse("The capital of France is [Paris].");
        let score = score_fields(&parsed, &answers(&[("q1", "paris")]));
        assert_eq!(score, Score { score: 1, total: 1 });
    }

    #[test]
    fn missing_answers_count_as_incorrect() {
        let parsed = parse("[one] and [two] and [three]");
        let score = score_fields(&parsed, &answers(&[("q2", "two")]));
        assert_eq!(score, Score { score: 1, total: 3 });
    }

    #[test]
    fn feedback_reveals_correct_answer() {
        let parsed = parse("[one] and [two]");
        let feedback = grade_fields(&parsed, &answers(&[("q1", " ONE "), ("q2", "wrong")]));
        assert_eq!(feedback.len(), 2);
        assert!(feedback[0].is_correct);
        assert!(!feedback[1].is_correct);
        assert_eq!(feedback[1].correct_answer, "two");
        assert_eq!(feedback[1].submitted, "wrong");
    }

    #[test]
    fn ordering_in_canonical_order_scores_full() {
        let mut rng = StdRng::seed_from_u64(11);
        let test = build_ordering("A. B. C.", ShuffleMode::Sentences, &mut rng);

        // Resolve each canonical unit back to the ID it was presented under.
        let ids: Vec<String> = test
            .original_order
            .iter()
            .map(|unit| {
                test.items
                    .iter()
                    .find(|u| &u.content == unit)
                    .expect("unit present")
                    .id
                    .clone()
            })
            .collect();

        let score = score_ordering(&test, &ids).unwrap();
        assert_eq!(score, Score { score: 3, total: 3 });
    }

    #[test]
    fn ordering_partial_match_scores_matching_positions() {
        let mut rng = StdRng::seed_from_u64(11);
        let test = build_ordering("A. B. C.", ShuffleMode::Sentences, &mut rng);

        let id_of = |unit: &str| {
            test.items
                .iter()
                .find(|u| u.content == unit)
                .expect("unit present")
                .id
                .clone()
        };

        // Only the last position holds its canonical unit.
        let ids = vec![id_of("B."), id_of("A."), id_of("C.")];
        let score = score_ordering(&test, &ids).unwrap();
        assert_eq!(score, Score { score: 1, total: 3 });
    }

    #[test]
    fn ordering_length_mismatch_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2);
        let test = build_ordering("A. B. C.", ShuffleMode::Sentences, &mut rng);
        let short = vec!["item_1".to_string(), "item_2".to_string()];
        assert_eq!(
            score_ordering(&test, &short),
            Err(Error::OrderMismatch {
                submitted: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn unknown_ids_fail_to_match_without_error() {
        let mut rng = StdRng::seed_from_u64(5);
        let test = build_ordering("A. B. C.", ShuffleMode::Sentences, &mut rng);
        let bogus = vec![
            "item_9".to_string(),
            "item_8".to_string(),
            "item_7".to_string(),
        ];
        let score = score_ordering(&test, &bogus).unwrap();
        assert_eq!(score, Score { score: 0, total: 3 });
    }

    #[test]
    fn evaluate_rejects_mismatched_submission_shape() {
        let parsed = ParsedStructure::Fields(parse("[a]"));
        let submission = Submission::Ordering(vec!["item_1".to_string()]);
        assert_eq!(evaluate(&parsed, &submission), Err(Error::SubmissionShape));
    }
}
