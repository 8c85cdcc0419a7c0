//! Markup parser for test content.
//!
//! # Format
//! Graded fields are embedded in free text, one or more per line:
//! ```text
//! The capital of France is [Paris].
//! #[Paris, London, Berlin] Paris# is the capital.
//! ```
//! `[answer]` becomes a fill-in blank; `#[a, b, c] answer#` becomes a
//! dropdown with the listed options. Bracket syntax matching neither
//! pattern stays literal text; parsing never fails.

use rand::Rng;
use regex::Regex;

use crate::shuffle;
use crate::types::{
    FieldKind, ParsedContent, ParsedField, ParsedStructure, Segment, ShuffleMode, TestContent,
};

/// Parse raw markup into literal spans and graded fields.
///
/// Deterministic: two parses of the same content yield identical field IDs
/// and answers, so scoring can re-parse the persisted markup instead of
/// holding on to the structure rendered earlier.
pub fn parse(content: &str) -> ParsedContent {
    let mut parser = ContentParser::new();
    ParsedContent {
        lines: content.lines().map(|line| parser.parse_line(line)).collect(),
    }
}

/// Parse a test into the structure its mode calls for: graded fields by
/// default, a reordering exercise when a shuffle flag is set.
pub fn parse_structure<R: Rng + ?Sized>(test: &TestContent, rng: &mut R) -> ParsedStructure {
    match test.mode() {
        ShuffleMode::None => ParsedStructure::Fields(parse(&test.content)),
        mode => ParsedStructure::Ordering(shuffle::build_ordering(&test.content, mode, rng)),
    }
}

/// Line tokenizer carrying an explicit question counter, so field IDs come
/// out `q1, q2, ...` in strict left-to-right, top-to-bottom discovery order
/// across the whole content.
pub struct ContentParser {
    dropdown: Regex,
    blank: Regex,
    next_question: usize,
}

/// A field match within one line, before an ID is assigned.
struct RawField {
    start: usize,
    end: usize,
    kind: FieldKind,
    correct_answer: String,
    options: Vec<String>,
}

impl Default for ContentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentParser {
    pub fn new() -> Self {
        Self {
            dropdown: Regex::new(r"#\s*\[([^\]]+)\]\s*([^#]+?)\s*#").expect("dropdown pattern"),
            blank: Regex::new(r"\[([^\]]+)\]").expect("blank pattern"),
            next_question: 1,
        }
    }

    fn next_id(&mut self) -> String {
        let id = format!("q{}", self.next_question);
        self.next_question += 1;
        id
    }

    /// Tokenize one line into literal spans and fields.
    ///
    /// The dropdown pattern is matched first: its option list is itself
    /// valid blank syntax, so blanks are only taken outside dropdown spans.
    pub fn parse_line(&mut self, line: &str) -> Vec<Segment> {
        let mut found: Vec<RawField> = self
            .dropdown
            .captures_iter(line)
            .map(|caps| {
                let m = caps.get(0).expect("whole match");
                RawField {
                    start: m.start(),
                    end: m.end(),
                    kind: FieldKind::Dropdown,
                    correct_answer: caps[2].trim().to_string(),
                    options: caps[1].split(',').map(|o| o.trim().to_string()).collect(),
                }
            })
            .collect();

        for caps in self.blank.captures_iter(line) {
            let m = caps.get(0).expect("whole match");
            let overlaps = found
                .iter()
                .any(|f| m.start() < f.end && f.start < m.end());
            if overlaps {
                continue;
            }
            found.push(RawField {
                start: m.start(),
                end: m.end(),
                kind: FieldKind::Blank,
                correct_answer: caps[1].trim().to_string(),
                options: Vec::new(),
            });
        }

        found.sort_by_key(|f| f.start);

        let mut segments = Vec::new();
        let mut cursor = 0;
        for field in found {
            if field.start > cursor {
                segments.push(Segment::Literal(line[cursor..field.start].to_string()));
            }
            segments.push(Segment::Field(ParsedField {
                id: self.next_id(),
                kind: field.kind,
                correct_answer: field.correct_answer,
                options: field.options,
            }));
            cursor = field.end;
        }
        if cursor < line.len() {
            segments.push(Segment::Literal(line[cursor..].to_string()));
        }
        segments
    }
}
