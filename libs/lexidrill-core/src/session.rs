//! Review session sequencing.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::VocabItem;

/// Position state for one review walkthrough.
///
/// Persisted in the caller's session store between requests and cleared on
/// completion. In practice mode answers are still evaluated, but item
/// scheduling state is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSessionState {
    pub items: Vec<VocabItem>,
    pub index: usize,
    pub practice_mode: bool,
}

/// The next step of a walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionNext<'a> {
    Item(&'a VocabItem),
    /// Terminal signal, not a failure. The flag only affects what the
    /// caller displays.
    Complete { practice: bool },
}

impl ReviewSessionState {
    /// Start a walkthrough over the given items.
    pub fn new(items: Vec<VocabItem>, practice_mode: bool) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        Ok(Self {
            items,
            index: 0,
            practice_mode,
        })
    }

    /// The item at the current position, or the completion signal.
    pub fn current(&self) -> SessionNext<'_> {
        match self.items.get(self.index) {
            Some(item) => SessionNext::Item(item),
            None => SessionNext::Complete {
                practice: self.practice_mode,
            },
        }
    }

    /// Advance one position. Called after every submission, right or wrong.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.items.len()
    }

    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.index)
    }
}
