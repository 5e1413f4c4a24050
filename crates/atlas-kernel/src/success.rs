//! Target sequences and the success check over the final row.

use crate::error::PuzzleError;
use crate::normalize::normalize_word;
use serde::Serialize;

/// The winning arrangement: `N` normalized words in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSequence {
    words: Vec<String>,
}

impl TargetSequence {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::EmptyTarget);
        }
        Ok(Self {
            words: words.iter().map(|w| normalize_word(w.as_ref())).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// True iff every final slot is filled and matches the target in order.
///
/// `final_row` yields the normalized word in each slot, `None` for empty.
/// A row of the wrong length never matches.
pub fn evaluate<'a, I>(final_row: I, target: &TargetSequence) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let row: Vec<Option<&str>> = final_row.into_iter().collect();
    row.len() == target.len()
        && row
            .iter()
            .zip(&target.words)
            .all(|(slot, expected)| *slot == Some(expected.as_str()))
}
