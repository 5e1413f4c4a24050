//! Deterministic word values ("charges") for the ordering puzzle.
//!
//! A word's value is a positional weighted sum over its normalized form,
//! reduced into `[0, 23.5)`. The combination lock compares submitted numbers
//! against these values, so the arithmetic here must not drift.

use crate::normalize::normalize_word;
use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Modulus of the value reduction. Non-integer on purpose; do not round it.
pub const VALUE_MODULUS: f64 = 23.5;

/// Weight offset: the character at position `i` is weighted `i + 7`.
pub const POSITION_WEIGHT_OFFSET: u64 = 7;

/// Tolerance used when comparing a submitted number with a value.
pub const VALUE_TOLERANCE: f64 = 0.0005;

/// An encoded word value in `[0, VALUE_MODULUS)`.
///
/// Whole values serialize as JSON integers, fractional ones as decimals
/// rounded to three places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WordValue(f64);

impl WordValue {
    pub fn as_f64(self) -> f64 {
        self.0
    }

    pub fn is_whole(self) -> bool {
        self.0.fract() == 0.0
    }

    /// Whether `candidate` is within [`VALUE_TOLERANCE`] of this value.
    pub fn matches(self, candidate: f64) -> bool {
        (self.0 - candidate).abs() <= VALUE_TOLERANCE
    }
}

impl Display for WordValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for WordValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_u64(self.0 as u64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Alphabet position of a lowercase Latin letter (`a` = 1 … `z` = 26).
fn alphabet_position(c: char) -> Option<u64> {
    c.is_ascii_lowercase().then(|| u64::from(c as u8 - b'a') + 1)
}

/// Raw weighted sum over the normalized word, before reduction.
///
/// Characters that are not `a..=z` add nothing but still advance the
/// position counter.
pub fn weighted_sum<T: Display + ?Sized>(word: &T) -> u64 {
    normalize_word(word)
        .chars()
        .enumerate()
        .filter_map(|(i, c)| {
            alphabet_position(c).map(|letter| letter * (i as u64 + POSITION_WEIGHT_OFFSET))
        })
        .sum()
}

fn reduce(sum: f64) -> f64 {
    let remainder = ((sum % VALUE_MODULUS) + VALUE_MODULUS) % VALUE_MODULUS;
    if remainder.fract() == 0.0 {
        remainder
    } else {
        (remainder * 1000.0).round() / 1000.0
    }
}

/// Encode a word into its value.
pub fn word_value<T: Display + ?Sized>(word: &T) -> WordValue {
    WordValue(reduce(weighted_sum(word) as f64))
}
