//! The combination lock opened by the ordering puzzle's values.

use crate::value::{WordValue, word_value};
use serde::Serialize;
use tracing::info;

/// Expected values, one per target word, in the original target order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinationLock {
    expected: Vec<WordValue>,
}

impl CombinationLock {
    pub fn from_words<S: AsRef<str>>(target: &[S]) -> Self {
        Self {
            expected: target.iter().map(|w| word_value(w.as_ref())).collect(),
        }
    }

    pub fn expected(&self) -> &[WordValue] {
        &self.expected
    }

    /// Per-position comparison within [`crate::value::VALUE_TOLERANCE`].
    pub fn check(&self, submitted: &[f64]) -> bool {
        let open = submitted.len() == self.expected.len()
            && self
                .expected
                .iter()
                .zip(submitted)
                .all(|(expected, got)| expected.matches(*got));
        if open {
            info!("combination accepted");
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_in_target_order_only() {
        let lock = CombinationLock::from_words(&["Arbre", "Nazareth", "Alea", "Nodal"]);
        assert!(lock.check(&[4.5, 16.5, 17.0, 20.0]));
        assert!(lock.check(&[4.5004, 16.4996, 17.0, 20.0]));
        assert!(!lock.check(&[16.5, 4.5, 17.0, 20.0]));
        assert!(!lock.check(&[4.5, 16.5, 17.0]));
    }
}
