//! The passphrase gate in front of the puzzles.

use crate::normalize::normalize_word;
use serde::Serialize;
use tracing::info;

/// Result of one passphrase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOutcome {
    /// Nothing was offered.
    Empty,
    Opened,
    Refused,
}

impl GateOutcome {
    pub fn is_open(self) -> bool {
        self == Self::Opened
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseGate {
    phrase: String,
}

impl PassphraseGate {
    pub fn new(phrase: &str) -> Self {
        Self {
            phrase: normalize_word(phrase),
        }
    }

    pub fn attempt(&self, input: &str) -> GateOutcome {
        let offered = normalize_word(input);
        if offered.is_empty() {
            GateOutcome::Empty
        } else if offered == self.phrase {
            info!("gate opened");
            GateOutcome::Opened
        } else {
            GateOutcome::Refused
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_after_normalization() {
        let gate = PassphraseGate::new("atlas");
        assert_eq!(gate.attempt("  ÁTLAS "), GateOutcome::Opened);
        assert_eq!(gate.attempt("atlases"), GateOutcome::Refused);
        assert_eq!(gate.attempt("   "), GateOutcome::Empty);
        assert!(gate.attempt("Atlas").is_open());
    }
}
