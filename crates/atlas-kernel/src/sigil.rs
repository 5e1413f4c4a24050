//! The sigil lock: a fixed sequence of words typed one after another.

use crate::normalize::normalize_word;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One sigil in the lock sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sigil {
    pub word: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub label: String,
}

impl Sigil {
    pub fn new(word: &str, icon: &str, label: &str) -> Self {
        Self {
            word: word.to_string(),
            icon: icon.to_string(),
            label: label.to_string(),
        }
    }
}

/// Display state of one sigil relative to the progress index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SigilState {
    Unlocked,
    Active,
    Locked,
}

/// Result of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SigilOutcome {
    /// Every sigil is already unlocked; the guess was ignored.
    AlreadyComplete,
    Empty,
    Wrong,
    /// The sigil at `index - 1` was unlocked and `index` is now active.
    Advanced { index: usize },
    /// The last sigil was unlocked.
    Completed,
}

#[derive(Debug, Clone)]
pub struct SigilLock {
    sigils: Vec<Sigil>,
    index: usize,
}

impl SigilLock {
    pub fn new(sigils: Vec<Sigil>) -> Self {
        Self { sigils, index: 0 }
    }

    /// Resume from a persisted index, clamped into `[0, len]`.
    pub fn restore(&mut self, index: usize) {
        self.index = index.min(self.sigils.len());
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.sigils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sigils.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.sigils.len()
    }

    pub fn sigils(&self) -> &[Sigil] {
        &self.sigils
    }

    /// The sigil waiting to be typed, if any.
    pub fn active(&self) -> Option<&Sigil> {
        self.sigils.get(self.index)
    }

    pub fn states(&self) -> Vec<SigilState> {
        (0..self.sigils.len())
            .map(|i| match i.cmp(&self.index) {
                std::cmp::Ordering::Less => SigilState::Unlocked,
                std::cmp::Ordering::Equal => SigilState::Active,
                std::cmp::Ordering::Greater => SigilState::Locked,
            })
            .collect()
    }

    pub fn guess(&mut self, input: &str) -> SigilOutcome {
        let Some(active) = self.active() else {
            return SigilOutcome::AlreadyComplete;
        };

        let guess = normalize_word(input);
        if guess.is_empty() {
            return SigilOutcome::Empty;
        }
        if guess != normalize_word(&active.word) {
            return SigilOutcome::Wrong;
        }

        self.index += 1;
        info!(index = self.index, total = self.sigils.len(), "sigil unlocked");
        if self.is_complete() {
            SigilOutcome::Completed
        } else {
            SigilOutcome::Advanced { index: self.index }
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock() -> SigilLock {
        SigilLock::new(vec![
            Sigil::new("ember", "🔥", "Ember Sigil"),
            Sigil::new("tide", "🌊", "Tide Sigil"),
        ])
    }

    #[test]
    fn guesses_advance_in_order() {
        let mut lock = lock();
        assert_eq!(lock.guess("tide"), SigilOutcome::Wrong);
        assert_eq!(lock.guess(""), SigilOutcome::Empty);
        assert_eq!(lock.guess(" Émber"), SigilOutcome::Advanced { index: 1 });
        assert_eq!(
            lock.states(),
            vec![SigilState::Unlocked, SigilState::Active]
        );
        assert_eq!(lock.guess("TIDE"), SigilOutcome::Completed);
        assert!(lock.is_complete());
        assert_eq!(lock.guess("tide"), SigilOutcome::AlreadyComplete);
        assert_eq!(lock.index(), 2);
    }

    #[test]
    fn restore_clamps_and_reset_rewinds() {
        let mut lock = lock();
        lock.restore(9);
        assert_eq!(lock.index(), 2);
        assert!(lock.active().is_none());

        lock.reset();
        assert_eq!(lock.index(), 0);
        assert_eq!(
            lock.states(),
            vec![SigilState::Active, SigilState::Locked]
        );
    }
}
