//! The companion reordering puzzle.
//!
//! One ordered list of entries, each carrying its word value. There is no
//! pool concept and no success condition here: the combination lock compares
//! submitted numbers against the values in the original target order.

use crate::error::ReorderRejection;
use crate::normalize::normalize_word;
use crate::observer::{Listeners, SubscriptionId};
use crate::value::{WordValue, word_value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Stable identity of one ordering entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entry-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: EntryId,
    word: String,
    normalized: String,
    value: WordValue,
}

/// One entry as reported by [`OrderingEngine::current_order`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub index: usize,
    pub id: EntryId,
    pub word: String,
    pub normalized: String,
    pub value: WordValue,
}

/// Sent after every accepted reorder or reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderChanged {
    pub order: Vec<OrderSummary>,
}

#[derive(Debug)]
pub struct OrderingEngine {
    seed: Vec<Entry>,
    entries: Vec<Entry>,
    listeners: Listeners<OrderChanged>,
}

impl OrderingEngine {
    /// Seed entries from `words`, ids following the given order.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let seed: Vec<Entry> = words
            .iter()
            .zip(0u32..)
            .map(|(word, id)| {
                let word = word.as_ref().to_string();
                Entry {
                    id: EntryId(id),
                    normalized: normalize_word(&word),
                    value: word_value(&word),
                    word,
                }
            })
            .collect();
        Self {
            entries: seed.clone(),
            seed,
            listeners: Listeners::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }


    pub fn current_order(&self) -> Vec<OrderSummary> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| OrderSummary {
                index,
                id: entry.id,
                word: entry.word.clone(),
                normalized: entry.normalized.clone(),
                value: entry.value,
            })
            .collect()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&OrderChanged) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Replace the order with a permutation of the current ids.
    pub fn reorder(&mut self, order: &[EntryId]) -> Result<(), ReorderRejection> {
        if order.len() != self.entries.len() {
            return Err(ReorderRejection::LengthMismatch {
                expected: self.entries.len(),
                actual: order.len(),
            });
        }

        let mut seen = BTreeSet::new();
        let mut next = Vec::with_capacity(order.len());
        for id in order {
            if !seen.insert(*id) {
                return Err(ReorderRejection::DuplicateEntry(*id));
            }
            let entry = self
                .entries
                .iter()
                .find(|entry| entry.id == *id)
                .ok_or(ReorderRejection::UnknownEntry(*id))?;
            next.push(entry.clone());
        }

        self.entries = next;
        debug!(order = ?self.ids(), "ordering changed");
        self.notify();
        Ok(())
    }

    /// Reorder by words instead of ids. Repeated words take the matching
    /// entries in their current order, each entry used once.
    pub fn reorder_by_words<S: AsRef<str>>(
        &mut self,
        words: &[S],
    ) -> Result<(), ReorderRejection> {
        let mut used = BTreeSet::new();
        let mut order = Vec::with_capacity(words.len());
        for word in words {
            let key = normalize_word(word.as_ref());
            let entry = self
                .entries
                .iter()
                .find(|entry| entry.normalized == key && !used.contains(&entry.id))
                .ok_or_else(|| ReorderRejection::UnknownWord {
                    word: word.as_ref().to_string(),
                })?;
            used.insert(entry.id);
            order.push(entry.id);
        }
        self.reorder(&order)
    }

    /// Move the entry at `from` so it ends up at `to`, shifting the rest.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), ReorderRejection> {
        let len = self.entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(ReorderRejection::PositionOutOfRange { index, len });
            }
        }

        let mut order = self.ids();
        let id = order.remove(from);
        order.insert(to, id);
        self.reorder(&order)
    }

    /// Put the entries back in their seed order.
    pub fn reset(&mut self) {
        self.entries = self.seed.clone();
        debug!("ordering reset");
        self.notify();
    }

    fn notify(&mut self) {
        let event = OrderChanged {
            order: self.current_order(),
        };
        self.listeners.emit(&event);
    }
}
