//! The puzzle content the experience ships with.

use crate::sigil::Sigil;

pub const KEY_PHRASE: &str = "atlas";

pub const ALL_WORDS: &[&str] = &[
    "Arbre", "Nazareth", "Nodal", "Alea", "Ymagier", "Anchor", "Pencil", "Heater", "Moon",
    "Siella", "Lingerie", "Western",
];

pub const TARGET_SEQUENCE: &[&str] = &["Arbre", "Nazareth", "Alea", "Nodal", "Ymagier", "Anchor"];

/// `(word, icon, label)` for each sigil, in unlock order.
pub const LOCK_WORDS: &[(&str, &str, &str)] = &[
    ("ember", "🔥", "Ember Sigil"),
    ("tide", "🌊", "Tide Sigil"),
    ("gale", "💨", "Gale Sigil"),
    ("stone", "🪨", "Stone Sigil"),
];

pub fn default_sigils() -> Vec<Sigil> {
    LOCK_WORDS
        .iter()
        .map(|(word, icon, label)| Sigil::new(word, icon, label))
        .collect()
}
