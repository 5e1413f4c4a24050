//! Error types for Atlas kernel operations.
//!
//! Construction failures are caller precondition violations and surface as
//! [`PuzzleError`]. Refused moves are expected input and surface as
//! [`MoveRejection`] / [`ReorderRejection`], never as panics.

use crate::ordering::EntryId;
use crate::tile::TileId;

/// A puzzle instance could not be built from the given words.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// No words were supplied, so there are no tiles to place.
    #[error("word list is empty")]
    EmptyWordList,

    /// The target sequence has no words.
    #[error("target sequence is empty")]
    EmptyTarget,

    /// The target asks for more tiles than there are words.
    #[error("target sequence needs {target} tiles but only {available} words were supplied")]
    TargetTooLong { target: usize, available: usize },

    /// A target word has no distinct tile left to match it.
    #[error("target word {word:?} has no matching tile")]
    MissingTargetWord { word: String },
}

/// Which slotted pool an operation addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    Staging,
    Final,
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Staging => write!(f, "staging"),
            Self::Final => write!(f, "final"),
        }
    }
}

/// A placement operation was refused; engine state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("unknown tile: {0}")]
    UnknownTile(TileId),

    #[error("{row} slot {slot} is out of range (row has {len} slots)")]
    SlotOutOfRange { row: Row, slot: usize, len: usize },

    #[error("no empty staging slot")]
    NoEmptySlot,

    #[error("{row} slot {slot} is occupied by {occupant}")]
    SlotOccupied {
        row: Row,
        slot: usize,
        occupant: TileId,
    },

    #[error("{row} slot {slot} is empty")]
    EmptySlot { row: Row, slot: usize },
}

/// A reorder request was not a permutation of the current entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderRejection {
    #[error("expected {expected} entries, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("unknown entry: {0}")]
    UnknownEntry(EntryId),

    #[error("duplicate entry: {0}")]
    DuplicateEntry(EntryId),

    /// No entry left whose normalized word matches.
    #[error("no entry for word {word:?}")]
    UnknownWord { word: String },

    #[error("position {index} is out of range (order has {len} entries)")]
    PositionOutOfRange { index: usize, len: usize },
}
