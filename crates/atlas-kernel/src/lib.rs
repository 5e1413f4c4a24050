//! # Atlas Kernel
//!
//! The state machines behind the Atlas puzzle: a visitor opens a gate with
//! a passphrase, types a run of sigils, then arranges word tiles until the
//! final row spells the target sequence. A companion puzzle orders words
//! whose encoded values open a combination lock.
//!
//! Everything here is synchronous and in-memory. Rendering, gesture capture
//! and persistence belong to the caller, which drives the engines through
//! discrete operations and listens for owned snapshots.
//!
//! ## Architecture
//!
//! ```text
//! normalize_word        ← canonical comparison key (NFD, no diacritics, trim, lower)
//!     │
//! word_value            ← positional weighted sum mod 23.5
//!     │
//! TileRegistry          ← one shuffled batch of tiles per (re)initialization
//!     │
//! PlacementEngine       ← source / staging / final pools + listeners
//!     │
//! evaluate              ← final row vs TargetSequence, once per episode
//!
//! OrderingEngine        ← single ordered list + values (companion puzzle)
//! PassphraseGate, SigilLock, CombinationLock
//! ```

pub mod catalog;
mod diacritic;
pub mod error;
pub mod gate;
pub mod lock;
pub mod normalize;
pub mod observer;
pub mod ordering;
pub mod placement;
pub mod sigil;
pub mod success;
pub mod tile;
pub mod value;

pub use error::{MoveRejection, PuzzleError, ReorderRejection, Row};
pub use gate::{GateOutcome, PassphraseGate};
pub use lock::CombinationLock;
pub use normalize::normalize_word;
pub use observer::{Listeners, SubscriptionId};
pub use ordering::{EntryId, OrderChanged, OrderSummary, OrderingEngine};
pub use placement::{
    MoveOutcome, Placement, PlacementEngine, PlacementEvent, PlacementSnapshot, Pool, TileView,
};
pub use sigil::{Sigil, SigilLock, SigilOutcome, SigilState};
pub use success::{TargetSequence, evaluate};
pub use tile::{Tile, TileId, TileRegistry};
pub use value::{VALUE_MODULUS, VALUE_TOLERANCE, WordValue, word_value};
