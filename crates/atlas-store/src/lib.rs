//! # atlas-store
//!
//! Persistence for the Atlas experience. The kernel is purely in-memory;
//! this crate snapshots the few flags needed to resume a session (gate open,
//! sigil progress, tile puzzle solved, ordering, combination open) and
//! hands them back so the caller can restore the engines.

pub mod progress;

pub use progress::{ProgressStore, ProgressStoreError, update_progress};
