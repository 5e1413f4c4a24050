//! The tile-placement state machine.
//!
//! Tiles live in exactly one of three pools:
//!
//! ```text
//! source   unordered, unbounded        {t3, t0, t7, ...}
//! staging  N ordered slots             [t1, _, _, t4, _, _]
//!             promote ↓   ↑ demote     (same column only)
//! final    N ordered slots             [_, _, _, t2, _, _]
//! ```
//!
//! `index` (tile → placement) is the authority; the three pool vectors are
//! kept eagerly in sync with it. Every operation either applies fully and
//! notifies, or is rejected with no change and no notification.

use crate::error::{MoveRejection, PuzzleError, Row};
use crate::observer::{Listeners, SubscriptionId};
use crate::success::{TargetSequence, evaluate};
use crate::tile::{Tile, TileId, TileRegistry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// One of the three locations a tile can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pool {
    Source,
    Staging,
    Final,
}

impl From<Row> for Pool {
    fn from(row: Row) -> Self {
        match row {
            Row::Staging => Self::Staging,
            Row::Final => Self::Final,
        }
    }
}

/// Where one tile currently sits. `slot` is `None` exactly for the source pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pool: Pool,
    pub slot: Option<usize>,
}

impl Placement {
    pub const SOURCE: Self = Self {
        pool: Pool::Source,
        slot: None,
    };

    fn slotted(row: Row, slot: usize) -> Self {
        Self {
            pool: row.into(),
            slot: Some(slot),
        }
    }
}

/// Result of an accepted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// State changed and listeners were notified.
    Applied,
    /// The tile was already where it was asked to go.
    Unchanged,
}

/// A tile resolved against its placement, as seen by listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileView {
    pub id: TileId,
    pub word: String,
    pub normalized: String,
    pub location: Pool,
    pub index: Option<usize>,
}

/// An owned copy of the three pools. Mutating it never touches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementSnapshot {
    pub source: Vec<TileView>,
    pub staging: Vec<Option<TileView>>,
    #[serde(rename = "final")]
    pub final_row: Vec<Option<TileView>>,
    pub solved: bool,
}

impl PlacementSnapshot {
    /// Every tile in the snapshot, pool by pool.
    pub fn tiles(&self) -> impl Iterator<Item = &TileView> {
        self.source
            .iter()
            .chain(self.staging.iter().flatten())
            .chain(self.final_row.iter().flatten())
    }

    /// Display words of the final row, `None` for empty slots.
    pub fn final_words(&self) -> Vec<Option<&str>> {
        self.final_row
            .iter()
            .map(|slot| slot.as_ref().map(|tile| tile.word.as_str()))
            .collect()
    }
}

/// Events delivered to placement listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "snapshot", rename_all = "snake_case")]
pub enum PlacementEvent {
    /// Sent after every applied mutation.
    StateChanged(PlacementSnapshot),
    /// Sent once when the final row starts matching the target.
    Solved(PlacementSnapshot),
}

/// One puzzle instance: tiles, pools, success tracking and listeners.
#[derive(Debug)]
pub struct PlacementEngine {
    target: TargetSequence,
    rng: StdRng,
    registry: TileRegistry,
    index: BTreeMap<TileId, Placement>,
    source: Vec<TileId>,
    staging: Vec<Option<TileId>>,
    final_row: Vec<Option<TileId>>,
    success_achieved: bool,
    listeners: Listeners<PlacementEvent>,
}

impl PlacementEngine {
    /// Build a puzzle with an entropy-seeded shuffle.
    pub fn new<W, T>(words: &[W], target: &[T]) -> Result<Self, PuzzleError>
    where
        W: AsRef<str>,
        T: AsRef<str>,
    {
        Self::with_rng(words, target, StdRng::from_entropy())
    }

    /// Build a puzzle whose shuffles are reproducible from `seed`.
    pub fn with_seed<W, T>(words: &[W], target: &[T], seed: u64) -> Result<Self, PuzzleError>
    where
        W: AsRef<str>,
        T: AsRef<str>,
    {
        Self::with_rng(words, target, StdRng::seed_from_u64(seed))
    }

    fn with_rng<W, T>(words: &[W], target: &[T], mut rng: StdRng) -> Result<Self, PuzzleError>
    where
        W: AsRef<str>,
        T: AsRef<str>,
    {
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        let target = TargetSequence::new(target)?;
        if target.len() > words.len() {
            return Err(PuzzleError::TargetTooLong {
                target: target.len(),
                available: words.len(),
            });
        }

        let registry = TileRegistry::initialize_with(words, 0, &mut rng)?;
        registry.assign(target.words())?;

        let slots = target.len();
        let mut engine = Self {
            target,
            rng,
            registry,
            index: BTreeMap::new(),
            source: Vec::new(),
            staging: vec![None; slots],
            final_row: vec![None; slots],
            success_achieved: false,
            listeners: Listeners::default(),
        };
        engine.gather_into_source();
        Ok(engine)
    }

    // ── Queries ──

    /// Number of staging slots, equal to the number of final slots.
    pub fn slot_count(&self) -> usize {
        self.target.len()
    }

    pub fn target(&self) -> &TargetSequence {
        &self.target
    }

    pub fn tile_by_id(&self, id: TileId) -> Option<&Tile> {
        self.registry.tile_by_id(id)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.registry.tiles()
    }

    pub fn placement_of(&self, id: TileId) -> Option<Placement> {
        self.index.get(&id).copied()
    }

    /// Tile ids in the source pool, in display order.
    pub fn source(&self) -> &[TileId] {
        &self.source
    }

    pub fn staging(&self) -> &[Option<TileId>] {
        &self.staging
    }

    pub fn final_row(&self) -> &[Option<TileId>] {
        &self.final_row
    }

    /// Whether the final row currently matches the target.
    pub fn is_solved(&self) -> bool {
        evaluate(
            self.final_row.iter().map(|slot| {
                slot.and_then(|id| self.registry.tile_by_id(id))
                    .map(Tile::normalized)
            }),
            &self.target,
        )
    }

    /// Whether the current success episode has already been reported.
    pub fn success_achieved(&self) -> bool {
        self.success_achieved
    }

    pub fn snapshot(&self) -> PlacementSnapshot {
        let view = |id: TileId| -> Option<TileView> {
            let tile = self.registry.tile_by_id(id)?;
            let placement = self.index.get(&id).copied().unwrap_or(Placement::SOURCE);
            Some(TileView {
                id,
                word: tile.word().to_string(),
                normalized: tile.normalized().to_string(),
                location: placement.pool,
                index: placement.slot,
            })
        };

        PlacementSnapshot {
            source: self.source.iter().filter_map(|id| view(*id)).collect(),
            staging: self.staging.iter().map(|s| s.and_then(view)).collect(),
            final_row: self.final_row.iter().map(|s| s.and_then(view)).collect(),
            solved: self.is_solved(),
        }
    }

    // ── Subscriptions ──

    pub fn subscribe(&mut self, listener: impl FnMut(&PlacementEvent) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // ── Operations ──

    /// Return a tile to the source pool from wherever it is.
    pub fn move_to_source(&mut self, id: TileId) -> Result<MoveOutcome, MoveRejection> {
        let current = self.known(id)?;
        if current.pool == Pool::Source {
            return Ok(MoveOutcome::Unchanged);
        }

        self.detach(id, current);
        self.source.push(id);
        self.index.insert(id, Placement::SOURCE);
        debug!(tile = %id, from = ?current.pool, "tile returned to source");
        self.after_mutation();
        Ok(MoveOutcome::Applied)
    }

    /// Put a tile into a staging slot; `None` picks the lowest empty slot.
    ///
    /// An occupied slot is never overwritten.
    pub fn place_in_staging(
        &mut self,
        id: TileId,
        slot: Option<usize>,
    ) -> Result<MoveOutcome, MoveRejection> {
        let current = self.known(id)?;
        let slot = match slot {
            Some(slot) => self.check_slot(Row::Staging, slot)?,
            None => self
                .staging
                .iter()
                .position(Option::is_none)
                .ok_or_else(|| reject(MoveRejection::NoEmptySlot))?,
        };

        match self.staging[slot] {
            Some(occupant) if occupant == id => return Ok(MoveOutcome::Unchanged),
            Some(occupant) => {
                return Err(reject(MoveRejection::SlotOccupied {
                    row: Row::Staging,
                    slot,
                    occupant,
                }));
            }
            None => {}
        }

        self.detach(id, current);
        self.staging[slot] = Some(id);
        self.index.insert(id, Placement::slotted(Row::Staging, slot));
        debug!(tile = %id, slot, from = ?current.pool, "tile placed in staging");
        self.after_mutation();
        Ok(MoveOutcome::Applied)
    }

    /// Move the tile in `staging[slot]` down to `final[slot]`.
    pub fn promote(&mut self, slot: usize) -> Result<MoveOutcome, MoveRejection> {
        self.shift(Row::Staging, Row::Final, slot)
    }

    /// Move the tile in `final[column]` back up to `staging[column]`.
    pub fn demote(&mut self, column: usize) -> Result<MoveOutcome, MoveRejection> {
        self.shift(Row::Final, Row::Staging, column)
    }

    /// Rebuild the tile set and drop one matching tile into each final slot.
    ///
    /// Used to restore a previously solved puzzle. The restored episode
    /// counts as already reported, so no `Solved` event is sent.
    pub fn complete_immediately(&mut self) -> Result<(), PuzzleError> {
        self.reinitialize();
        let assigned = self.registry.assign(self.target.words())?;

        for (column, id) in assigned.into_iter().enumerate() {
            self.source.retain(|candidate| *candidate != id);
            self.final_row[column] = Some(id);
            self.index.insert(id, Placement::slotted(Row::Final, column));
        }
        self.success_achieved = true;
        debug!("puzzle restored to its solved arrangement");
        self.notify_state();
        Ok(())
    }

    /// Reshuffle a fresh tile set into the source pool and forget success.
    pub fn reset(&mut self) {
        self.reinitialize();
        self.success_achieved = false;
        debug!("puzzle reset");
        self.notify_state();
    }

    // ── Internals ──

    fn known(&self, id: TileId) -> Result<Placement, MoveRejection> {
        self.index
            .get(&id)
            .copied()
            .ok_or_else(|| reject(MoveRejection::UnknownTile(id)))
    }

    fn row(&self, row: Row) -> &[Option<TileId>] {
        match row {
            Row::Staging => &self.staging,
            Row::Final => &self.final_row,
        }
    }

    fn row_mut(&mut self, row: Row) -> &mut Vec<Option<TileId>> {
        match row {
            Row::Staging => &mut self.staging,
            Row::Final => &mut self.final_row,
        }
    }

    fn check_slot(&self, row: Row, slot: usize) -> Result<usize, MoveRejection> {
        let len = self.row(row).len();
        if slot < len {
            Ok(slot)
        } else {
            Err(reject(MoveRejection::SlotOutOfRange { row, slot, len }))
        }
    }

    fn shift(&mut self, from: Row, to: Row, column: usize) -> Result<MoveOutcome, MoveRejection> {
        let column = self.check_slot(from, column)?;
        let Some(id) = self.row(from)[column] else {
            return Err(reject(MoveRejection::EmptySlot { row: from, slot: column }));
        };
        if let Some(occupant) = self.row(to)[column] {
            return Err(reject(MoveRejection::SlotOccupied {
                row: to,
                slot: column,
                occupant,
            }));
        }

        self.row_mut(from)[column] = None;
        self.row_mut(to)[column] = Some(id);
        self.index.insert(id, Placement::slotted(to, column));
        debug!(tile = %id, column, %from, %to, "tile shifted between rows");
        self.after_mutation();
        Ok(MoveOutcome::Applied)
    }

    /// Clear `id` from the pool recorded in `current`.
    fn detach(&mut self, id: TileId, current: Placement) {
        match (current.pool, current.slot) {
            (Pool::Source, _) => self.source.retain(|candidate| *candidate != id),
            (Pool::Staging, Some(slot)) => self.staging[slot] = None,
            (Pool::Final, Some(slot)) => self.final_row[slot] = None,
            (_, None) => {}
        }
    }

    fn reinitialize(&mut self) {
        self.registry = self.registry.reshuffle(&mut self.rng);
        self.gather_into_source();
    }

    fn gather_into_source(&mut self) {
        self.index.clear();
        self.source.clear();
        self.staging.iter_mut().for_each(|slot| *slot = None);
        self.final_row.iter_mut().for_each(|slot| *slot = None);
        for tile in self.registry.tiles() {
            self.source.push(tile.id());
            self.index.insert(tile.id(), Placement::SOURCE);
        }
    }

    fn notify_state(&mut self) {
        debug_assert!(self.is_consistent());
        let snapshot = self.snapshot();
        self.listeners.emit(&PlacementEvent::StateChanged(snapshot));
    }

    fn after_mutation(&mut self) {
        self.notify_state();

        if !self.is_solved() {
            self.success_achieved = false;
            return;
        }
        if self.success_achieved {
            return;
        }

        self.success_achieved = true;
        info!("final row matches the target sequence");
        let snapshot = self.snapshot();
        self.listeners.emit(&PlacementEvent::Solved(snapshot));
    }

    /// Pools and index agree, and every tile sits in exactly one place.
    fn is_consistent(&self) -> bool {
        let mut seen: BTreeMap<TileId, Placement> = BTreeMap::new();
        let pools = self
            .source
            .iter()
            .map(|id| (*id, Placement::SOURCE))
            .chain(self.staging.iter().enumerate().filter_map(|(slot, id)| {
                id.map(|id| (id, Placement::slotted(Row::Staging, slot)))
            }))
            .chain(self.final_row.iter().enumerate().filter_map(|(slot, id)| {
                id.map(|id| (id, Placement::slotted(Row::Final, slot)))
            }));
        for (id, placement) in pools {
            if seen.insert(id, placement).is_some() {
                return false;
            }
        }

        seen == self.index
            && self.index.len() == self.registry.len()
            && self.staging.len() == self.target.len()
            && self.final_row.len() == self.target.len()
    }
}

fn reject(rejection: MoveRejection) -> MoveRejection {
    debug!(%rejection, "move rejected");
    rejection
}
