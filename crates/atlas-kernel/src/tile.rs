//! Tiles and the registry that owns one puzzle instance's tile set.
//!
//! A registry is built in one batch and never edited; reinitializing a
//! puzzle replaces the whole registry. Ids keep counting up across
//! generations so a stale id from before a reset can never alias a new tile.

use crate::error::PuzzleError;
use crate::normalize::normalize_word;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Stable identity of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

/// One puzzle piece wrapping a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    id: TileId,
    word: String,
    normalized: String,
}

impl Tile {
    fn new(id: TileId, word: String) -> Self {
        let normalized = normalize_word(&word);
        Self {
            id,
            word,
            normalized,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    /// Display form, exactly as supplied.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Comparison key, computed once at creation.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// The tile set of one puzzle instance, in shuffled display order.
#[derive(Debug, Clone)]
pub struct TileRegistry {
    first_id: u32,
    tiles: Vec<Tile>,
}

impl TileRegistry {
    /// Build a freshly shuffled tile set, one tile per word.
    pub fn initialize<S: AsRef<str>>(words: &[S]) -> Result<Self, PuzzleError> {
        Self::initialize_with(words, 0, &mut rand::thread_rng())
    }

    /// Build a tile set with ids starting at `first_id`, shuffled by `rng`.
    pub fn initialize_with<S, R>(
        words: &[S],
        first_id: u32,
        rng: &mut R,
    ) -> Result<Self, PuzzleError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        let words = words.iter().map(|w| w.as_ref().to_string()).collect();
        Ok(Self::shuffled(words, first_id, rng))
    }

    /// The next generation: the same words, reshuffled, with ids continuing
    /// from [`Self::next_id`].
    pub fn reshuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let words = self.tiles.iter().map(|tile| tile.word.clone()).collect();
        Self::shuffled(words, self.next_id(), rng)
    }

    fn shuffled<R: Rng + ?Sized>(mut words: Vec<String>, first_id: u32, rng: &mut R) -> Self {
        words.shuffle(rng);
        let tiles = words
            .into_iter()
            .zip(first_id..)
            .map(|(word, id)| Tile::new(TileId(id), word))
            .collect();
        Self { first_id, tiles }
    }

    pub fn tile_by_id(&self, id: TileId) -> Option<&Tile> {
        let offset = id.0.checked_sub(self.first_id)?;
        self.tiles.get(offset as usize)
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.tile_by_id(id).is_some()
    }

    /// Tiles in shuffled creation order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// First id the next generation of tiles should use.
    pub fn next_id(&self) -> u32 {
        self.first_id + self.tiles.len() as u32
    }

    /// Assign one distinct tile to each target word, first unused match wins.
    ///
    /// Returns the missing word if any target word cannot be covered.
    pub fn assign<'a, I>(&self, targets: I) -> Result<Vec<TileId>, PuzzleError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut used = vec![false; self.tiles.len()];
        let mut assigned = Vec::new();
        for target in targets {
            let slot = self
                .tiles
                .iter()
                .enumerate()
                .find(|(i, tile)| !used[*i] && tile.normalized == target)
                .map(|(i, _)| i)
                .ok_or_else(|| PuzzleError::MissingTargetWord {
                    word: target.to_string(),
                })?;
            used[slot] = true;
            assigned.push(self.tiles[slot].id);
        }
        Ok(assigned)
    }
}
