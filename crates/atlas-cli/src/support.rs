use crate::config::PuzzleConfig;
use atlas_kernel::{OrderingEngine, PlacementEngine, SigilLock};
use atlas_store::{ProgressStore, update_progress};
use serde_json::Value;
use std::path::PathBuf;

pub const DEFAULT_PROGRESS_PATH: &str = ".atlas/progress.json";

/// Resolved global options shared by every command.
#[derive(Debug, Clone)]
pub struct Session {
    pub progress_path: PathBuf,
    pub config: PuzzleConfig,
    pub seed: Option<u64>,
}

impl Session {
    pub fn from_args(progress: String, config: Option<String>, seed: Option<u64>) -> Self {
        let config = match config {
            Some(path) => PuzzleConfig::load(&path).unwrap_or_else(|e| exit_with_error(e)),
            None => PuzzleConfig::default(),
        };
        Self {
            progress_path: PathBuf::from(progress),
            config,
            seed,
        }
    }

    pub fn load_progress_or_exit(&self) -> ProgressStore {
        ProgressStore::load(&self.progress_path).unwrap_or_else(|e| {
            exit_with_error(format!(
                "failed to load {}: {e}",
                self.progress_path.display()
            ))
        })
    }

    pub fn save_progress_or_exit(&self, store: &ProgressStore) {
        store.save(&self.progress_path).unwrap_or_else(|e| {
            exit_with_error(format!(
                "failed to save {}: {e}",
                self.progress_path.display()
            ))
        });
    }

    /// Load, mutate and save; the closure reports whether anything changed.
    pub fn update_progress_or_exit<T>(
        &self,
        mutator: impl FnOnce(&mut ProgressStore) -> (T, bool),
    ) -> T {
        update_progress(&self.progress_path, mutator).unwrap_or_else(|e| {
            exit_with_error(format!(
                "failed to update {}: {e}",
                self.progress_path.display()
            ))
        })
    }

    /// The tile and ordering puzzles stay hidden until the gate is open.
    pub fn require_gate_or_exit(&self, store: &ProgressStore) {
        if !store.gate_open {
            exit_with_error("the gate is closed; run `atlas gate <phrase>` first");
        }
    }

    pub fn placement_engine_or_exit(&self) -> PlacementEngine {
        let words = &self.config.words;
        let target = &self.config.target;
        let built = match self.seed {
            Some(seed) => PlacementEngine::with_seed(words, target, seed),
            None => PlacementEngine::new(words, target),
        };
        built.unwrap_or_else(|e| exit_with_error(format!("invalid tile puzzle: {e}")))
    }

    pub fn ordering_engine(&self) -> OrderingEngine {
        OrderingEngine::new(&self.config.ordering_words)
    }

    pub fn sigil_lock(&self, store: &ProgressStore) -> SigilLock {
        let mut lock = SigilLock::new(self.config.sigils.clone());
        lock.restore(store.sigil_index);
        lock
    }
}

pub fn exit_with_error(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}
