//! Persisted progress flags.
//!
//! One small JSON document records how far the visitor got:
//!
//! ```json
//! {"gateOpen":true,"sigilIndex":2,"tilesSolved":false,"ordering":["Alea","Arbre"]}
//! ```
//!
//! Unknown keys are ignored and missing keys fall back to "not yet done",
//! so an older or hand-edited file always loads.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Errors raised while loading or saving progress.
#[derive(Debug, thiserror::Error)]
pub enum ProgressStoreError {
    #[error("io error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("serialize error: {0}")]
    Serialize(String),
}

impl ProgressStoreError {
    fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Everything the experience remembers between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStore {
    #[serde(default)]
    pub gate_open: bool,
    #[serde(default)]
    pub sigil_index: usize,
    #[serde(default)]
    pub tiles_solved: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ordering: Vec<String>,
    #[serde(default)]
    pub combination_open: bool,
}

impl ProgressStore {
    /// Load progress; a missing file means nothing has been done yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProgressStoreError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no progress file; starting fresh");
                return Ok(Self::default());
            }
            Err(err) => return Err(ProgressStoreError::io(path, err)),
        };

        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&text).map_err(|e| ProgressStoreError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Persist progress via a temp file and rename.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProgressStoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ProgressStoreError::io(parent, e))?;
        }

        let payload = serde_json::to_string_pretty(self)
            .map_err(|e| ProgressStoreError::Serialize(e.to_string()))?;

        let tmp_path = tmp_write_path(path);
        let write_result = (|| -> Result<(), ProgressStoreError> {
            let file = File::create(&tmp_path).map_err(|e| ProgressStoreError::io(&tmp_path, e))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{payload}").map_err(|e| ProgressStoreError::io(&tmp_path, e))?;
            let file = writer
                .into_inner()
                .map_err(|e| ProgressStoreError::io(&tmp_path, e))?;
            file.sync_all()
                .map_err(|e| ProgressStoreError::io(&tmp_path, e))?;
            Ok(())
        })();

        if let Err(error) = write_result {
            let _ = fs::remove_file(&tmp_path);
            return Err(error);
        }

        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            ProgressStoreError::io(path, e)
        })?;
        debug!(path = %path.display(), "progress saved");
        Ok(())
    }

    /// Forget everything: the "start over" action.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether nothing has been recorded.
    pub fn is_fresh(&self) -> bool {
        *self == Self::default()
    }
}

/// Load, mutate and save in one step. The closure returns whether to save.
pub fn update_progress<T>(
    path: impl AsRef<Path>,
    mutator: impl FnOnce(&mut ProgressStore) -> (T, bool),
) -> Result<T, ProgressStoreError> {
    let path = path.as_ref();
    let mut store = ProgressStore::load(path)?;
    let (value, changed) = mutator(&mut store);
    if changed {
        store.save(path)?;
    }
    Ok(value)
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("progress.json"));
    name.push(format!(".tmp-{}-{unique}", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDirGuard {
        path: PathBuf,
    }

    impl TempDirGuard {
        fn new(prefix: &str) -> Self {
            let unique = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock should be after unix epoch")
                .as_nanos();
            let path = std::env::temp_dir().join(format!(
                "atlas-store-{prefix}-{}-{unique}",
                std::process::id()
            ));
            fs::create_dir_all(&path).expect("temp dir should be created");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TempDirGuard {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn missing_file_loads_fresh() {
        let tmp = TempDirGuard::new("missing");
        let store = ProgressStore::load(tmp.path().join("progress.json")).expect("fresh store");
        assert!(store.is_fresh());
    }

    #[test]
    fn save_then_load_keeps_flags() {
        let tmp = TempDirGuard::new("save");
        let path = tmp.path().join("nested/progress.json");
        let store = ProgressStore {
            gate_open: true,
            sigil_index: 3,
            tiles_solved: true,
            ordering: vec!["Alea".to_string(), "Arbre".to_string()],
            combination_open: false,
        };
        store.save(&path).expect("save should succeed");

        let loaded = ProgressStore::load(&path).expect("load should succeed");
        assert_eq!(loaded, store);

        let leftovers: Vec<_> = fs::read_dir(path.parent().expect("parent"))
            .expect("dir should list")
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn partial_documents_fill_defaults() {
        let tmp = TempDirGuard::new("partial");
        let path = tmp.path().join("progress.json");
        fs::write(&path, r#"{"gateOpen":true,"legacyFlag":1}"#).expect("write");

        let loaded = ProgressStore::load(&path).expect("load should succeed");
        assert!(loaded.gate_open);
        assert_eq!(loaded.sigil_index, 0);
        assert!(loaded.ordering.is_empty());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let tmp = TempDirGuard::new("malformed");
        let path = tmp.path().join("progress.json");
        fs::write(&path, "{not json").expect("write");

        let err = ProgressStore::load(&path).expect_err("malformed must fail");
        assert!(matches!(err, ProgressStoreError::Parse { .. }));
    }

    #[test]
    fn update_saves_only_when_changed() {
        let tmp = TempDirGuard::new("update");
        let path = tmp.path().join("progress.json");

        update_progress(&path, |store| ((), store.gate_open)).expect("no-op update");
        assert!(!path.exists());

        let index = update_progress(&path, |store| {
            store.sigil_index += 1;
            (store.sigil_index, true)
        })
        .expect("update should save");
        assert_eq!(index, 1);
        assert_eq!(ProgressStore::load(&path).expect("load").sigil_index, 1);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut store = ProgressStore {
            gate_open: true,
            combination_open: true,
            ..ProgressStore::default()
        };
        store.clear();
        assert!(store.is_fresh());
    }
}
