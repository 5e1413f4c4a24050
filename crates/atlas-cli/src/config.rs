//! Puzzle content configuration.
//!
//! A TOML file may override any part of the built-in catalog:
//!
//! ```toml
//! passphrase = "atlas"
//! words = ["Arbre", "Nazareth", "Alea"]
//! target = ["Arbre", "Alea"]
//! ordering_words = ["Arbre", "Alea"]
//!
//! [[sigils]]
//! word = "ember"
//! icon = "🔥"
//! label = "Ember Sigil"
//! ```

use atlas_kernel::Sigil;
use atlas_kernel::catalog::{self, ALL_WORDS, KEY_PHRASE, TARGET_SEQUENCE};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("invalid config {path}: {message}")]
    Parse { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub passphrase: String,
    pub words: Vec<String>,
    pub target: Vec<String>,
    pub sigils: Vec<Sigil>,
    pub ordering_words: Vec<String>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            passphrase: KEY_PHRASE.to_string(),
            words: to_strings(ALL_WORDS),
            target: to_strings(TARGET_SEQUENCE),
            sigils: catalog::default_sigils(),
            ordering_words: to_strings(TARGET_SEQUENCE),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl PuzzleConfig {
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, PuzzleConfigError> {
        toml::from_str(text).map_err(|e| PuzzleConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PuzzleConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| PuzzleConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_catalog_defaults() {
        let config = PuzzleConfig::from_toml_str(
            r#"
passphrase = "open sesame"
target = ["Arbre", "Alea"]
"#,
            "inline",
        )
        .expect("config should parse");

        assert_eq!(config.passphrase, "open sesame");
        assert_eq!(config.target, vec!["Arbre", "Alea"]);
        assert_eq!(config.words.len(), ALL_WORDS.len());
        assert_eq!(config.sigils.len(), 4);
    }

    #[test]
    fn sigil_tables_parse() {
        let config = PuzzleConfig::from_toml_str(
            r#"
[[sigils]]
word = "frost"

[[sigils]]
word = "spark"
label = "Spark Sigil"
"#,
            "inline",
        )
        .expect("config should parse");

        assert_eq!(config.sigils.len(), 2);
        assert_eq!(config.sigils[0].word, "frost");
        assert_eq!(config.sigils[0].icon, "");
        assert_eq!(config.sigils[1].label, "Spark Sigil");
    }

    #[test]
    fn wrong_types_are_reported() {
        let err = PuzzleConfig::from_toml_str("words = 3", "inline").expect_err("must fail");
        assert!(matches!(err, PuzzleConfigError::Parse { .. }));
    }
}
