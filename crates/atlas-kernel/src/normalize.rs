//! Canonical comparison keys for words and phrases.
//!
//! Every equality check in the kernel (tile words against the target,
//! passphrases, sigil guesses) goes through [`normalize_word`]:
//!
//! 1. canonical decomposition (NFD), so `Á` becomes `A` + U+0301
//! 2. every `Diacritic` code point dropped, spacing ones like `^` included
//! 3. leading/trailing whitespace and U+FEFF trimmed (U+0085 is kept)
//! 4. lower-cased

use crate::diacritic::is_diacritic;
use std::fmt::Display;
use unicode_normalization::UnicodeNormalization;

/// The ECMAScript `trim` set: `White_Space` minus NEL, plus the BOM.
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Normalize any displayable value into its comparison key.
///
/// Total and deterministic: there is no input this rejects.
pub fn normalize_word<T: Display + ?Sized>(value: &T) -> String {
    let text = value.to_string();
    let stripped: String = text.nfd().filter(|c| !is_diacritic(*c)).collect();
    stripped.trim_matches(is_trimmed).to_lowercase()
}
