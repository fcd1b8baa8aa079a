//! ranges.rs - The fixed catalog of named Unicode script ranges.
//!
//! Each range resolves to a character-class fragment of inclusive codepoint
//! intervals in `regex` crate syntax. The catalog is static, read-only,
//! process-wide data; the serde names are stable identifiers across
//! versions.

use serde::{Deserialize, Serialize};

/// A named script range usable inside a charset character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Utf8Range {
    Arabic,
    Russian,
    Greek,
    Hebrew,
    Devanagari,
}

impl Utf8Range {
    /// The character-class fragment covering this range's codepoint blocks.
    pub fn char_class(&self) -> &'static str {
        match self {
            Utf8Range::Arabic => {
                r"\x{0600}-\x{06FF}\x{0750}-\x{077F}\x{08A0}-\x{08FF}\x{FB50}-\x{FDFF}\x{FE70}-\x{FEFF}"
            }
            Utf8Range::Russian => r"\x{0400}-\x{04FF}",
            Utf8Range::Greek => r"\x{0370}-\x{03FF}\x{1F00}-\x{1FFF}",
            Utf8Range::Hebrew => r"\x{0590}-\x{05FF}",
            Utf8Range::Devanagari => r"\x{0900}-\x{097F}",
        }
    }
}

/// Concatenates the fragments of `ranges` in the order given.
///
/// Duplicate ranges produce a redundant but harmless repeated fragment.
pub fn resolve(ranges: &[Utf8Range]) -> String {
    ranges.iter().map(Utf8Range::char_class).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_preserves_order_and_duplicates() {
        let fragment = resolve(&[Utf8Range::Russian, Utf8Range::Russian]);
        assert_eq!(fragment, format!("{0}{0}", Utf8Range::Russian.char_class()));
        assert_eq!(resolve(&[]), "");
    }

    #[test]
    fn test_serde_names_are_stable() {
        assert_eq!(
            serde_json::to_string(&Utf8Range::Devanagari).unwrap(),
            "\"devanagari\""
        );
        let parsed: Utf8Range = serde_json::from_str("\"arabic\"").unwrap();
        assert_eq!(parsed, Utf8Range::Arabic);
    }
}
