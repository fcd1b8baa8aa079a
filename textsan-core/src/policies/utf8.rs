//! utf8.rs - The Unicode charset policy with configurable script ranges.
//!
//! Length is a codepoint count and case mapping is Unicode-aware. When
//! `filter_invalid_chars` is set, disallowed characters are stripped before
//! the membership check, so mixed input can be repaired instead of
//! rejected.

use crate::charsets::ranges::Utf8Range;
use crate::charsets::utf8;
use crate::engine::{CharsetPolicy, Sanitizer};
use crate::errors::SanitizeError;

/// Charset policy for UTF-8 input restricted to script ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf8Policy {
    /// Admits the printable 7-bit block alongside the configured ranges.
    pub allow_ascii: bool,
    /// Admits whitespace in the membership check (never in the repair
    /// pass).
    pub allow_spaces: bool,
    /// Strips disallowed characters before the membership check instead of
    /// failing on them.
    pub filter_invalid_chars: bool,
    /// The active script ranges, in the order they were added.
    pub ranges: Vec<Utf8Range>,
}

impl Default for Utf8Policy {
    fn default() -> Self {
        Self {
            allow_ascii: true,
            allow_spaces: true,
            filter_invalid_chars: false,
            ranges: Vec::new(),
        }
    }
}

impl CharsetPolicy for Utf8Policy {
    fn measure_length(&self, value: &str) -> usize {
        value.chars().count()
    }

    fn check_or_repair(&self, value: String) -> Result<String, SanitizeError> {
        let value = if self.filter_invalid_chars {
            utf8::filter(&value, self.allow_ascii, &self.ranges)
        } else {
            value
        };

        if utf8::check(&value, self.allow_spaces, self.allow_ascii, &self.ranges) {
            Ok(value)
        } else {
            Err(SanitizeError::Charset)
        }
    }

    fn to_uppercase(&self, value: &str) -> String {
        value.to_uppercase()
    }

    fn to_lowercase(&self, value: &str) -> String {
        value.to_lowercase()
    }
}

impl Sanitizer<Utf8Policy> {
    /// Creates a Unicode pipeline with no script ranges yet; add them with
    /// [`add_range`](Self::add_range).
    pub fn utf8(allow_ascii: bool, allow_spaces: bool, filter_invalid_chars: bool) -> Self {
        Self::with_policy(Utf8Policy {
            allow_ascii,
            allow_spaces,
            filter_invalid_chars,
            ranges: Vec::new(),
        })
    }

    /// Appends a script range to the active range set.
    pub fn add_range(mut self, range: Utf8Range) -> Self {
        self.policy.ranges.push(range);
        self
    }
}
