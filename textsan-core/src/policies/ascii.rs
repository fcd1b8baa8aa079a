//! ascii.rs - The strict 7-bit charset policy.
//!
//! Length is a byte count, case is byte-wise (non-letter bytes are left
//! alone), and the membership check performs no repair.

use textsan_ascii::charset;

use crate::engine::{CharsetPolicy, Sanitizer};
use crate::errors::SanitizeError;

/// Charset policy for 7-bit ASCII input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiPolicy {
    /// Restricts the charset to the printable block (0x20 to 0x7E) instead
    /// of the full 7-bit table.
    pub printable_only: bool,
}

impl Default for AsciiPolicy {
    fn default() -> Self {
        Self {
            printable_only: true,
        }
    }
}

impl CharsetPolicy for AsciiPolicy {
    fn measure_length(&self, value: &str) -> usize {
        value.len()
    }

    fn check_or_repair(&self, value: String) -> Result<String, SanitizeError> {
        let in_charset = if self.printable_only {
            charset::is_printable(value.as_bytes())
        } else {
            charset::is_ascii(value.as_bytes())
        };

        if in_charset {
            Ok(value)
        } else {
            Err(SanitizeError::Charset)
        }
    }

    fn to_uppercase(&self, value: &str) -> String {
        value.to_ascii_uppercase()
    }

    fn to_lowercase(&self, value: &str) -> String {
        value.to_ascii_lowercase()
    }
}

impl Sanitizer<AsciiPolicy> {
    /// Creates an ASCII pipeline, restricted to printable characters when
    /// `printable_only` is set.
    pub fn ascii(printable_only: bool) -> Self {
        Self::with_policy(AsciiPolicy { printable_only })
    }
}
