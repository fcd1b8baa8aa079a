//! Charset utilities: the script-range registry, codepoint-aware
//! match/strip operations, and the free-function facade over the byte-level
//! helpers from `textsan-ascii`.

pub mod ranges;
pub mod utf8;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

pub use ranges::Utf8Range;
pub use textsan_ascii::charset::{is_ascii as is_ascii_bytes, is_printable as is_printable_bytes};
pub use textsan_ascii::filter::filter_bytes;
pub use textsan_ascii::hex::{decode as hex_decode, encode as hex_encode, HexError};

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

static BASE16: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[0-9a-fA-F]+$").expect("base16 pattern"));

/// Replaces every maximal whitespace run with a single space, leaving the
/// ends of the string alone.
pub(crate) fn collapse_runs(input: &str) -> Cow<'_, str> {
    WHITESPACE_RUNS.replace_all(input, " ")
}

/// Collapses in-between whitespace runs to a single space and trims both
/// ends.
pub fn clean_spaces(input: &str) -> String {
    collapse_runs(input).trim().to_string()
}

/// Returns true if `value` is entirely 7-bit ASCII, restricted to the
/// printable block when `printable_only` is set.
pub fn is_ascii(value: &str, printable_only: bool) -> bool {
    if printable_only {
        is_printable_bytes(value.as_bytes())
    } else {
        is_ascii_bytes(value.as_bytes())
    }
}

/// Returns true if `value` carries any byte outside the 7-bit range.
pub fn has_utf8_chars(value: &str) -> bool {
    !is_ascii_bytes(value.as_bytes())
}

/// Returns true if `value` is hexadecimal encoded, tolerating one `0x`
/// prefix. Performs no sanitization.
pub fn is_base16(value: &str) -> bool {
    BASE16.is_match(value)
}

/// Strips ANSI escape sequences, for cleaning terminal-sourced input before
/// validation.
pub fn strip_ansi(input: &str) -> String {
    strip_ansi_escapes::strip_str(input)
}

/// String-level wrapper over [`filter_bytes`]: drops every byte above 0x7F,
/// gates control bytes through `allowed_low_chars`, then strips
/// `strip_chars`.
pub fn ascii_filter(
    value: &str,
    allowed_low_chars: Option<&str>,
    strip_chars: Option<&str>,
) -> String {
    let filtered = filter_bytes(
        value.as_bytes(),
        allowed_low_chars.map(str::as_bytes),
        strip_chars.map(str::as_bytes),
    );
    // every surviving byte is 7-bit, so this never replaces anything
    String::from_utf8_lossy(&filtered).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_spaces() {
        assert_eq!(clean_spaces("granite         labs"), "granite labs");
        assert_eq!(clean_spaces("granite  labs "), "granite labs");
        assert_eq!(clean_spaces(" granite labs"), "granite labs");
        assert_eq!(clean_spaces("مرحبا       بكم "), "مرحبا بكم");
    }

    #[test]
    fn test_is_ascii_facade() {
        assert!(is_ascii("granite", true));
        assert!(is_ascii("granite\0labs", false));
        assert!(!is_ascii("granite\0labs", true));
        assert!(!is_ascii("уголь", false));
    }

    #[test]
    fn test_has_utf8_chars() {
        assert!(has_utf8_chars("уголь"));
        assert!(has_utf8_chars("granite уголь"));
        assert!(!has_utf8_chars("granite"));
        assert!(!has_utf8_chars("\0granite\r\n"));
        assert!(!has_utf8_chars("\x20\x7F"));
    }

    #[test]
    fn test_is_base16() {
        assert!(is_base16("0xabcdef1234567890"));
        assert!(is_base16("123456789"));
        assert!(is_base16("a1B2c3D4f5"));
        assert!(!is_base16(" a1b2c3"));
        assert!(!is_base16("a1b2c3 "));
        assert!(!is_base16("0x"));
        assert!(!is_base16(""));
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("plain"), "plain");
        assert_eq!(strip_ansi("\x1b[31mwarning\x1b[0m"), "warning");
    }

    #[test]
    fn test_ascii_filter_wrapper() {
        let input = "granite \u{0151} labs\0";
        assert_eq!(ascii_filter(input, None, None), "granite  labs");
        assert_eq!(ascii_filter(input, Some("\0"), None), "granite  labs\0");
        assert_eq!(ascii_filter(input, None, Some("a ")), "grnitelbs");
    }
}
