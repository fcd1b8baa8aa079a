//! utf8.rs - Codepoint-aware charset matching and stripping.
//!
//! Builds whole-string match patterns and complement strip patterns from
//! {allow-spaces, allow-ASCII, script ranges} and serves them from a
//! process-wide compiled-pattern cache, so each distinct class is compiled
//! once and reused.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use super::ranges::{self, Utf8Range};

/// The printable 7-bit block, as a class fragment.
const ASCII_PRINTABLE: &str = r"\x20-\x7E";

lazy_static! {
    /// A thread-safe, global cache for compiled charset patterns,
    /// keyed by the full pattern text.
    static ref PATTERN_CACHE: RwLock<HashMap<String, Arc<Regex>>> = RwLock::new(HashMap::new());
}

/// Compiles `pattern` or serves it from the global cache.
fn cached_regex(pattern: &str) -> Result<Arc<Regex>, regex::Error> {
    // Attempt to acquire a read lock first.
    {
        let cache = PATTERN_CACHE.read().unwrap();
        if let Some(regex) = cache.get(pattern) {
            return Ok(Arc::clone(regex));
        }
    } // Read lock is released here.

    debug!("Compiling charset pattern: {:?}", pattern);
    let compiled = RegexBuilder::new(pattern)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled charset classes
        .build()?;
    let compiled_arc = Arc::new(compiled);

    PATTERN_CACHE
        .write()
        .unwrap()
        .insert(pattern.to_string(), Arc::clone(&compiled_arc));

    Ok(compiled_arc)
}

/// Returns true if the entire string falls within the allowed class built
/// from optional whitespace, the optional printable-ASCII block, and the
/// resolved script ranges.
///
/// The class is matched zero-or-more times, so the empty string matches
/// under any configuration. An empty allowed class admits only the empty
/// string.
pub fn check(input: &str, allow_spaces: bool, allow_ascii: bool, ranges: &[Utf8Range]) -> bool {
    let mut class = String::new();
    if allow_spaces {
        class.push_str(r"\s");
    }
    if allow_ascii {
        class.push_str(ASCII_PRINTABLE);
    }
    class.push_str(&ranges::resolve(ranges));

    if class.is_empty() {
        return input.is_empty();
    }

    let pattern = format!("^[{class}]*$");
    match cached_regex(&pattern) {
        Ok(regex) => regex.is_match(input),
        Err(e) => {
            warn!("Charset check pattern {:?} failed to compile: {}", pattern, e);
            false
        }
    }
}

/// Removes every maximal run of characters outside the allowed class built
/// from the optional printable-ASCII block and the resolved script ranges.
///
/// Unlike [`check`], whitespace is never auto-allowed here; a space survives
/// only when the ASCII block (or a range) contains it. When nothing is
/// allowed, everything is stripped.
pub fn filter(input: &str, allow_ascii: bool, ranges: &[Utf8Range]) -> String {
    let mut class = String::new();
    if allow_ascii {
        class.push_str(ASCII_PRINTABLE);
    }
    class.push_str(&ranges::resolve(ranges));

    if class.is_empty() {
        return String::new();
    }

    let pattern = format!("[^{class}]+");
    match cached_regex(&pattern) {
        Ok(regex) => regex.replace_all(input, "").into_owned(),
        Err(e) => {
            warn!("Charset strip pattern {:?} failed to compile: {}", pattern, e);
            input.to_string()
        }
    }
}
