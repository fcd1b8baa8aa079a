// textsan-core/src/lib.rs
//! # TextSan Core Library
//!
//! `textsan-core` validates and sanitizes untrusted string input against
//! character-set constraints and an ordered chain of sanitization rules.
//! Two charset policies, strict 7-bit ASCII and UTF-8 restricted to named
//! script ranges, plug into one pipeline engine that applies its stages in
//! a fixed order: trim, whitespace collapsing, case change, charset
//! check/repair, length bounds, pattern match, enumerated membership, and a
//! custom transform.
//!
//! The library is pure computation: no I/O, no persistence, no networking.
//! Each `process` call is an independent run through the stage sequence and
//! returns either the sanitized string or the first failing stage's tagged
//! error.
//!
//! ## Modules
//!
//! * `engine`: The `CharsetPolicy` trait and the generic `Sanitizer<P>`
//!   stage engine.
//! * `policies`: The concrete `AsciiPolicy` and `Utf8Policy`.
//! * `charsets`: The script-range registry, codepoint-aware match/strip
//!   operations, and the free-function charset facade.
//! * `config`: Declarative `PipelineSpec`, parseable from YAML/JSON strings
//!   and compiled into a `DynSanitizer`.
//! * `errors`: The closed pipeline failure taxonomy and spec-compilation
//!   errors.
//!
//! Byte-level 7-bit utilities (membership predicates, the quirk-preserving
//! hex codec, control-byte filtering) live in the `textsan-ascii` leaf
//! crate and are re-exported through [`charsets`].
//!
//! ## Usage Example
//!
//! ```rust
//! use textsan_core::{SanitizeError, Sanitizer, Utf8Range};
//!
//! fn main() -> Result<(), SanitizeError> {
//!     let name = Sanitizer::ascii(true)
//!         .trim()
//!         .clean_spaces()
//!         .len_range(Some(2), Some(32))
//!         .process("  Granite  Labs ")?;
//!     assert_eq!(name, "Granite Labs");
//!
//!     let greeting = Sanitizer::utf8(false, true, false)
//!         .add_range(Utf8Range::Arabic)
//!         .len_exact(5)
//!         .process("مرحبا")?;
//!     assert_eq!(greeting, "مرحبا");
//!
//!     let rejected = Sanitizer::ascii(true).process("ok\0");
//!     assert_eq!(rejected, Err(SanitizeError::Charset));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Pipeline failures are a closed, payload-free taxonomy
//! ([`SanitizeError`]); callers branch on the variant. Spec compilation
//! failures are a separate [`ConfigError`].
//!
//! ## Concurrency
//!
//! A configured sanitizer is `Send + Sync` when its policy is, and safe to
//! share read-only. The range registry is static data; compiled charset
//! patterns live in a process-wide cache behind an `RwLock`.

pub mod charsets;
pub mod config;
pub mod engine;
pub mod errors;
pub mod policies;

/// Re-exports the pipeline engine and its configuration vocabulary.
pub use engine::{CharsetPolicy, LengthRule, Sanitizer, TransformFn, DEFAULT_TRIM_CHARS};

/// Re-exports the concrete charset policies.
pub use policies::{AsciiPolicy, Utf8Policy};

/// Convenience aliases for the two concrete pipelines.
pub type AsciiSanitizer = Sanitizer<AsciiPolicy>;
pub type Utf8Sanitizer = Sanitizer<Utf8Policy>;

/// Re-exports the closed failure taxonomy.
pub use errors::{ConfigError, SanitizeError};

/// Re-exports the declarative configuration layer.
pub use config::{CaseMode, DynSanitizer, PipelineSpec, PolicySpec, TrimMode, MAX_PATTERN_LENGTH};

/// Re-exports the charset facade: script ranges, ASCII predicates, hex
/// codec, byte filtering, and whitespace/ANSI cleanup helpers.
pub use charsets::{
    ascii_filter, clean_spaces, filter_bytes, has_utf8_chars, hex_decode, hex_encode, is_ascii,
    is_base16, strip_ansi, HexError, Utf8Range,
};
