//! errors.rs - Custom error types for the textsan-core library.
//!
//! This module defines the closed failure taxonomy surfaced by the
//! sanitization pipeline, plus a separate error enum for declarative
//! pipeline specs that fail to compile. Callers are expected to branch on
//! the variant.

use thiserror::Error;

/// A pipeline failure, tagged with the stage that rejected the value.
///
/// The first failing stage aborts the call; transformations applied by
/// earlier stages are discarded, and no stage swallows or downgrades
/// another stage's failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SanitizeError {
    #[error("input value is not a string")]
    Type,

    #[error("value length does not match the exact bound")]
    Length,

    #[error("value is shorter than the configured minimum length")]
    LengthUnderflow,

    #[error("value is longer than the configured maximum length")]
    LengthOverflow,

    #[error("value does not satisfy the configured match pattern")]
    PatternMatch,

    #[error("value is not one of the allowed values")]
    Enum,

    #[error("custom transform did not produce a string")]
    CallbackType,

    #[error("value contains characters outside the allowed charset")]
    Charset,
}

/// Failure to turn a declarative [`PipelineSpec`](crate::config::PipelineSpec)
/// into a runnable sanitizer.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to parse pipeline spec: {0}")]
    Parse(String),

    #[error("exact length bound cannot be combined with min/max bounds")]
    ConflictingLengthBounds,

    #[error("match pattern length ({0}) exceeds maximum allowed ({1})")]
    PatternLengthExceeded(usize, usize),

    #[error("failed to compile match pattern: {0}")]
    PatternCompile(#[from] regex::Error),
}
