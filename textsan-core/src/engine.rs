//! engine.rs - The charset-policy capability and the ordered-stage
//! sanitization engine.
//!
//! `CharsetPolicy` decouples the pipeline from the specifics of a charset:
//! how length is measured, how membership is checked or repaired, and what
//! "case" means. `Sanitizer<P>` runs the fixed stage sequence
//! trim -> collapse whitespace -> change case -> charset -> length ->
//! pattern -> enum -> custom transform; a stage is a no-op unless
//! configured, and the first failing stage aborts the call.

use regex::Regex;
use serde_json::Value;

use crate::charsets;
use crate::config::{CaseMode, TrimMode};
use crate::errors::SanitizeError;

/// Characters removed by the trim stage unless overridden.
pub const DEFAULT_TRIM_CHARS: &str = " \n\r\t\x0B\0";

/// The capability a charset policy provides to the pipeline engine.
///
/// Implementations decide whether length means bytes or codepoints, whether
/// a violating value can be repaired before the membership check, and which
/// case mapping applies.
pub trait CharsetPolicy {
    /// Measures `value` in this policy's length unit.
    fn measure_length(&self, value: &str) -> usize;

    /// Checks `value` against the policy's charset, repairing it first when
    /// the policy supports repair. Fails with [`SanitizeError::Charset`].
    fn check_or_repair(&self, value: String) -> Result<String, SanitizeError>;

    /// Uppercases `value` under this policy's notion of case.
    fn to_uppercase(&self, value: &str) -> String;

    /// Lowercases `value` under this policy's notion of case.
    fn to_lowercase(&self, value: &str) -> String;
}

impl CharsetPolicy for Box<dyn CharsetPolicy + Send + Sync> {
    fn measure_length(&self, value: &str) -> usize {
        (**self).measure_length(value)
    }

    fn check_or_repair(&self, value: String) -> Result<String, SanitizeError> {
        (**self).check_or_repair(value)
    }

    fn to_uppercase(&self, value: &str) -> String {
        (**self).to_uppercase(value)
    }

    fn to_lowercase(&self, value: &str) -> String {
        (**self).to_lowercase(value)
    }
}

/// The active length bound. Exact and range bounds are mutually exclusive
/// by construction; configuring one replaces the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    Exact(usize),
    Range {
        min: Option<usize>,
        max: Option<usize>,
    },
}

/// A custom transform stage. Returning `None` signals that the transform
/// did not produce a string and fails the call with
/// [`SanitizeError::CallbackType`].
pub type TransformFn = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// The ordered-stage sanitizer/validator, generic over a charset policy.
///
/// Configuration is builder-style; each setter consumes and returns the
/// sanitizer for chaining. The policy itself stays reachable through the
/// public `policy` field, so policy flags may be toggled between calls;
/// the next call reflects the new flags. Configuration is never read
/// mid-mutation: each [`process`](Self::process) call is an independent run
/// with no cross-call memory.
pub struct Sanitizer<P> {
    /// The charset policy, with its flags exposed for between-call toggling.
    pub policy: P,
    trim: Option<TrimMode>,
    trim_chars: String,
    clean_spaces: bool,
    change_case: Option<CaseMode>,
    length: Option<LengthRule>,
    pattern: Option<Regex>,
    allowed: Option<Vec<String>>,
    transform: Option<TransformFn>,
}

impl<P: CharsetPolicy> Sanitizer<P> {
    /// Creates an unconfigured sanitizer around `policy`; every stage
    /// starts absent.
    pub fn with_policy(policy: P) -> Self {
        Self {
            policy,
            trim: None,
            trim_chars: DEFAULT_TRIM_CHARS.to_string(),
            clean_spaces: false,
            change_case: None,
            length: None,
            pattern: None,
            allowed: None,
            transform: None,
        }
    }

    /// Trims the configured trim characters from both ends.
    pub fn trim(mut self) -> Self {
        self.trim = Some(TrimMode::Both);
        self
    }

    /// Trims the configured trim characters from the left end only.
    pub fn ltrim(mut self) -> Self {
        self.trim = Some(TrimMode::Left);
        self
    }

    /// Trims the configured trim characters from the right end only.
    pub fn rtrim(mut self) -> Self {
        self.trim = Some(TrimMode::Right);
        self
    }

    /// Replaces the trim character set (default [`DEFAULT_TRIM_CHARS`]).
    pub fn trim_chars(mut self, chars: impl Into<String>) -> Self {
        self.trim_chars = chars.into();
        self
    }

    /// Collapses every in-between whitespace run to a single space. Does
    /// not trim the ends by itself; combine with [`trim`](Self::trim).
    pub fn clean_spaces(mut self) -> Self {
        self.clean_spaces = true;
        self
    }

    /// Uppercases the value, using the policy's notion of case.
    pub fn upper_case(mut self) -> Self {
        self.change_case = Some(CaseMode::Upper);
        self
    }

    /// Lowercases the value, using the policy's notion of case.
    pub fn lower_case(mut self) -> Self {
        self.change_case = Some(CaseMode::Lower);
        self
    }

    /// Requires the policy-measured length to equal `exact`. Clears any
    /// min/max bound.
    pub fn len_exact(mut self, exact: usize) -> Self {
        self.length = Some(LengthRule::Exact(exact));
        self
    }

    /// Bounds the policy-measured length between `min` and `max`
    /// (inclusive). Clears any exact bound; passing `None` for both clears
    /// the length stage entirely.
    pub fn len_range(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.length = if min.is_none() && max.is_none() {
            None
        } else {
            Some(LengthRule::Range { min, max })
        };
        self
    }

    /// Requires the value to satisfy `pattern` after all earlier stages.
    /// The match is unanchored; anchor the pattern to constrain the whole
    /// value.
    pub fn match_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Requires the value to equal one of `values` exactly. An empty list
    /// disables the stage.
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Installs a custom transform as the final stage; its return value
    /// becomes the result of the call.
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Clears a previously installed custom transform.
    pub fn clear_transform(mut self) -> Self {
        self.transform = None;
        self
    }

    /// Runs the full stage sequence over `value`, returning the sanitized
    /// string or the first failing stage's error.
    pub fn process(&self, value: &str) -> Result<String, SanitizeError> {
        let is_trim_char = |c: char| self.trim_chars.contains(c);
        let mut value = match self.trim {
            Some(TrimMode::Both) => value.trim_matches(is_trim_char).to_string(),
            Some(TrimMode::Left) => value.trim_start_matches(is_trim_char).to_string(),
            Some(TrimMode::Right) => value.trim_end_matches(is_trim_char).to_string(),
            None => value.to_string(),
        };

        if self.clean_spaces {
            value = charsets::collapse_runs(&value).into_owned();
        }

        if let Some(case) = self.change_case {
            value = match case {
                CaseMode::Upper => self.policy.to_uppercase(&value),
                CaseMode::Lower => self.policy.to_lowercase(&value),
            };
        }

        // Charset check/repair always runs, even for an unrestricted policy.
        value = self.policy.check_or_repair(value)?;

        if let Some(rule) = self.length {
            let length = self.policy.measure_length(&value);
            match rule {
                LengthRule::Exact(exact) => {
                    if length != exact {
                        return Err(SanitizeError::Length);
                    }
                }
                LengthRule::Range { min, max } => {
                    if min.is_some_and(|min| length < min) {
                        return Err(SanitizeError::LengthUnderflow);
                    }
                    if max.is_some_and(|max| length > max) {
                        return Err(SanitizeError::LengthOverflow);
                    }
                }
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(&value) {
                return Err(SanitizeError::PatternMatch);
            }
        }

        if let Some(allowed) = &self.allowed {
            if !allowed.is_empty() && !allowed.iter().any(|candidate| candidate == &value) {
                return Err(SanitizeError::Enum);
            }
        }

        if let Some(transform) = &self.transform {
            value = transform(&value).ok_or(SanitizeError::CallbackType)?;
        }

        Ok(value)
    }

    /// Like [`process`](Self::process), but `None` (or `Some("")` when
    /// `empty_is_none` is set) short-circuits to "no value".
    pub fn process_nullable(
        &self,
        value: Option<&str>,
        empty_is_none: bool,
    ) -> Result<Option<String>, SanitizeError> {
        match value {
            None => Ok(None),
            Some("") if empty_is_none => Ok(None),
            Some(value) => self.process(value).map(Some),
        }
    }

    /// Runs the pipeline over a dynamically-typed value. Anything but a
    /// JSON string fails with [`SanitizeError::Type`].
    pub fn process_value(&self, value: &Value) -> Result<String, SanitizeError> {
        match value {
            Value::String(value) => self.process(value),
            _ => Err(SanitizeError::Type),
        }
    }

    /// Nullable form of [`process_value`](Self::process_value): JSON null
    /// (or an empty JSON string when `empty_is_none` is set) is "no value";
    /// any other non-string fails with [`SanitizeError::Type`].
    pub fn process_nullable_value(
        &self,
        value: &Value,
        empty_is_none: bool,
    ) -> Result<Option<String>, SanitizeError> {
        match value {
            Value::Null => Ok(None),
            Value::String(value) if empty_is_none && value.is_empty() => Ok(None),
            Value::String(value) => self.process(value).map(Some),
            _ => Err(SanitizeError::Type),
        }
    }
}
