//! Declarative pipeline configuration for `textsan-core`.
//!
//! This module defines a plain-data spec for a sanitization pipeline that
//! can be parsed from a YAML or JSON string (string input only; this
//! library performs no I/O) and compiled into a runnable [`DynSanitizer`].
//! Custom transforms are code rather than data and are attached
//! programmatically after [`PipelineSpec::build`].

use log::debug;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::charsets::ranges::Utf8Range;
use crate::engine::{CharsetPolicy, Sanitizer};
use crate::errors::ConfigError;
use crate::policies::{AsciiPolicy, Utf8Policy};

/// Maximum allowed length for a match-pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// A sanitizer behind a boxed charset policy, as produced by
/// [`PipelineSpec::build`].
pub type DynSanitizer = Sanitizer<Box<dyn CharsetPolicy + Send + Sync>>;

fn default_true() -> bool {
    true
}

/// The charset policy half of a pipeline spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "charset", rename_all = "snake_case")]
pub enum PolicySpec {
    /// 7-bit ASCII, printable-only by default.
    Ascii {
        #[serde(default = "default_true")]
        printable_only: bool,
    },
    /// UTF-8 restricted to named script ranges.
    Utf8 {
        #[serde(default = "default_true")]
        allow_ascii: bool,
        #[serde(default = "default_true")]
        allow_spaces: bool,
        #[serde(default)]
        filter_invalid_chars: bool,
        #[serde(default)]
        ranges: Vec<Utf8Range>,
    },
}

impl Default for PolicySpec {
    fn default() -> Self {
        PolicySpec::Ascii {
            printable_only: true,
        }
    }
}

/// Trim stage mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimMode {
    Both,
    Left,
    Right,
}

/// Case-change stage mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    Upper,
    Lower,
}

/// A declarative description of a sanitization pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSpec {
    pub policy: PolicySpec,
    pub trim: Option<TrimMode>,
    /// Overrides the default trim character set.
    pub trim_chars: Option<String>,
    pub clean_spaces: bool,
    pub change_case: Option<CaseMode>,
    /// Exact length bound; mutually exclusive with `min_len`/`max_len`.
    pub exact_len: Option<usize>,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    /// Unanchored match pattern, compiled at build time.
    pub pattern: Option<String>,
    /// Enumerated allowed values.
    pub one_of: Option<Vec<String>>,
}

impl PipelineSpec {
    /// Parses a spec from a YAML string.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        serde_yml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parses a spec from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Compiles the spec into a runnable sanitizer.
    pub fn build(&self) -> Result<DynSanitizer, ConfigError> {
        if self.exact_len.is_some() && (self.min_len.is_some() || self.max_len.is_some()) {
            return Err(ConfigError::ConflictingLengthBounds);
        }

        let policy: Box<dyn CharsetPolicy + Send + Sync> = match &self.policy {
            PolicySpec::Ascii { printable_only } => Box::new(AsciiPolicy {
                printable_only: *printable_only,
            }),
            PolicySpec::Utf8 {
                allow_ascii,
                allow_spaces,
                filter_invalid_chars,
                ranges,
            } => Box::new(Utf8Policy {
                allow_ascii: *allow_ascii,
                allow_spaces: *allow_spaces,
                filter_invalid_chars: *filter_invalid_chars,
                ranges: ranges.clone(),
            }),
        };

        let mut sanitizer = Sanitizer::with_policy(policy);

        if let Some(mode) = self.trim {
            sanitizer = match mode {
                TrimMode::Both => sanitizer.trim(),
                TrimMode::Left => sanitizer.ltrim(),
                TrimMode::Right => sanitizer.rtrim(),
            };
        }
        if let Some(chars) = &self.trim_chars {
            sanitizer = sanitizer.trim_chars(chars.clone());
        }
        if self.clean_spaces {
            sanitizer = sanitizer.clean_spaces();
        }
        match self.change_case {
            Some(CaseMode::Upper) => sanitizer = sanitizer.upper_case(),
            Some(CaseMode::Lower) => sanitizer = sanitizer.lower_case(),
            None => {}
        }

        if let Some(exact) = self.exact_len {
            sanitizer = sanitizer.len_exact(exact);
        } else {
            sanitizer = sanitizer.len_range(self.min_len, self.max_len);
        }

        if let Some(pattern) = &self.pattern {
            if pattern.len() > MAX_PATTERN_LENGTH {
                return Err(ConfigError::PatternLengthExceeded(
                    pattern.len(),
                    MAX_PATTERN_LENGTH,
                ));
            }

            debug!("Compiling pipeline match pattern: {:?}", pattern);
            let compiled = RegexBuilder::new(pattern)
                .size_limit(10 * (1 << 20)) // 10 MB limit for compiled patterns
                .build()?;
            sanitizer = sanitizer.match_pattern(compiled);
        }

        if let Some(values) = &self.one_of {
            sanitizer = sanitizer.one_of(values.iter().cloned());
        }

        Ok(sanitizer)
    }
}
