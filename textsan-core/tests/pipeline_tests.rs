// textsan-core/tests/pipeline_tests.rs
use anyhow::Result;
use regex::Regex;
use serde_json::{json, Value};

use textsan_core::{SanitizeError, Sanitizer, Utf8Range};

#[test]
fn test_printable_charset_rejects_control_bytes() {
    let sanitizer = Sanitizer::ascii(true);
    assert_eq!(sanitizer.process("ok\0"), Err(SanitizeError::Charset));
    assert_eq!(
        sanitizer.process("granite\r\nwww.granite.dev\0v"),
        Err(SanitizeError::Charset)
    );
}

#[test]
fn test_policy_flags_toggle_between_calls() -> Result<()> {
    let input = "granite\r\nwww.granite.dev\0v";
    let mut sanitizer = Sanitizer::ascii(true);
    assert_eq!(sanitizer.process(input), Err(SanitizeError::Charset));

    sanitizer.policy.printable_only = false;
    assert_eq!(sanitizer.process(input)?, input);
    Ok(())
}

#[test]
fn test_charset_stage_always_runs() {
    // even the unrestricted 7-bit policy rejects multibyte input
    let sanitizer = Sanitizer::ascii(false);
    assert_eq!(sanitizer.process("уголь"), Err(SanitizeError::Charset));
}

#[test]
fn test_stagewise_reconfiguration() -> Result<()> {
    let name = "Granite  Labs ";

    let sanitizer = Sanitizer::ascii(true).clean_spaces();
    assert_eq!(sanitizer.process(name)?, "Granite Labs ");

    let sanitizer = sanitizer.trim();
    assert_eq!(sanitizer.process(name)?, "Granite Labs");

    let sanitizer = sanitizer.upper_case();
    assert_eq!(sanitizer.process(name)?, "GRANITE LABS");

    let sanitizer = sanitizer.lower_case();
    assert_eq!(sanitizer.process(name)?, "granite labs");
    Ok(())
}

#[test]
fn test_trim_modes_and_custom_chars() -> Result<()> {
    let sanitizer = Sanitizer::ascii(true).ltrim().trim_chars("-");
    assert_eq!(sanitizer.process("--value--")?, "value--");

    let sanitizer = sanitizer.rtrim();
    assert_eq!(sanitizer.process("--value--")?, "--value");

    let sanitizer = sanitizer.trim();
    assert_eq!(sanitizer.process("--value--")?, "value");
    Ok(())
}

#[test]
fn test_exact_length() -> Result<()> {
    let sanitizer = Sanitizer::ascii(true).len_exact(8);
    assert_eq!(sanitizer.process("fortress")?, "fortress");
    assert_eq!(sanitizer.process("fortres"), Err(SanitizeError::Length));
    Ok(())
}

#[test]
fn test_length_range() -> Result<()> {
    let sanitizer = Sanitizer::ascii(true).len_range(Some(2), Some(8));
    assert_eq!(sanitizer.process("fortress")?, "fortress");
    assert_eq!(sanitizer.process("fort")?, "fort");
    assert_eq!(sanitizer.process("f"), Err(SanitizeError::LengthUnderflow));
    assert_eq!(
        sanitizer.process("fortresses"),
        Err(SanitizeError::LengthOverflow)
    );
    Ok(())
}

#[test]
fn test_exact_and_range_bounds_are_mutually_exclusive() -> Result<()> {
    // configuring an exact bound clears a prior range
    let sanitizer = Sanitizer::ascii(true)
        .len_range(Some(1), Some(3))
        .len_exact(8);
    assert_eq!(sanitizer.process("fortress")?, "fortress");

    // and a range clears a prior exact bound
    let sanitizer = Sanitizer::ascii(true)
        .len_exact(8)
        .len_range(Some(1), Some(3));
    assert_eq!(
        sanitizer.process("fortress"),
        Err(SanitizeError::LengthOverflow)
    );

    // an empty range clears the length stage entirely
    let sanitizer = Sanitizer::ascii(true).len_exact(8).len_range(None, None);
    assert_eq!(sanitizer.process("fortresses")?, "fortresses");
    Ok(())
}

#[test]
fn test_unicode_length_counts_codepoints_not_bytes() -> Result<()> {
    let sanitizer = Sanitizer::utf8(true, true, false)
        .add_range(Utf8Range::Russian)
        .len_exact(6);

    let word = "привет";
    assert_eq!(word.len(), 12); // two storage bytes per codepoint
    assert_eq!(sanitizer.process(word)?, "привет");
    assert_eq!(sanitizer.process("приве"), Err(SanitizeError::Length));
    Ok(())
}

#[test]
fn test_unicode_charset_rejects_out_of_range_input() {
    let sanitizer = Sanitizer::utf8(false, false, false).add_range(Utf8Range::Arabic);
    assert_eq!(sanitizer.process("granite"), Err(SanitizeError::Charset));
    assert_eq!(sanitizer.process("уголь"), Err(SanitizeError::Charset));
}

#[test]
fn test_filter_invalid_chars_repairs_before_the_check() -> Result<()> {
    let strict = Sanitizer::utf8(false, false, false).add_range(Utf8Range::Arabic);
    assert_eq!(strict.process("abcمرحبا123"), Err(SanitizeError::Charset));

    let repairing = Sanitizer::utf8(false, false, true).add_range(Utf8Range::Arabic);
    assert_eq!(repairing.process("abcمرحبا123")?, "مرحبا");
    Ok(())
}

#[test]
fn test_pattern_match_runs_after_case_change() {
    // case change happens before matching, so an uppercase value cannot
    // satisfy a lowercase-anchored pattern
    let sanitizer = Sanitizer::ascii(true)
        .upper_case()
        .match_pattern(Regex::new("^[a-z ]+$").unwrap());
    assert_eq!(
        sanitizer.process("granite"),
        Err(SanitizeError::PatternMatch)
    );
}

#[test]
fn test_pattern_match() -> Result<()> {
    let sanitizer =
        Sanitizer::ascii(true).match_pattern(Regex::new(r"^\w+(\s\w+)*$").unwrap());
    assert_eq!(sanitizer.process("Granite")?, "Granite");
    assert_eq!(sanitizer.process("Granite Labs")?, "Granite Labs");
    assert_eq!(sanitizer.process("GraniteLabs")?, "GraniteLabs");
    assert_eq!(
        sanitizer.process("Granite #Labs"),
        Err(SanitizeError::PatternMatch)
    );
    Ok(())
}

#[test]
fn test_enum_membership() -> Result<()> {
    let sanitizer = Sanitizer::ascii(true).one_of(["yes", "no", "maybe"]);
    assert_eq!(sanitizer.process("yes")?, "yes");
    assert_eq!(sanitizer.process("maybe")?, "maybe");
    assert_eq!(sanitizer.process("what"), Err(SanitizeError::Enum));

    // an empty list disables the stage
    let sanitizer = Sanitizer::ascii(true).one_of(Vec::<String>::new());
    assert_eq!(sanitizer.process("what")?, "what");
    Ok(())
}

#[test]
fn test_custom_transform() -> Result<()> {
    let sanitizer = Sanitizer::ascii(true).transform(|value| Some(format!("{value}!")));
    assert_eq!(sanitizer.process("granite")?, "granite!");

    let sanitizer = sanitizer.transform(|_| None);
    assert_eq!(
        sanitizer.process("granite"),
        Err(SanitizeError::CallbackType)
    );

    let sanitizer = sanitizer.clear_transform();
    assert_eq!(sanitizer.process("granite")?, "granite");
    Ok(())
}

#[test]
fn test_process_nullable() -> Result<()> {
    let sanitizer = Sanitizer::ascii(true).len_range(Some(2), Some(8));
    assert_eq!(sanitizer.process_nullable(Some("test"), false)?, Some("test".to_string()));
    assert_eq!(sanitizer.process_nullable(None, false)?, None);
    assert_eq!(sanitizer.process_nullable(Some(""), true)?, None);
    Ok(())
}

#[test]
fn test_dynamic_boundary_rejects_non_strings() -> Result<()> {
    let sanitizer = Sanitizer::ascii(true);
    assert_eq!(sanitizer.process_value(&json!("test"))?, "test");
    assert_eq!(sanitizer.process_value(&json!(42)), Err(SanitizeError::Type));
    assert_eq!(
        sanitizer.process_value(&Value::Null),
        Err(SanitizeError::Type)
    );

    assert_eq!(sanitizer.process_nullable_value(&Value::Null, false)?, None);
    assert_eq!(sanitizer.process_nullable_value(&json!(""), true)?, None);
    assert_eq!(
        sanitizer.process_nullable_value(&json!(["test"]), true),
        Err(SanitizeError::Type)
    );
    Ok(())
}
