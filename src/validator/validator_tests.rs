//! Tests for the validated input loop.

use super::*;
use std::collections::VecDeque;

type Scripted = InputValidator<VecDeque<String>, Vec<u8>, Vec<u8>>;

fn scripted(lines: &[&str]) -> Scripted {
    let script = lines.iter().map(|s| s.to_string()).collect();
    InputValidator::new(script, Vec::new(), Vec::new())
}

fn outputs(validator: Scripted) -> (String, String) {
    let (_, out, err) = validator.into_parts();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

// ===== request_text =====

#[test]
fn request_text_returns_first_non_empty_line() {
    let mut validator = scripted(&["hola"]);
    assert_eq!(validator.request_text("Nombre").unwrap(), "hola");
}

#[test]
fn request_text_trims_surrounding_whitespace() {
    let mut validator = scripted(&["   padded value \t"]);
    assert_eq!(validator.request_text("Nombre").unwrap(), "padded value");
}

#[test]
fn request_text_skips_blank_lines() {
    let mut validator = scripted(&["", "   ", "\t", "ok"]);
    assert_eq!(validator.request_text("Nombre").unwrap(), "ok");

    let (out, err) = outputs(validator);
    assert_eq!(out, "Nombre: Nombre: Nombre: Nombre: ");
    assert!(err.is_empty(), "Empty input is not a diagnostic: {err:?}");
}

#[test]
fn request_text_end_of_input() {
    let mut validator = scripted(&["", ""]);
    let result = validator.request_text("Nombre");
    assert!(
        matches!(result, Err(PromptError::EndOfInput)),
        "Expected EndOfInput, got: {result:?}"
    );
}

// ===== request_integer =====

#[test]
fn request_integer_parses_valid_input() {
    let mut validator = scripted(&["42"]);
    assert_eq!(validator.request_integer("Edad").unwrap(), 42);
}

#[test]
fn request_integer_accepts_sign() {
    let mut validator = scripted(&["-17", "+5"]);
    assert_eq!(validator.request_integer("a").unwrap(), -17);
    assert_eq!(validator.request_integer("b").unwrap(), 5);
}

#[test]
fn request_integer_reprompts_after_blank_and_malformed_lines() {
    let mut validator = scripted(&["", "  ", "7x", "42"]);
    assert_eq!(validator.request_integer("Edad").unwrap(), 42);

    let (out, err) = outputs(validator);
    assert_eq!(out.matches("Edad: ").count(), 4, "One prompt per read");
    assert_eq!(err.lines().count(), 1, "Only the malformed line is reported");
    assert!(err.starts_with("ParseError at line "));
    assert!(err.contains("\"7x\""));
}

#[test]
fn request_integer_does_not_reuse_invalid_text() {
    let mut validator = scripted(&["abc", "1"]);
    assert_eq!(validator.request_integer("n").unwrap(), 1);
    let (source, _, _) = validator.into_parts();
    assert!(source.is_empty(), "Both lines consumed");
}

#[test]
fn request_integer_rejects_out_of_range() {
    let mut validator = scripted(&["2147483648", "2147483647"]);
    assert_eq!(validator.request_integer("n").unwrap(), i32::MAX);

    let (_, err) = outputs(validator);
    assert!(err.contains("2147483648"));
}

#[test]
fn request_integer_rejects_decimal_text() {
    let mut validator = scripted(&["3.5", "3"]);
    assert_eq!(validator.request_integer("n").unwrap(), 3);
}

#[test]
fn diagnostic_reports_the_call_site_line() {
    let mut validator = scripted(&["x", "1"]);
    let expected_line = line!() + 1;
    validator.request_integer("n").unwrap();

    let (_, err) = outputs(validator);
    assert!(
        err.starts_with(&format!("ParseError at line {expected_line}: ")),
        "got: {err}"
    );
}

// ===== request_long / request_decimal =====

#[test]
fn request_long_accepts_values_beyond_i32() {
    let mut validator = scripted(&["9999999999"]);
    assert_eq!(validator.request_long("n").unwrap(), 9_999_999_999);
}

#[test]
fn request_long_reprompts_on_malformed_input() {
    let mut validator = scripted(&["ten", "10"]);
    assert_eq!(validator.request_long("n").unwrap(), 10);
}

#[test]
fn request_decimal_parses_fraction() {
    let mut validator = scripted(&["2.75"]);
    assert_eq!(validator.request_decimal("x").unwrap(), 2.75);
}

#[test]
fn request_decimal_rejects_non_finite() {
    let mut validator = scripted(&["NaN", "inf", "1e3"]);
    assert_eq!(validator.request_decimal("x").unwrap(), 1000.0);

    let (_, err) = outputs(validator);
    assert_eq!(err.lines().count(), 2);
    assert!(err.contains("not finite"));
}

// ===== request =====

#[test]
fn request_dispatches_on_kind() {
    let mut validator = scripted(&["texto", "1", "2", "0.5"]);

    let text = PromptRequest::new("t", ValueKind::Text).unwrap();
    let int = PromptRequest::new("i", ValueKind::Integer).unwrap();
    let long = PromptRequest::new("l", ValueKind::Long).unwrap();
    let dec = PromptRequest::new("d", ValueKind::Decimal).unwrap();

    assert_eq!(
        validator.request(&text).unwrap(),
        ValidatedValue::Text("texto".to_string())
    );
    assert_eq!(validator.request(&int).unwrap(), ValidatedValue::Integer(1));
    assert_eq!(validator.request(&long).unwrap(), ValidatedValue::Long(2));
    assert_eq!(validator.request(&dec).unwrap(), ValidatedValue::Decimal(0.5));
}

// ===== max_attempts =====

#[test]
fn unbounded_by_default() {
    let validator = scripted(&[]);
    assert_eq!(validator.max_attempts(), None);
}

#[test]
fn max_attempts_stops_after_limit() {
    let mut validator =
        scripted(&["a", "b", "c", "4"]).with_max_attempts(NonZeroU32::new(3));

    let result = validator.request_integer("n");
    assert!(
        matches!(result, Err(PromptError::TooManyAttempts { attempts: 3 })),
        "Expected TooManyAttempts after 3, got: {result:?}"
    );

    let (source, _, _) = validator.into_parts();
    assert_eq!(source.len(), 1, "Fourth line must not be read");
}

#[test]
fn max_attempts_counts_empty_lines() {
    let mut validator = scripted(&["", "", "hi"]).with_max_attempts(NonZeroU32::new(2));
    let result = validator.request_text("t");
    assert!(matches!(
        result,
        Err(PromptError::TooManyAttempts { attempts: 2 })
    ));
}

#[test]
fn max_attempts_allows_success_on_last_attempt() {
    let mut validator = scripted(&["x", "5"]).with_max_attempts(NonZeroU32::new(2));
    assert_eq!(validator.request_integer("n").unwrap(), 5);
}

#[test]
fn max_attempts_resets_per_request() {
    let mut validator = scripted(&["x", "1", "y", "2"]).with_max_attempts(NonZeroU32::new(2));
    assert_eq!(validator.request_integer("a").unwrap(), 1);
    assert_eq!(validator.request_integer("b").unwrap(), 2);
}

// ===== I/O =====

struct FailingSource;

impl LineSource for FailingSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
    }
}

#[test]
fn source_failure_propagates_as_io() {
    let mut validator = InputValidator::new(FailingSource, Vec::new(), Vec::new());
    let result = validator.request_text("t");
    assert!(
        matches!(result, Err(PromptError::Io(_))),
        "Expected Io, got: {result:?}"
    );
}

#[test]
fn console_source_drives_validator() {
    let data = b"\n 12 \n";
    let source = ConsoleSource::from_reader(&data[..]);
    let mut validator = InputValidator::new(source, Vec::new(), Vec::new());
    assert_eq!(validator.request_integer("n").unwrap(), 12);
}

#[test]
fn invalid_utf8_line_is_rejected_and_reprompted() {
    let data = b"\xff\xfe\n42\n";
    let source = ConsoleSource::from_reader(&data[..]);
    let mut validator = InputValidator::new(source, Vec::new(), Vec::new());

    assert_eq!(validator.request_integer("n").unwrap(), 42);

    let (_, out, err) = validator.into_parts();
    assert_eq!(String::from_utf8(out).unwrap().matches("n: ").count(), 2);
    assert_eq!(String::from_utf8(err).unwrap().lines().count(), 1);
}

#[test]
fn invalid_utf8_text_is_accepted_with_replacement() {
    let data = b"caf\xe9\n";
    let source = ConsoleSource::from_reader(&data[..]);
    let mut validator = InputValidator::new(source, Vec::new(), Vec::new());

    assert_eq!(validator.request_text("t").unwrap(), "caf\u{FFFD}");
}
