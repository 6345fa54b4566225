//! Command implementations behind the `dexter` binary.
//!
//! Each command takes its collaborators (validator, randomizer, writer) as
//! arguments so the binary wires real stdio while tests pass buffers.

use crate::analyzer;
use crate::model::error::{AppError, RandomError};
use crate::model::prompt::{PromptRequest, ValidatedValue, ValueKind};
use crate::model::report::FileAnalysis;
use crate::random::Randomizer;
use crate::source::LineSource;
use crate::util;
use crate::validator::InputValidator;
use rand::Rng;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Prompt shown when `analyze` is run without a path.
pub const PATH_PROMPT: &str = "Ruta del archivo";

/// Prompt shown when `ask` is run without prompt text.
pub const VALUE_PROMPT: &str = "Valor";

/// What the `random` command generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RandomKind {
    /// Integer in `[min, max)`.
    Int,
    /// 64-bit integer in `[min, max)`.
    Long,
    /// Hundredths in `[min, max)` divided by 100.
    Double,
    /// `true` or `false`.
    Bool,
    /// Eight digits and a letter.
    Id,
    /// Given and family name.
    Name,
    /// Three-part title.
    Title,
}

/// Analyze `path`, asking for it first when absent, and print the report.
///
/// # Errors
///
/// Returns `AppError::Prompt` if no path could be read, `AppError::Input` if
/// the file cannot be read, and `AppError::Console` if printing fails.
pub fn run_analyze<S, W, E, O>(
    path: Option<PathBuf>,
    validator: &mut InputValidator<S, W, E>,
    out: &mut O,
) -> Result<FileAnalysis, AppError>
where
    S: LineSource,
    W: Write,
    E: Write,
    O: Write,
{
    let path = match path {
        Some(path) => path,
        None => PathBuf::from(validator.request_text(PATH_PROMPT)?),
    };

    let analysis = analyzer::analyze(&path)?;
    analyzer::write_report(&analysis, out)?;
    Ok(analysis)
}

/// Ask for one value of `kind` and echo it.
///
/// # Errors
///
/// Returns `AppError::InvalidPrompt` for blank prompt text and
/// `AppError::Prompt` if the validator gives up.
pub fn run_ask<S, W, E, O>(
    kind: ValueKind,
    prompt: Option<String>,
    validator: &mut InputValidator<S, W, E>,
    out: &mut O,
) -> Result<ValidatedValue, AppError>
where
    S: LineSource,
    W: Write,
    E: Write,
    O: Write,
{
    let request = PromptRequest::new(prompt.unwrap_or_else(|| VALUE_PROMPT.to_string()), kind)?;
    let value = validator.request(&request)?;
    info!(kind = %value.kind(), "Value accepted");
    writeln!(out, "{value}")?;
    Ok(value)
}

/// Print `count` random values of `kind`, one per line.
///
/// `min`/`max` are only used by the numeric kinds.
///
/// # Errors
///
/// Returns `AppError::Random` for an empty range or a range that does not
/// fit 32 bits when `kind` needs it.
pub fn run_random<R, O>(
    kind: RandomKind,
    min: i64,
    max: i64,
    count: u32,
    randomizer: &mut Randomizer<R>,
    out: &mut O,
) -> Result<Vec<String>, AppError>
where
    R: Rng,
    O: Write,
{
    let mut values = Vec::new();
    for _ in 0..count {
        let value = match kind {
            RandomKind::Int => {
                let (lo, hi) = narrow(min, max)?;
                randomizer.next_int(lo, hi)?.to_string()
            }
            RandomKind::Long => randomizer.next_long(min, max)?.to_string(),
            RandomKind::Double => {
                let (lo, hi) = narrow(min, max)?;
                format!("{:.2}", randomizer.next_double(lo, hi)?)
            }
            RandomKind::Bool => randomizer.next_boolean().to_string(),
            RandomKind::Id => randomizer.identifier(),
            RandomKind::Name => randomizer.full_name(),
            RandomKind::Title => randomizer.title(),
        };
        writeln!(out, "{value}")?;
        values.push(value);
    }
    Ok(values)
}

fn narrow(min: i64, max: i64) -> Result<(i32, i32), RandomError> {
    match (i32::try_from(min), i32::try_from(max)) {
        (Ok(lo), Ok(hi)) => Ok((lo, hi)),
        _ => Err(RandomError::OutOfRange { min, max }),
    }
}

/// Print whether `number` is prime.
///
/// # Errors
///
/// Returns `AppError::Console` if printing fails.
pub fn run_prime<O: Write>(number: i64, out: &mut O) -> Result<bool, AppError> {
    let prime = util::is_prime(number);
    if prime {
        writeln!(out, "{number} es primo")?;
    } else {
        writeln!(out, "{number} no es primo")?;
    }
    Ok(prime)
}

/// Print `text` framed by `=` rules.
///
/// # Errors
///
/// Returns `AppError::Console` if printing fails.
pub fn run_banner<O: Write>(text: &str, out: &mut O) -> Result<(), AppError> {
    writeln!(out, "{}", util::banner(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;

    type Scripted = InputValidator<VecDeque<String>, Vec<u8>, Vec<u8>>;

    fn scripted(lines: &[&str]) -> Scripted {
        let script = lines.iter().map(|s| s.to_string()).collect();
        InputValidator::new(script, Vec::new(), Vec::new())
    }

    #[test]
    fn analyze_prompts_for_missing_path() {
        let test_file = std::env::temp_dir().join("dexter_run_analyze_prompt.txt");
        fs::write(&test_file, "hola\nmundo\n").unwrap();

        let mut validator = scripted(&["", test_file.to_str().unwrap()]);
        let mut out = Vec::new();
        let result = run_analyze(None, &mut validator, &mut out);

        let _ = fs::remove_file(&test_file);

        let analysis = result.unwrap();
        assert_eq!(analysis.total, 9);
        let report = String::from_utf8(out).unwrap();
        assert!(report.ends_with("Total = 9 caracteres\n"));

        let (_, prompts, _) = validator.into_parts();
        let prompts = String::from_utf8(prompts).unwrap();
        assert_eq!(prompts.matches(PATH_PROMPT).count(), 2);
    }

    #[test]
    fn analyze_with_path_does_not_prompt() {
        let test_file = std::env::temp_dir().join("dexter_run_analyze_direct.txt");
        fs::write(&test_file, "x\n").unwrap();

        let mut validator = scripted(&[]);
        let mut out = Vec::new();
        let result = run_analyze(Some(test_file.clone()), &mut validator, &mut out);

        let _ = fs::remove_file(&test_file);

        assert_eq!(result.unwrap().total, 1);
        let (_, prompts, _) = validator.into_parts();
        assert!(prompts.is_empty());
    }

    #[test]
    fn analyze_missing_file_prints_nothing() {
        let missing = std::env::temp_dir().join("dexter_run_analyze_missing_98765.txt");
        let mut validator = scripted(&[]);
        let mut out = Vec::new();

        let result = run_analyze(Some(missing), &mut validator, &mut out);

        assert!(matches!(
            result,
            Err(AppError::Input(crate::model::InputError::FileNotFound { .. }))
        ));
        assert!(out.is_empty(), "No partial output on failure");
    }

    #[test]
    fn ask_echoes_validated_value() {
        let mut validator = scripted(&["abc", "12"]);
        let mut out = Vec::new();

        let value = run_ask(ValueKind::Long, None, &mut validator, &mut out).unwrap();

        assert_eq!(value, ValidatedValue::Long(12));
        assert_eq!(String::from_utf8(out).unwrap(), "12\n");
    }

    #[test]
    fn ask_rejects_blank_prompt_text() {
        let mut validator = scripted(&["1"]);
        let result = run_ask(
            ValueKind::Integer,
            Some("  ".to_string()),
            &mut validator,
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(AppError::InvalidPrompt(_))));
    }

    #[test]
    fn random_prints_requested_count() {
        let mut randomizer = Randomizer::seeded(1);
        let mut out = Vec::new();

        let values =
            run_random(RandomKind::Int, 0, 10, 5, &mut randomizer, &mut out).unwrap();

        assert_eq!(values.len(), 5);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 5);
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let first = run_random(
            RandomKind::Title,
            0,
            1,
            3,
            &mut Randomizer::seeded(8),
            &mut Vec::new(),
        )
        .unwrap();
        let second = run_random(
            RandomKind::Title,
            0,
            1,
            3,
            &mut Randomizer::seeded(8),
            &mut Vec::new(),
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_int_rejects_wide_range() {
        let result = run_random(
            RandomKind::Int,
            0,
            i64::from(i32::MAX) + 1,
            1,
            &mut Randomizer::seeded(0),
            &mut Vec::new(),
        );
        assert!(matches!(
            result,
            Err(AppError::Random(RandomError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn random_long_accepts_wide_range() {
        let values = run_random(
            RandomKind::Long,
            0,
            i64::MAX,
            2,
            &mut Randomizer::seeded(0),
            &mut Vec::new(),
        )
        .unwrap();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn random_double_prints_two_decimals() {
        let values = run_random(
            RandomKind::Double,
            100,
            200,
            4,
            &mut Randomizer::seeded(2),
            &mut Vec::new(),
        )
        .unwrap();
        for value in values {
            let (_, decimals) = value.split_once('.').unwrap();
            assert_eq!(decimals.len(), 2, "{value}");
        }
    }

    #[test]
    fn random_empty_range_is_error() {
        let result = run_random(
            RandomKind::Long,
            3,
            3,
            1,
            &mut Randomizer::seeded(0),
            &mut Vec::new(),
        );
        assert!(matches!(
            result,
            Err(AppError::Random(RandomError::EmptyRange { min: 3, max: 3 }))
        ));
    }

    #[test]
    fn prime_reports_result() {
        let mut out = Vec::new();
        assert!(run_prime(13, &mut out).unwrap());
        assert!(!run_prime(15, &mut out).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "13 es primo\n15 no es primo\n"
        );
    }

    #[test]
    fn banner_prints_framed_text() {
        let mut out = Vec::new();
        run_banner("Hola", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "==== Hola ====\n");
    }
}
