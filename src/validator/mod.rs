//! Validated console input.
//!
//! [`InputValidator`] prompts until the operator supplies a line that
//! satisfies the requested [`ValueKind`]. Malformed input is never surfaced to
//! the caller: each rejection prints a one-line diagnostic and the prompt is
//! shown again.
//!
//! # State machine
//!
//! ```text
//! AwaitingInput --non-empty line--> Parsing --ok--> Accepted
//!       ^                              |
//!       +-------- parse failure -------+
//! ```
//!
//! The loop is unbounded unless `max_attempts` is configured. The only other
//! exits are the source closing ([`PromptError::EndOfInput`]) and I/O failure.

use crate::model::error::{ParseError, PromptError};
use crate::model::prompt::{PromptRequest, ValidatedValue, ValueKind};
use crate::source::{ConsoleSource, LineSource};
use std::io::{self, Stderr, StdinLock, Stdout, Write};
use std::num::NonZeroU32;
use std::panic::Location;
use std::str::FromStr;
use tracing::{debug, warn};

/// Console front end that only ever returns valid values.
///
/// Generic over the line source and the two output streams so that tests can
/// script the operator and capture what was printed.
pub struct InputValidator<S, W, E> {
    source: S,
    out: W,
    err: E,
    max_attempts: Option<NonZeroU32>,
}

impl InputValidator<ConsoleSource<StdinLock<'static>>, Stdout, Stderr> {
    /// Validator bound to the process stdin, stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(ConsoleSource::stdin(), io::stdout(), io::stderr())
    }
}

impl<S: LineSource, W: Write, E: Write> InputValidator<S, W, E> {
    /// Create an unbounded validator.
    ///
    /// Prompts go to `out`, diagnostics to `err`.
    pub fn new(source: S, out: W, err: E) -> Self {
        Self {
            source,
            out,
            err,
            max_attempts: None,
        }
    }

    /// Cap the number of reads per request. `None` means unbounded.
    pub fn with_max_attempts(mut self, max_attempts: Option<NonZeroU32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The configured attempt cap.
    pub fn max_attempts(&self) -> Option<NonZeroU32> {
        self.max_attempts
    }

    /// Give back the source and both writers.
    pub fn into_parts(self) -> (S, W, E) {
        (self.source, self.out, self.err)
    }

    /// Read a non-empty line, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] only if the source closes, fails, or the
    /// attempt cap is reached.
    #[track_caller]
    pub fn request_text(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.acquire(prompt, |line| Ok(line.to_string()))
    }

    /// Read a base-10 32-bit integer.
    ///
    /// # Errors
    ///
    /// See [`InputValidator::request_text`].
    #[track_caller]
    pub fn request_integer(&mut self, prompt: &str) -> Result<i32, PromptError> {
        self.acquire(prompt, |line| parse_number(line, ValueKind::Integer))
    }

    /// Read a base-10 64-bit integer.
    ///
    /// # Errors
    ///
    /// See [`InputValidator::request_text`].
    #[track_caller]
    pub fn request_long(&mut self, prompt: &str) -> Result<i64, PromptError> {
        self.acquire(prompt, |line| parse_number(line, ValueKind::Long))
    }

    /// Read a finite floating point number.
    ///
    /// # Errors
    ///
    /// See [`InputValidator::request_text`].
    #[track_caller]
    pub fn request_decimal(&mut self, prompt: &str) -> Result<f64, PromptError> {
        self.acquire(prompt, parse_decimal)
    }

    /// Read whatever `request` asks for.
    ///
    /// # Errors
    ///
    /// See [`InputValidator::request_text`].
    #[track_caller]
    pub fn request(&mut self, request: &PromptRequest) -> Result<ValidatedValue, PromptError> {
        let prompt = request.text();
        match request.kind() {
            ValueKind::Text => self.request_text(prompt).map(ValidatedValue::Text),
            ValueKind::Integer => self.request_integer(prompt).map(ValidatedValue::Integer),
            ValueKind::Long => self.request_long(prompt).map(ValidatedValue::Long),
            ValueKind::Decimal => self.request_decimal(prompt).map(ValidatedValue::Decimal),
        }
    }

    #[track_caller]
    fn acquire<T, P>(&mut self, prompt: &str, parse: P) -> Result<T, PromptError>
    where
        P: Fn(&str) -> Result<T, ParseError>,
    {
        let origin = Location::caller();
        let mut attempts: u32 = 0;

        loop {
            if let Some(max) = self.max_attempts {
                if attempts >= max.get() {
                    warn!(prompt, attempts, "Attempt limit reached");
                    return Err(PromptError::TooManyAttempts { attempts });
                }
            }
            attempts += 1;

            // AwaitingInput: prompt exactly once per read
            write!(self.out, "{prompt}: ")?;
            self.out.flush()?;

            let Some(line) = self.source.next_line()? else {
                debug!(prompt, attempts, "Input closed while awaiting value");
                return Err(PromptError::EndOfInput);
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                debug!(prompt, attempts, "Empty input, prompting again");
                continue;
            }

            // Parsing
            match parse(trimmed) {
                Ok(value) => {
                    debug!(prompt, attempts, "Input accepted");
                    return Ok(value);
                }
                Err(error) => {
                    debug!(prompt, attempts, %error, "Input rejected");
                    writeln!(self.err, "ParseError at line {}: {}", origin.line(), error)?;
                }
            }
        }
    }
}

fn parse_number<T>(text: &str, kind: ValueKind) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    text.parse::<T>().map_err(|e| ParseError::InvalidNumber {
        kind,
        text: text.to_string(),
        reason: e.to_string(),
    })
}

fn parse_decimal(text: &str) -> Result<f64, ParseError> {
    let value: f64 = parse_number(text, ValueKind::Decimal)?;
    if !value.is_finite() {
        return Err(ParseError::InvalidNumber {
            kind: ValueKind::Decimal,
            text: text.to_string(),
            reason: "value is not finite".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
