//! Error types for dexter.
//!
//! Errors are split by where they originate, using `thiserror` so they compose
//! with `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the command-line front end
//!   - [`InputError`] - File access failures during analysis (never retried)
//!   - [`PromptError`] - Ways an interactive prompt can end without a value
//!   - [`RandomError`] - Invalid ranges handed to the random generator
//!
//! # Recovery Strategy
//!
//! [`ParseError`] is **non-fatal**: the input validator prints it as a
//! diagnostic and re-prompts. It never reaches a caller. File errors are fatal
//! for the current operation and propagate unchanged.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::prompt::{InvalidPrompt, ValueKind};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the file to analyze failed.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// An interactive prompt ended without producing a value.
    #[error("Prompt aborted: {0}")]
    Prompt(#[from] PromptError),

    /// A prompt was built with unusable text.
    #[error("Invalid prompt: {0}")]
    InvalidPrompt(#[from] InvalidPrompt),

    /// Random value generation was asked for an impossible range.
    #[error("Random generation failed: {0}")]
    Random(#[from] RandomError),

    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Writing to the console failed.
    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),
}

/// Errors encountered when reading a file for analysis.
///
/// The analyzer never recovers from these and never returns partial results.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dexter::model::error::InputError;
///
/// let err = InputError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.txt")
/// };
/// assert!(err.to_string().contains("/tmp/missing.txt"));
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// The path does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The path exists but could not be read as text.
    ///
    /// Covers permission errors, directories, and content that is not valid
    /// UTF-8.
    #[error("Failed to read {path}: {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A line of operator input that does not parse as the requested type.
///
/// Carries the offending text so the diagnostic can echo it back.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// Text is not a valid value of `kind`.
    #[error("For input string: \"{text}\" ({kind}: {reason})")]
    InvalidNumber {
        /// The type that was expected.
        kind: ValueKind,
        /// The trimmed text that was rejected.
        text: String,
        /// Parser message.
        reason: String,
    },
}

/// Ways an interactive prompt can finish without a validated value.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The configured attempt limit was reached.
    #[error("No valid input after {attempts} attempts")]
    TooManyAttempts {
        /// Number of reads performed.
        attempts: u32,
    },

    /// The input source closed before a valid line arrived.
    #[error("Input closed before a valid value was entered")]
    EndOfInput,

    /// Reading the source or writing the prompt failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the random value generator.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RandomError {
    /// `min` is not strictly below `max`.
    #[error("Empty range: min {min} must be less than max {max}")]
    EmptyRange {
        /// Inclusive lower bound.
        min: i64,
        /// Exclusive upper bound.
        max: i64,
    },

    /// A bound does not fit the requested 32-bit type.
    #[error("Range {min}..{max} does not fit a 32-bit integer")]
    OutOfRange {
        /// Inclusive lower bound.
        min: i64,
        /// Exclusive upper bound.
        max: i64,
    },
}
