//! Prompt requests and the values they produce.
//!
//! A [`PromptRequest`] can only be built with non-empty prompt text.
//! A [`ValidatedValue`] is only ever produced by the input validator.

use std::fmt;

/// The type of value a prompt expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ValueKind {
    /// Any non-empty line, trimmed.
    Text,
    /// Base-10 32-bit signed integer.
    Integer,
    /// Base-10 64-bit signed integer.
    Long,
    /// Floating point number.
    Decimal,
}

impl ValueKind {
    /// Lowercase name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Long => "long",
            ValueKind::Decimal => "decimal",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prompt text paired with the kind of value expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    text: String,
    kind: ValueKind,
}

impl PromptRequest {
    /// Smart constructor: rejects empty or whitespace-only prompt text.
    pub fn new(text: impl Into<String>, kind: ValueKind) -> Result<Self, InvalidPrompt> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InvalidPrompt::Empty);
        }
        Ok(Self { text, kind })
    }

    /// The text shown to the operator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The expected value kind.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

/// Rejected prompt text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPrompt {
    /// Prompt text was empty after trimming.
    #[error("Prompt text cannot be empty")]
    Empty,
}

/// A value that satisfied its [`ValueKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedValue {
    /// Trimmed, non-empty text.
    Text(String),
    /// 32-bit integer.
    Integer(i32),
    /// 64-bit integer.
    Long(i64),
    /// Floating point value.
    Decimal(f64),
}

impl ValidatedValue {
    /// The kind this value satisfies.
    pub fn kind(&self) -> ValueKind {
        match self {
            ValidatedValue::Text(_) => ValueKind::Text,
            ValidatedValue::Integer(_) => ValueKind::Integer,
            ValidatedValue::Long(_) => ValueKind::Long,
            ValidatedValue::Decimal(_) => ValueKind::Decimal,
        }
    }
}

impl fmt::Display for ValidatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatedValue::Text(s) => f.write_str(s),
            ValidatedValue::Integer(n) => write!(f, "{n}"),
            ValidatedValue::Long(n) => write!(f, "{n}"),
            ValidatedValue::Decimal(d) => write!(f, "{d}"),
        }
    }
}
