//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod prompt;
pub mod report;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError, PromptError, RandomError};
pub use prompt::{InvalidPrompt, PromptRequest, ValidatedValue, ValueKind};
pub use report::{total_characters, FileAnalysis, LineCount};
