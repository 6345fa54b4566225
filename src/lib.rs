//! Dexter console toolkit
//!
//! Validated console prompts, a per-line character report for text files,
//! seeded random values, a progress bar and a stopwatch.
//!
//! The core is split the same way as the binary: pure model types, a
//! validator and analyzer that take their I/O as parameters, and a thin
//! `commands` layer that wires them to the terminal.

pub mod analyzer;
pub mod commands;
pub mod config;
pub mod logging;
pub mod model;
pub mod progress;
pub mod random;
pub mod source;
pub mod timing;
pub mod util;
pub mod validator;

pub use analyzer::analyze;
pub use validator::InputValidator;
