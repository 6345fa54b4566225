//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "DEXTER_CONFIG";
/// Environment variable overriding `max_attempts`.
pub const ENV_MAX_ATTEMPTS: &str = "DEXTER_MAX_ATTEMPTS";
/// Environment variable overriding `seed`.
pub const ENV_SEED: &str = "DEXTER_SEED";
/// Environment variable overriding `log_file_path`.
pub const ENV_LOG_FILE: &str = "DEXTER_LOG_FILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/dexter/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Reads allowed per prompt. `0` means unbounded.
    #[serde(default)]
    pub max_attempts: Option<u32>,

    /// Seed for the random generator.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Glyph printed by the progress bar.
    #[serde(default)]
    pub progress_glyph: Option<String>,

    /// Steps of the progress bar (prints `total + 1` glyphs).
    #[serde(default)]
    pub progress_total: Option<u32>,

    /// Pause between progress glyphs, in milliseconds.
    #[serde(default)]
    pub progress_delay_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Reads allowed per prompt; `None` is unbounded.
    pub max_attempts: Option<NonZeroU32>,
    /// Fixed seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Progress glyph.
    pub progress_glyph: String,
    /// Progress steps.
    pub progress_total: u32,
    /// Progress delay in milliseconds.
    pub progress_delay_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            max_attempts: None,
            seed: None,
            progress_glyph: crate::progress::DEFAULT_GLYPH.to_string(),
            progress_total: 20,
            progress_delay_ms: 50,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/dexter/dexter.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("dexter").join("dexter.log")
    } else {
        PathBuf::from("dexter.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/dexter/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dexter").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DEXTER_CONFIG` environment variable
/// 3. Default path `~/.config/dexter/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        max_attempts: match config.max_attempts {
            Some(n) => NonZeroU32::new(n),
            None => defaults.max_attempts,
        },
        seed: config.seed.or(defaults.seed),
        progress_glyph: config.progress_glyph.unwrap_or(defaults.progress_glyph),
        progress_total: config.progress_total.unwrap_or(defaults.progress_total),
        progress_delay_ms: config
            .progress_delay_ms
            .unwrap_or(defaults.progress_delay_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides from the process environment.
///
/// Checks `DEXTER_MAX_ATTEMPTS`, `DEXTER_SEED` and `DEXTER_LOG_FILE`.
pub fn apply_env_overrides(config: ResolvedConfig) -> ResolvedConfig {
    apply_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply environment overrides read through `lookup`.
///
/// Numeric values that fail to parse are ignored with a warning.
pub fn apply_env_overrides_from<F>(mut config: ResolvedConfig, lookup: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
        match raw.trim().parse::<u32>() {
            Ok(n) => config.max_attempts = NonZeroU32::new(n),
            Err(error) => warn!(var = ENV_MAX_ATTEMPTS, value = %raw, %error, "Ignoring override"),
        }
    }

    if let Some(raw) = lookup(ENV_SEED) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(error) => warn!(var = ENV_SEED, value = %raw, %error, "Ignoring override"),
        }
    }

    if let Some(path) = lookup(ENV_LOG_FILE) {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    max_attempts_override: Option<u32>,
    seed_override: Option<u64>,
) -> ResolvedConfig {
    if let Some(n) = max_attempts_override {
        config.max_attempts = NonZeroU32::new(n);
    }

    if let Some(seed) = seed_override {
        config.seed = Some(seed);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
