//! Dexter - Entry Point

use clap::{Parser, Subcommand};
use dexter::commands::{self, RandomKind};
use dexter::config::ResolvedConfig;
use dexter::model::{AppError, ValueKind};
use dexter::progress::ProgressBar;
use dexter::random::Randomizer;
use dexter::validator::InputValidator;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

/// Dexter - console toolkit for validated prompts, file reports and random data
#[derive(Parser, Debug)]
#[command(name = "dexter")]
#[command(version)]
#[command(about = "Console toolkit: validated prompts, file line reports, seeded random values")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reads allowed per prompt (0 = unbounded)
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    /// Seed for reproducible random values
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Count the characters of every line in a text file
    Analyze {
        /// File to analyze (prompted for if omitted)
        path: Option<PathBuf>,
    },

    /// Prompt until a valid value is entered, then print it
    Ask {
        /// Type of value to accept
        #[arg(value_enum)]
        kind: ValueKind,

        /// Prompt text
        prompt: Option<String>,
    },

    /// Generate random values
    Random {
        /// What to generate
        #[arg(value_enum)]
        kind: RandomKind,

        /// Inclusive lower bound for numeric kinds
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        min: i64,

        /// Exclusive upper bound for numeric kinds
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        max: i64,

        /// How many values to print (must be positive)
        #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },

    /// Draw a progress bar
    Progress {
        /// Steps (prints total + 1 glyphs)
        #[arg(long)]
        total: Option<u32>,

        /// Pause between glyphs in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Glyph to print
        #[arg(long)]
        glyph: Option<String>,
    },

    /// Check whether a number is prime
    Prime {
        /// Number to test
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },

    /// Print text framed by '=' rules
    Banner {
        /// Text to frame
        text: String,
    },
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = dexter::config::load_config_with_precedence(args.config.clone())?;
        let merged = dexter::config::merge_config(config_file);
        let with_env = dexter::config::apply_env_overrides(merged);
        dexter::config::apply_cli_overrides(with_env, args.max_attempts, args.seed)
    };

    dexter::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let (result, elapsed) = dexter::timing::measure(|| run(args.command, &config));
    info!(elapsed = ?elapsed, ok = result.is_ok(), "Command finished");

    result?;
    Ok(())
}

fn run(command: Command, config: &ResolvedConfig) -> Result<(), AppError> {
    let mut out = io::stdout().lock();

    match command {
        Command::Analyze { path } => {
            let mut validator = InputValidator::stdio().with_max_attempts(config.max_attempts);
            commands::run_analyze(path, &mut validator, &mut out)?;
        }
        Command::Ask { kind, prompt } => {
            let mut validator = InputValidator::stdio().with_max_attempts(config.max_attempts);
            commands::run_ask(kind, prompt, &mut validator, &mut out)?;
        }
        Command::Random {
            kind,
            min,
            max,
            count,
        } => {
            let mut randomizer = match config.seed {
                Some(seed) => Randomizer::seeded(seed),
                None => Randomizer::from_entropy(),
            };
            commands::run_random(kind, min, max, count, &mut randomizer, &mut out)?;
        }
        Command::Progress {
            total,
            delay_ms,
            glyph,
        } => {
            let bar = ProgressBar::new(
                glyph.unwrap_or_else(|| config.progress_glyph.clone()),
                total.unwrap_or(config.progress_total),
                Duration::from_millis(delay_ms.unwrap_or(config.progress_delay_ms)),
            );
            bar.run(&mut out);
        }
        Command::Prime { number } => {
            commands::run_prime(number, &mut out)?;
        }
        Command::Banner { text } => {
            commands::run_banner(&text, &mut out)?;
        }
    }

    Ok(())
}
