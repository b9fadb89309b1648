//! CLI command definitions and handlers

mod analyze;
mod init;
mod patterns;
mod session;
mod wheel;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roulette_analyst::config::{load_config, AnalystConfig};
use roulette_analyst::reporters::OutputFormat;
use roulette_analyst::{Analyst, PatternEngine, PatternEngineBuilder, WheelTables};
use std::path::PathBuf;

/// Parse and validate a pocket number (0-36)
fn parse_pocket(s: &str) -> Result<u8, String> {
    let n: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n > roulette_analyst::wheel::MAX_NUMBER {
        Err("number must be between 0 and 36".to_string())
    } else {
        Ok(n)
    }
}

/// Parse a spin value. All-digit tokens too long for i64 saturate so they
/// are ignored as out of range rather than rejected.
pub(crate) fn parse_spin(s: &str) -> Result<i64, String> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Ok(n);
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(if negative { i64::MIN } else { i64::MAX })
    } else {
        Err(format!("'{}' is not a valid number", s))
    }
}

/// Roulette Analyst - pattern hints over a rolling spin history
#[derive(Parser, Debug)]
#[command(name = "roulette-analyst")]
#[command(
    version,
    about = "Track the last 20 roulette spins and get a pattern-based betting region",
    after_help = "\
Examples:
  roulette-analyst analyze 3 3 3 20 10      Analyze spins given oldest first
  roulette-analyst analyze 3 3 3 20 10 -f json
  roulette-analyst session                  Interactive mode (type numbers, 'clear', 'quit')
  roulette-analyst wheel 17                 Show table data for a number
  roulette-analyst patterns                 List patterns in priority order
  roulette-analyst init                     Write a default roulette-analyst.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Config file (default: ./roulette-analyst.toml, then the user config dir)
    #[arg(long, global = true, env = "ROULETTE_ANALYST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a sequence of spins, given oldest first
    Analyze {
        /// Spins in the order they landed; values outside 0-36 are ignored
        #[arg(allow_negative_numbers = true, value_parser = parse_spin)]
        numbers: Vec<i64>,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Skip specific patterns
        #[arg(long)]
        skip_pattern: Vec<String>,
    },

    /// Interactive session reading spins from stdin
    Session {
        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Skip specific patterns
        #[arg(long)]
        skip_pattern: Vec<String>,
    },

    /// Show wheel table data for a number
    Wheel {
        /// Pocket number (0-36)
        #[arg(value_parser = parse_pocket)]
        number: u8,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// List enabled patterns in evaluation order
    Patterns {
        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Skip specific patterns
        #[arg(long)]
        skip_pattern: Vec<String>,
    },

    /// Write a roulette-analyst.toml with default settings
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Output settings resolved from config and flags
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputSettings {
    pub format: OutputFormat,
    pub color: bool,
}

impl OutputSettings {
    fn resolve(config: &AnalystConfig, format: Option<&str>, no_color: bool) -> Result<Self> {
        let format: OutputFormat = format.unwrap_or(config.output.format.as_str()).parse()?;
        let color = config.output.color && !no_color && console::colors_enabled();
        Ok(Self { format, color })
    }
}

/// Build the pattern engine honouring configured and requested skips
fn build_engine(config: &AnalystConfig) -> Result<PatternEngine> {
    Ok(PatternEngineBuilder::new()
        .skip_named(&config.patterns.skip)?
        .build())
}

fn build_analyst(config: &AnalystConfig) -> Result<Analyst> {
    Ok(Analyst::with_engine(
        WheelTables::european()?,
        build_engine(config)?,
    ))
}

fn load(cli_config: Option<&std::path::Path>) -> Result<AnalystConfig> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    load_config(cli_config, &cwd)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            numbers,
            format,
            skip_pattern,
        } => {
            let config = load(cli.config.as_deref())?.with_extra_skips(skip_pattern);
            let output = OutputSettings::resolve(&config, format.as_deref(), cli.no_color)?;
            let mut analyst = build_analyst(&config)?;
            analyze::run(&mut analyst, &numbers, output)
        }

        Commands::Session {
            format,
            skip_pattern,
        } => {
            let config = load(cli.config.as_deref())?.with_extra_skips(skip_pattern);
            let output = OutputSettings::resolve(&config, format.as_deref(), cli.no_color)?;
            let mut analyst = build_analyst(&config)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            session::run(&mut analyst, stdin.lock(), stdout.lock(), output)
        }

        Commands::Wheel { number, format } => {
            let config = load(cli.config.as_deref())?;
            let output = OutputSettings::resolve(&config, format.as_deref(), cli.no_color)?;
            wheel::run(number, output)
        }

        Commands::Patterns {
            format,
            skip_pattern,
        } => {
            let config = load(cli.config.as_deref())?.with_extra_skips(skip_pattern);
            let output = OutputSettings::resolve(&config, format.as_deref(), cli.no_color)?;
            patterns::run(&build_engine(&config)?, output)
        }

        Commands::Init { path } => init::run(&path),
    }
}
