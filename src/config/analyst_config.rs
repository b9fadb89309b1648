//! Analyst configuration support
//!
//! Loads configuration from, in order:
//! - an explicit `--config` path
//! - `roulette-analyst.toml` in the working directory
//! - `~/.config/roulette-analyst/config.toml`
//!
//! # Configuration Format
//!
//! ```toml
//! [patterns]
//! skip = ["double-half"]
//!
//! [output]
//! format = "text"
//! color = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "roulette-analyst.toml";

/// Commented default written by `init`
pub const DEFAULT_CONFIG: &str = r#"# Roulette analyst configuration

[patterns]
# Patterns to skip (double-half, horse-with-break, back-and-forth,
# false-true, terminal-domination)
skip = []

[output]
# Default output format (text, json)
format = "text"

# Colorize text output
color = true
"#;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalystConfig {
    #[serde(default)]
    pub patterns: PatternsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternsConfig {
    /// Pattern names to leave out of evaluation
    #[serde(default)]
    pub skip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: default_color(),
        }
    }
}

impl AnalystConfig {
    /// Merge CLI skip flags on top of configured ones
    pub fn with_extra_skips(mut self, extra: impl IntoIterator<Item = String>) -> Self {
        for name in extra {
            if !self.patterns.skip.contains(&name) {
                self.patterns.skip.push(name);
            }
        }
        self
    }
}

/// Get the user config file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("roulette-analyst").join("config.toml"))
}

/// Load configuration from a TOML file
pub fn load_config_file(path: &Path) -> Result<AnalystConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AnalystConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Resolve the effective configuration
///
/// An explicit path must load. Implicit locations fall back to defaults
/// with a warning when they exist but cannot be read.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<AnalystConfig> {
    if let Some(path) = explicit {
        let config = load_config_file(path)?;
        debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let candidates = std::iter::once(working_dir.join(CONFIG_FILE_NAME)).chain(user_config_path());
    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => {
                warn!("{:#}", e);
            }
        }
    }

    debug!("No config found, using defaults");
    Ok(AnalystConfig::default())
}
