//! Configuration module
//!
//! This module handles:
//! - Analyst configuration (roulette-analyst.toml)
//! - Pattern skip lists
//! - CLI output defaults

mod analyst_config;

pub use analyst_config::{
    load_config, load_config_file, user_config_path, AnalystConfig, OutputConfig,
    PatternsConfig, CONFIG_FILE_NAME, DEFAULT_CONFIG,
};
