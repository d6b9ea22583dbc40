//! Configuration file parsing and merging
//!
//! This module handles:
//! - Config file discovery from multiple locations
//! - TOML parsing with serde
//! - Config merging with precedence rules
//! - Validation and error reporting
//!
//! Every setting is optional; command-line flags and environment variables
//! take precedence over anything loaded here.

mod discovery;
mod merge;
mod types;
mod validation;

use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles, GLOBAL_CONFIG_FILE, PROJECT_CONFIG_FILE};
pub use merge::ConfigMerger;
pub use types::{Config, DEFAULT_DEST_RULES_PATH};
pub use validation::ConfigValidator;

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration from all sources
    ///
    /// Project config is searched from `start_dir` upwards.
    ///
    /// # Errors
    ///
    /// Returns an error if config files are invalid or cannot be read.
    pub fn load(cli_config_path: Option<&Path>, start_dir: &Path) -> Result<Config> {
        let config_files = ConfigDiscovery::discover(cli_config_path, start_dir)?;
        Self::load_files(&config_files)
    }

    /// Merge and validate already discovered files
    ///
    /// # Errors
    ///
    /// Returns an error if config files are invalid or cannot be read.
    pub fn load_files(files: &ConfigFiles) -> Result<Config> {
        let merged = ConfigMerger::merge(files)?;
        ConfigValidator::validate(&merged)?;
        Ok(merged)
    }
}
