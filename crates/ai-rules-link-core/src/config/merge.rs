//! Configuration merging with precedence rules
//!
//! - Optional values: the highest-precedence file that sets one wins
//! - `force`: OR semantics, any file enabling it enables it

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::Result;

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge discovered config files
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. Project config
    /// 3. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = Config::default();

        // Lowest to highest so later files override
        for path in files.iter() {
            Self::merge_into(&mut merged, path)?;
        }

        Ok(merged)
    }

    /// Load and merge a single config file into the existing config
    fn merge_into(base: &mut Config, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if config.dest_rules_path.is_some() {
            base.dest_rules_path = config.dest_rules_path;
        }
        if config.tool.is_some() {
            base.tool = config.tool;
        }
        if config.language.is_some() {
            base.language = config.language;
        }
        base.force |= config.force;

        Ok(())
    }
}
