//! Configuration validation and error reporting

use std::path::Path;

use super::types::Config;
use crate::error::Result;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(dest) = &config.dest_rules_path {
            if dest.trim().is_empty() {
                anyhow::bail!("dest_rules_path cannot be empty");
            }
            if Path::new(dest).is_absolute() {
                anyhow::bail!("dest_rules_path must be relative, got {dest}");
            }
        }

        if let Some(language) = &config.language
            && (language.trim().is_empty() || language.contains(['/', '\\']))
        {
            anyhow::bail!("language must be a bare name, got '{language}'");
        }

        if config.tool.as_deref().is_some_and(|tool| tool.trim().is_empty()) {
            anyhow::bail!("tool cannot be empty");
        }

        Ok(())
    }
}
