//! Common types and utilities for command execution

use std::path::{Path, PathBuf};

use ai_rules_link::config::{Config as FileConfig, ConfigDiscovery, ConfigFiles, ConfigManager};
use ai_rules_link::materialize::{OutputStream, ReportLine};
use ai_rules_link::{Resolution, RuleError, RuleName, SourceResolver};
use anyhow::Context;
use tracing::debug;

use crate::cli::TargetArgs;

/// State shared by every command
pub struct CommandContext {
    /// Enable verbose output
    pub verbose: bool,
    /// Directory the command was started in
    pub cwd: PathBuf,
    /// Config files that were loaded, empty under `--no-config`
    pub config_files: ConfigFiles,
    /// Merged configuration
    pub config: FileConfig,
    /// Whether `--no-config` was given
    pub no_config: bool,
}

impl CommandContext {
    /// Capture the working directory and load configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or a
    /// config file is invalid.
    pub fn load(config_path: Option<&Path>, no_config: bool, verbose: bool) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config_files, config) = if no_config {
            debug!("config files disabled");
            (ConfigFiles::default(), FileConfig::default())
        } else {
            let files = ConfigDiscovery::discover(config_path, &cwd)?;
            let config = ConfigManager::load_files(&files)?;
            (files, config)
        };
        debug!(?config, "configuration loaded");

        Ok(Self {
            verbose,
            cwd,
            config_files,
            config,
            no_config,
        })
    }

    /// Destination directory for rule files
    ///
    /// `--global` roots it at the home directory instead of the working
    /// directory. `--dest` / `DEST_RULES_PATH` beat the config file.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::HomeNotFound`] for `--global` without a home directory.
    pub fn dest_dir(&self, target: &TargetArgs) -> anyhow::Result<PathBuf> {
        let base = if target.global {
            dirs::home_dir().ok_or(RuleError::HomeNotFound)?
        } else {
            self.cwd.clone()
        };

        let relative = target
            .dest
            .as_deref()
            .filter(|dest| !dest.is_empty())
            .unwrap_or_else(|| self.config.dest_rules_path_or_default());

        Ok(base.join(relative))
    }

    /// Resolve the rule source and print why candidates were passed over
    pub fn resolve_source(&self) -> Resolution {
        let resolution = SourceResolver::from_env().resolve();
        for notice in &resolution.notices {
            println!("{notice}");
        }
        resolution
    }
}

/// Turn `--rule` values into rule names, dropping empty ones
pub fn rule_names(values: &[String]) -> Vec<RuleName> {
    values
        .iter()
        .filter(|value| !value.is_empty())
        .map(|value| RuleName::new(value.as_str()))
        .collect()
}

/// Print a report line on its stream
pub fn emit(line: &ReportLine) {
    match line.stream {
        OutputStream::Stdout => println!("{}", line.text),
        OutputStream::Stderr => eprintln!("{}", line.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names_are_verbatim() {
        let values = vec![
            "go".to_string(),
            String::new(),
            " docker".to_string(),
            "Base".to_string(),
        ];

        let names = rule_names(&values);

        assert_eq!(
            names,
            vec![
                RuleName::new("go"),
                RuleName::new(" docker"),
                RuleName::new("Base")
            ]
        );
    }
}
