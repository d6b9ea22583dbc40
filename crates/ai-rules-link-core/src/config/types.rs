//! Configuration types and structures

use serde::{Deserialize, Serialize};

/// Destination used when neither flag, environment nor config sets one
pub const DEFAULT_DEST_RULES_PATH: &str = ".cursor/rules";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Destination directory for rules, relative to the project or home root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_rules_path: Option<String>,

    /// Default tool identifier for `init`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    /// Default language for `init`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Overwrite user-modified copies
    #[serde(default)]
    pub force: bool,
}

impl Config {
    /// Destination path, falling back to the default
    #[must_use]
    pub fn dest_rules_path_or_default(&self) -> &str {
        self.dest_rules_path
            .as_deref()
            .unwrap_or(DEFAULT_DEST_RULES_PATH)
    }
}
