//! Rule source resolution
//!
//! Exactly one source is authoritative per invocation. Precedence, highest
//! first:
//! 1. `$XDG_CONFIG_HOME/ai-rules` when the variable is set and the directory exists
//! 2. `~/ai-rules` when it exists
//! 3. The bundled fallback set, which always exists
//!
//! Rules from a canonical directory are symlinked; bundled rules are copied.

mod bundle;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;
use walkdir::WalkDir;

pub use bundle::{EmbeddedRules, MapBundle, RuleBundle};

use crate::error::Result;
use crate::rule::{RuleName, rule_name_from_file};

/// Directory name of the canonical rules directory under each root
pub const RULES_DIR_NAME: &str = "ai-rules";

/// Display prefix for bundled rule paths
pub const EMBEDDED_PREFIX: &str = "rules";

/// Which rule source is authoritative
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    /// `$XDG_CONFIG_HOME/ai-rules`
    Environment(PathBuf),
    /// `~/ai-rules`
    HomeDirectory(PathBuf),
    /// Bundled fallback set
    Embedded,
}

impl SourceDescriptor {
    /// Canonical directory, if the source is one
    #[must_use]
    pub fn canonical_dir(&self) -> Option<&Path> {
        match self {
            Self::Environment(dir) | Self::HomeDirectory(dir) => Some(dir),
            Self::Embedded => None,
        }
    }

    /// Whether rules come from the bundled set
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded)
    }

    /// Human-readable label used by `status`
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Environment(dir) => format!("$XDG_CONFIG_HOME/ai-rules: {}", dir.display()),
            Self::HomeDirectory(dir) => format!("~/ai-rules: {}", dir.display()),
            Self::Embedded => "embedded (copied/generated)".to_string(),
        }
    }
}

/// Outcome of source resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Selected source
    pub source: SourceDescriptor,
    /// Informational lines for every candidate that was passed over
    pub notices: Vec<String>,
}

/// Chooses the authoritative rule source
#[derive(Debug, Clone, Default)]
pub struct SourceResolver {
    config_root: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

impl SourceResolver {
    /// Create a resolver from explicit roots
    ///
    /// `config_root` plays the role of `$XDG_CONFIG_HOME`; `home_dir` the
    /// user's home directory.
    #[must_use]
    pub const fn new(config_root: Option<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            config_root,
            home_dir,
        }
    }

    /// Create a resolver from `XDG_CONFIG_HOME` and the platform home directory
    #[must_use]
    pub fn from_env() -> Self {
        let config_root = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(config_root, dirs::home_dir())
    }

    /// Resolve the authoritative source
    ///
    /// Never fails: the bundled set is always available.
    #[must_use]
    pub fn resolve(&self) -> Resolution {
        let mut notices = Vec::new();

        // XDG base directories must be absolute; relative values are ignored
        let config_root = self.config_root.as_ref().filter(|root| {
            let usable = root.is_absolute();
            if !usable {
                debug!(path = %root.display(), "ignoring relative $XDG_CONFIG_HOME");
            }
            usable
        });

        if let Some(root) = config_root {
            let candidate = root.join(RULES_DIR_NAME);
            if candidate.is_dir() {
                debug!(path = %candidate.display(), "using rules from $XDG_CONFIG_HOME");
                return Resolution {
                    source: SourceDescriptor::Environment(candidate),
                    notices,
                };
            }
            notices.push(format!(
                "[ai-rules-link] Warning: No rules found in $XDG_CONFIG_HOME/ai-rules ({})",
                candidate.display()
            ));
        }

        let home_candidate = self.home_dir.as_ref().map(|home| home.join(RULES_DIR_NAME));
        match home_candidate {
            Some(candidate) if candidate.is_dir() => {
                debug!(path = %candidate.display(), "using rules from home directory");
                return Resolution {
                    source: SourceDescriptor::HomeDirectory(candidate),
                    notices,
                };
            }
            Some(candidate) => notices.push(format!(
                "[ai-rules-link] Warning: No rules found in ~/ai-rules ({})",
                candidate.display()
            )),
            None => notices.push(
                "[ai-rules-link] Warning: No rules found in ~/ai-rules (home directory unknown)"
                    .to_string(),
            ),
        }

        debug!("falling back to bundled rules");
        notices.push("[ai-rules-link] Using embedded rules.".to_string());
        Resolution {
            source: SourceDescriptor::Embedded,
            notices,
        }
    }
}

/// Reads rules from the resolved source
pub struct RuleSource<'a> {
    descriptor: SourceDescriptor,
    bundle: &'a dyn RuleBundle,
}

impl<'a> RuleSource<'a> {
    /// Pair a resolved descriptor with the bundled fallback set
    #[must_use]
    pub fn new(descriptor: SourceDescriptor, bundle: &'a dyn RuleBundle) -> Self {
        Self { descriptor, bundle }
    }

    /// The resolved descriptor
    #[must_use]
    pub const fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    /// The bundled fallback set
    #[must_use]
    pub fn bundle(&self) -> &'a dyn RuleBundle {
        self.bundle
    }

    /// Path of a rule inside the source
    ///
    /// For bundled rules this is a display path (`rules/<file>`).
    #[must_use]
    pub fn source_path(&self, rule: &RuleName) -> PathBuf {
        match self.descriptor.canonical_dir() {
            Some(dir) => dir.join(rule.file_name()),
            None => Path::new(EMBEDDED_PREFIX).join(rule.file_name()),
        }
    }

    /// Read a rule's content
    ///
    /// Returns `Ok(None)` when the rule does not exist in this source.
    ///
    /// # Errors
    ///
    /// Returns an error if a canonical rule file exists but cannot be read.
    pub fn read(&self, rule: &RuleName) -> Result<Option<Vec<u8>>> {
        let file_name = rule.file_name();
        match self.descriptor.canonical_dir() {
            Some(dir) => {
                let path = dir.join(&file_name);
                match fs::read(&path) {
                    Ok(content) => Ok(Some(content)),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(e)
                        .with_context(|| format!("Failed to read rule file: {}", path.display())),
                }
            }
            None => Ok(self.bundle.get(&file_name).map(<[u8]>::to_vec)),
        }
    }

    /// Names of all rules the source offers, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the canonical directory cannot be listed.
    pub fn available_rules(&self) -> Result<Vec<RuleName>> {
        let mut rules = match self.descriptor.canonical_dir() {
            Some(dir) => {
                let mut rules = Vec::new();
                for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
                    let entry = entry
                        .with_context(|| format!("Failed to list rules in {}", dir.display()))?;
                    if entry.file_type().is_dir() {
                        continue;
                    }
                    if let Some(rule) = rule_name_from_file(&entry.file_name().to_string_lossy())
                    {
                        rules.push(rule);
                    }
                }
                rules
            }
            None => self
                .bundle
                .file_names()
                .iter()
                .filter_map(|name| rule_name_from_file(name))
                .collect(),
        };
        rules.sort();
        Ok(rules)
    }
}
