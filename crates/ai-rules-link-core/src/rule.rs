//! Rule naming conventions
//!
//! A rule named `go` lives in `gorules.mdc`. Prompt resources follow
//! `prompt.<language>.mdc` and the base rules are always `baserules.mdc`.

use std::fmt;

/// Suffix appended to a rule name to form its file name
pub const RULE_FILE_SUFFIX: &str = "rules.mdc";

/// Output file written by consolidation
pub const CONSOLIDATED_FILE_NAME: &str = "consolidatedrules.mdc";

/// Bundled base rules used for prompt generation
pub const BASE_RULES_FILE: &str = "baserules.mdc";

/// Name of a selectable rule, e.g. `go` or `docker`
///
/// No validation is performed: a malformed name simply fails to resolve.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleName(String);

impl RuleName {
    /// Create a rule name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The rule name as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name the rule maps to (`<name>rules.mdc`)
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}{RULE_FILE_SUFFIX}", self.0)
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RuleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// File name of the per-language prompt resource
#[must_use]
pub fn prompt_file_name(language: &str) -> String {
    format!("prompt.{language}.mdc")
}

/// Recover the rule name from a rule file name
///
/// Returns `None` for files outside the naming convention and for the
/// consolidated output file.
#[must_use]
pub fn rule_name_from_file(file_name: &str) -> Option<RuleName> {
    if file_name == CONSOLIDATED_FILE_NAME {
        return None;
    }
    file_name
        .strip_suffix(RULE_FILE_SUFFIX)
        .filter(|name| !name.is_empty())
        .map(RuleName::new)
}
