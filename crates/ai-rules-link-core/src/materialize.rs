//! Rule materialization engine
//!
//! Given a resolved source and an ordered list of rule names, every rule is
//! handled independently:
//! - canonical directory sources are symlinked into the destination
//! - bundled rules are copied, refusing to clobber user edits unless forced
//!
//! A failure on one rule never stops the next one. The operation as a whole
//! fails only when no rules were requested or the destination directory
//! cannot be created. Consolidation is the all-or-nothing counterpart.

mod consolidate;
mod copier;
mod linker;
mod reporting;


use std::fs;
use std::path::PathBuf;

use tracing::debug;

pub use consolidate::consolidate;
pub use reporting::{OutcomeReporter, OutputStream, ReportLine};

use crate::error::{Result, RuleError};
use crate::rule::RuleName;
use crate::source::RuleSource;

/// Parameters of one materialization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeRequest {
    /// Rules to materialize, processed in order
    pub rules: Vec<RuleName>,
    /// Directory receiving the rule files
    pub dest: PathBuf,
    /// Overwrite copies the user has modified
    pub force: bool,
}

impl MaterializeRequest {
    /// Create a request
    pub fn new(rules: impl IntoIterator<Item = RuleName>, dest: PathBuf, force: bool) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            dest,
            force,
        }
    }
}

/// What happened to a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializationOutcome {
    /// Symlink created
    Linked,
    /// Bundled content written
    Copied,
    /// Symlink already pointed at the source
    SkippedUnmodified,
    /// Destination differs from the bundled content and force was not set
    SkippedUserModified,
    /// No source file exists for the rule
    SkippedMissingSource,
    /// A differing destination file was replaced under force
    Overwritten,
    /// The rule could not be materialized
    Failed(String),
}

impl MaterializationOutcome {
    /// Whether the outcome is a failure
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome for one requested rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    /// Requested rule
    pub rule: RuleName,
    /// File name the rule maps to
    pub file_name: String,
    /// Location in the source (display path for bundled rules)
    pub source_path: PathBuf,
    /// Location in the destination
    pub dest_path: PathBuf,
    /// Whether the rule came from the bundled set
    pub embedded: bool,
    /// What happened
    pub outcome: MaterializationOutcome,
}

/// Per-rule reports of a run, in request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeResult {
    /// One report per requested rule
    pub reports: Vec<RuleReport>,
}

impl MaterializeResult {
    /// Outcomes in request order
    pub fn outcomes(&self) -> impl Iterator<Item = &MaterializationOutcome> {
        self.reports.iter().map(|report| &report.outcome)
    }

    /// Number of rules with the given outcome
    #[must_use]
    pub fn count(&self, outcome: &MaterializationOutcome) -> usize {
        self.outcomes().filter(|o| *o == outcome).count()
    }

    /// Number of failed rules
    #[must_use]
    pub fn failures(&self) -> usize {
        self.outcomes().filter(|o| o.is_failure()).count()
    }
}

/// Symlinks or copies rules from a resolved source
pub struct Materializer<'a> {
    source: &'a RuleSource<'a>,
}

impl<'a> Materializer<'a> {
    /// Create a materializer for the given source
    #[must_use]
    pub const fn new(source: &'a RuleSource<'a>) -> Self {
        Self { source }
    }

    /// Materialize every requested rule into the destination
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NoRulesRequested`] before touching the filesystem
    /// when the rule list is empty, and [`RuleError::DestinationUnavailable`]
    /// when the destination directory cannot be created. Per-rule problems
    /// are reported as outcomes instead.
    pub fn materialize(&self, request: &MaterializeRequest) -> Result<MaterializeResult> {
        if request.rules.is_empty() {
            return Err(RuleError::NoRulesRequested.into());
        }

        fs::create_dir_all(&request.dest).map_err(|source| RuleError::DestinationUnavailable {
            path: request.dest.clone(),
            source,
        })?;

        let mut result = MaterializeResult::default();

        for rule in &request.rules {
            let file_name = rule.file_name();
            let dest_path = request.dest.join(&file_name);
            let source_path = self.source.source_path(rule);

            let embedded = self.source.descriptor().is_embedded();
            let outcome = if embedded {
                copier::copy_rule(
                    self.source.bundle().get(&file_name),
                    &dest_path,
                    request.force,
                )
            } else {
                linker::link_rule(&source_path, &dest_path)
            };

            debug!(rule = %rule, ?outcome, dest = %dest_path.display(), "materialized rule");

            result.reports.push(RuleReport {
                rule: rule.clone(),
                file_name,
                source_path,
                dest_path,
                embedded,
                outcome,
            });
        }

        Ok(result)
    }
}
