//! Per-rule report lines and run summaries

use std::fmt::Write;
use std::path::Path;

use super::{MaterializationOutcome, MaterializeResult, RuleReport};

/// Stream a report line belongs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    /// Informational
    Stdout,
    /// Missing sources and failures
    Stderr,
}

/// A rendered report line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Target stream
    pub stream: OutputStream,
    /// Message text, without trailing newline
    pub text: String,
}

/// Materialization reporter
pub struct OutcomeReporter;

impl OutcomeReporter {
    /// Render the line for one rule
    #[must_use]
    pub fn line(report: &RuleReport) -> ReportLine {
        let dest_dir = report.dest_path.parent().unwrap_or_else(|| Path::new("."));
        let file = &report.file_name;

        let (stream, text) = match &report.outcome {
            MaterializationOutcome::Linked => (
                OutputStream::Stdout,
                format!("Symlinked {file} into {}", dest_dir.display()),
            ),
            MaterializationOutcome::SkippedUnmodified => (
                OutputStream::Stdout,
                format!("Symlink for {file} already exists and is correct."),
            ),
            MaterializationOutcome::Copied => (
                OutputStream::Stdout,
                format!("Copied embedded {file} into {}", dest_dir.display()),
            ),
            MaterializationOutcome::Overwritten => (
                OutputStream::Stdout,
                format!(
                    "Overwrote {} with embedded {file}",
                    report.dest_path.display()
                ),
            ),
            MaterializationOutcome::SkippedUserModified => (
                OutputStream::Stdout,
                format!(
                    "[ai-rules-link] Skipping {}: destination file has been modified by the user. Use --force to overwrite.",
                    report.dest_path.display()
                ),
            ),
            MaterializationOutcome::SkippedMissingSource => {
                let kind = if report.embedded {
                    "Embedded"
                } else {
                    "Canonical"
                };
                (
                    OutputStream::Stderr,
                    format!(
                        "{kind} rules file does not exist for '{}': {}",
                        report.rule,
                        report.source_path.display()
                    ),
                )
            }
            MaterializationOutcome::Failed(reason) => (
                OutputStream::Stderr,
                format!("Failed to materialize {file}: {reason}"),
            ),
        };

        ReportLine { stream, text }
    }

    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(result: &MaterializeResult) -> String {
        let mut output = String::new();

        let missing = result.count(&MaterializationOutcome::SkippedMissingSource);
        let modified = result.count(&MaterializationOutcome::SkippedUserModified);
        let unchanged = result.count(&MaterializationOutcome::SkippedUnmodified);

        output.push_str("\n=== Rules Summary ===\n");
        let _ = writeln!(
            output,
            "Linked:      {}",
            result.count(&MaterializationOutcome::Linked)
        );
        let _ = writeln!(
            output,
            "Copied:      {}",
            result.count(&MaterializationOutcome::Copied)
        );
        let _ = writeln!(
            output,
            "Overwritten: {}",
            result.count(&MaterializationOutcome::Overwritten)
        );
        let _ = writeln!(output, "Unchanged:   {unchanged}");

        if missing + modified > 0 {
            let _ = writeln!(
                output,
                "Skipped:     {} (missing source: {missing}, modified by user: {modified})",
                missing + modified
            );
        } else {
            let _ = writeln!(output, "Skipped:     0");
        }

        let failed = result.failures();
        let _ = writeln!(output, "Failed:      {failed}");

        if failed == 0 {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleName;
    use std::path::PathBuf;

    fn report(outcome: MaterializationOutcome, source_path: PathBuf) -> RuleReport {
        RuleReport {
            rule: RuleName::new("go"),
            file_name: "gorules.mdc".to_string(),
            embedded: !source_path.is_absolute(),
            source_path,
            dest_path: PathBuf::from("/project/.cursor/rules/gorules.mdc"),
            outcome,
        }
    }

    #[test]
    fn test_linked_line() {
        let line = OutcomeReporter::line(&report(
            MaterializationOutcome::Linked,
            PathBuf::from("/home/u/ai-rules/gorules.mdc"),
        ));
        assert_eq!(line.stream, OutputStream::Stdout);
        assert_eq!(line.text, "Symlinked gorules.mdc into /project/.cursor/rules");
    }

    #[test]
    fn test_missing_source_lines() {
        let canonical = OutcomeReporter::line(&report(
            MaterializationOutcome::SkippedMissingSource,
            PathBuf::from("/home/u/ai-rules/gorules.mdc"),
        ));
        assert_eq!(canonical.stream, OutputStream::Stderr);
        assert!(canonical.text.starts_with("Canonical rules file does not exist for 'go'"));

        let embedded = OutcomeReporter::line(&report(
            MaterializationOutcome::SkippedMissingSource,
            PathBuf::from("rules/gorules.mdc"),
        ));
        assert!(embedded.text.starts_with("Embedded rules file does not exist for 'go'"));
    }

    #[test]
    fn test_relative_canonical_dir_named_rules() {
        let mut canonical = report(
            MaterializationOutcome::SkippedMissingSource,
            PathBuf::from("rules/ai-rules/gorules.mdc"),
        );
        canonical.embedded = false;

        let line = OutcomeReporter::line(&canonical);
        assert!(line.text.starts_with("Canonical rules file does not exist for 'go'"));
    }

    #[test]
    fn test_user_modified_line_mentions_force() {
        let line = OutcomeReporter::line(&report(
            MaterializationOutcome::SkippedUserModified,
            PathBuf::from("rules/gorules.mdc"),
        ));
        assert_eq!(line.stream, OutputStream::Stdout);
        assert!(line.text.contains("Use --force to overwrite."));
    }

    #[test]
    fn test_summary_counts() {
        let result = MaterializeResult {
            reports: vec![
                report(MaterializationOutcome::Copied, PathBuf::from("rules/a")),
                report(
                    MaterializationOutcome::SkippedUserModified,
                    PathBuf::from("rules/b"),
                ),
                report(
                    MaterializationOutcome::Failed("denied".to_string()),
                    PathBuf::from("rules/c"),
                ),
            ],
        };

        let summary = OutcomeReporter::generate_summary(&result);

        assert!(summary.contains("Copied:      1"));
        assert!(summary.contains("modified by user: 1"));
        assert!(summary.contains("Failed:      1"));
        assert!(summary.contains("Completed with errors"));
    }
}
