//! Diff generation with color-coded output

use std::fmt::Write;

use similar::{ChangeTag, TextDiff};

const DIFF_CONTEXT_LINES: usize = 3;

/// Diff generator for creating visual diffs
pub struct DiffGenerator;

impl DiffGenerator {
    /// Generate a unified diff from the destination content to the source content
    ///
    /// Lines only in the destination (user edits) are marked `-`, lines only
    /// in the source are marked `+`.
    #[must_use]
    pub fn generate(
        source_content: &str,
        dest_content: &str,
        source_label: &str,
        dest_label: &str,
        color: bool,
    ) -> String {
        let diff = TextDiff::from_lines(dest_content, source_content);
        let (bold, reset) = if color { ("\x1b[1m", "\x1b[0m") } else { ("", "") };

        let mut output = String::new();
        let _ = writeln!(output, "{bold}--- {dest_label}{reset}");
        let _ = writeln!(output, "{bold}+++ {source_label}{reset}");

        for (idx, group) in diff.grouped_ops(DIFF_CONTEXT_LINES).iter().enumerate() {
            if idx > 0 {
                output.push_str("...\n");
            }

            for op in group {
                for change in diff.iter_changes(op) {
                    let (sign, change_color) = match change.tag() {
                        ChangeTag::Delete => ("-", "\x1b[31m"),
                        ChangeTag::Insert => ("+", "\x1b[32m"),
                        ChangeTag::Equal => (" ", "\x1b[0m"),
                    };
                    let change_color = if color { change_color } else { "" };

                    let newline = if change.value().ends_with('\n') {
                        ""
                    } else {
                        "\n"
                    };

                    let _ = write!(
                        output,
                        "{change_color}{sign}{}{newline}{reset}",
                        change.value()
                    );
                }
            }
        }

        output
    }
}
