//! Consolidation: merge selected rules into one file

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, RuleError};
use crate::fs_ops;
use crate::rule::{CONSOLIDATED_FILE_NAME, RuleName};
use crate::source::RuleSource;

/// Concatenate the requested rules into `dest/consolidatedrules.mdc`
///
/// Each rule's content is followed by a single newline, in request order.
/// Every rule is read before anything is written, so a missing rule leaves
/// no output behind. Returns the path of the written file.
///
/// # Errors
///
/// Returns [`RuleError::NoRulesRequested`] for an empty rule list,
/// [`RuleError::RuleUnreadable`] if any rule cannot be read, and
/// [`RuleError::DestinationUnavailable`] if `dest` cannot be created.
pub fn consolidate(source: &RuleSource<'_>, rules: &[RuleName], dest: &Path) -> Result<PathBuf> {
    if rules.is_empty() {
        return Err(RuleError::NoRulesRequested.into());
    }

    let mut merged = Vec::new();
    for rule in rules {
        let content = match source.read(rule) {
            Ok(Some(content)) => content,
            Ok(None) => {
                return Err(RuleError::RuleUnreadable {
                    file_name: rule.file_name(),
                    reason: format!("not found at {}", source.source_path(rule).display()),
                }
                .into());
            }
            Err(e) => {
                return Err(RuleError::RuleUnreadable {
                    file_name: rule.file_name(),
                    reason: format!("{e:#}"),
                }
                .into());
            }
        };
        merged.extend_from_slice(&content);
        merged.push(b'\n');
    }

    fs::create_dir_all(dest).map_err(|source| RuleError::DestinationUnavailable {
        path: dest.to_path_buf(),
        source,
    })?;

    let out_file = dest.join(CONSOLIDATED_FILE_NAME);
    fs_ops::write_atomic(&out_file, &merged)?;
    debug!(path = %out_file.display(), bytes = merged.len(), "wrote consolidated rules");

    Ok(out_file)
}
