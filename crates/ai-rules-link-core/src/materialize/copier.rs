//! Copy branch: bundled rules

use std::fs;
use std::path::Path;

use tracing::warn;

use super::MaterializationOutcome;
use crate::comparison::{ContentComparison, compare_with_file};
use crate::fs_ops;

/// Write bundled `content` to `dest`
///
/// Without `force`, an existing destination whose content differs is kept.
pub(super) fn copy_rule(
    content: Option<&[u8]>,
    dest: &Path,
    force: bool,
) -> MaterializationOutcome {
    let Some(content) = content else {
        return MaterializationOutcome::SkippedMissingSource;
    };

    let existing = match compare_with_file(dest, content) {
        Ok(comparison) => comparison,
        Err(e) if force => {
            warn!(dest = %dest.display(), "cannot compare destination, overwriting: {e:#}");
            ContentComparison::Differs
        }
        Err(e) => return MaterializationOutcome::Failed(format!("{e:#}")),
    };

    if existing == ContentComparison::Differs && !force {
        return MaterializationOutcome::SkippedUserModified;
    }

    // A leftover link would redirect the write into its target
    if fs::symlink_metadata(dest).is_ok_and(|metadata| metadata.is_symlink())
        && let Err(e) = fs::remove_file(dest)
    {
        return MaterializationOutcome::Failed(format!(
            "cannot remove existing link {}: {e}",
            dest.display()
        ));
    }

    if let Err(e) = fs::write(dest, content) {
        return MaterializationOutcome::Failed(e.to_string());
    }

    match existing {
        ContentComparison::Differs => MaterializationOutcome::Overwritten,
        ContentComparison::Missing | ContentComparison::Identical => {
            MaterializationOutcome::Copied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copies_into_empty_destination() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("gorules.mdc");

        assert_eq!(
            copy_rule(Some(b"go"), &dest, false),
            MaterializationOutcome::Copied
        );
        assert_eq!(fs::read(&dest).unwrap(), b"go");
    }

    #[test]
    fn test_identical_destination_is_rewritten() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("gorules.mdc");
        fs::write(&dest, "go").unwrap();

        assert_eq!(
            copy_rule(Some(b"go"), &dest, false),
            MaterializationOutcome::Copied
        );
    }

    #[test]
    fn test_missing_bundle_entry() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            copy_rule(None, &tmp.path().join("xrules.mdc"), true),
            MaterializationOutcome::SkippedMissingSource
        );
        assert!(!tmp.path().join("xrules.mdc").exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_dangling_link_is_replaced_by_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("gone.mdc");
        let dest = tmp.path().join("gorules.mdc");
        fs_ops::create_symlink(&target, &dest).unwrap();

        assert_eq!(
            copy_rule(Some(b"go"), &dest, false),
            MaterializationOutcome::Copied
        );
        assert!(!fs::symlink_metadata(&dest).unwrap().is_symlink());
        assert!(!target.exists());
    }
}
