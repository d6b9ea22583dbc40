//! Symlink branch: canonical directory sources

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::MaterializationOutcome;
use crate::fs_ops;

/// Link `dest` to `source`, replacing whatever is there
///
/// A link whose raw target already equals `source` is left alone.
pub(super) fn link_rule(source: &Path, dest: &Path) -> MaterializationOutcome {
    match fs::metadata(source) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return MaterializationOutcome::SkippedMissingSource;
        }
        Err(e) => {
            return MaterializationOutcome::Failed(format!(
                "cannot access {}: {e}",
                source.display()
            ));
        }
    }

    if is_link_to(dest, source) {
        return MaterializationOutcome::SkippedUnmodified;
    }

    if let Err(e) = fs_ops::remove_entry(dest) {
        return MaterializationOutcome::Failed(format!(
            "cannot remove existing {}: {e}",
            dest.display()
        ));
    }

    match fs_ops::create_symlink(source, dest) {
        Ok(()) => MaterializationOutcome::Linked,
        Err(e) => MaterializationOutcome::Failed(e.to_string()),
    }
}

fn is_link_to(link: &Path, target: &Path) -> bool {
    fs::symlink_metadata(link).is_ok_and(|metadata| metadata.is_symlink())
        && fs::read_link(link).is_ok_and(|current| current == target)
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_links_missing_destination() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("gorules.mdc");
        let dest = tmp.path().join("linked.mdc");
        fs::write(&source, "go").unwrap();

        assert_eq!(link_rule(&source, &dest), MaterializationOutcome::Linked);
        assert_eq!(fs::read_link(&dest).unwrap(), source);
    }

    #[test]
    fn test_missing_source_leaves_destination_alone() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("gorules.mdc");
        fs::write(&dest, "user file").unwrap();

        assert_eq!(
            link_rule(&tmp.path().join("absent.mdc"), &dest),
            MaterializationOutcome::SkippedMissingSource
        );
        assert_eq!(fs::read_to_string(&dest).unwrap(), "user file");
    }

    #[test]
    fn test_relinks_stale_symlink() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("gorules.mdc");
        let other = tmp.path().join("other.mdc");
        let dest = tmp.path().join("dest.mdc");
        fs::write(&source, "go").unwrap();
        fs::write(&other, "other").unwrap();
        fs_ops::create_symlink(&other, &dest).unwrap();

        assert_eq!(link_rule(&source, &dest), MaterializationOutcome::Linked);
        assert_eq!(fs::read_link(&dest).unwrap(), source);
    }

    #[test]
    fn test_non_empty_directory_in_the_way_fails() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("gorules.mdc");
        let dest = tmp.path().join("dest.mdc");
        fs::write(&source, "go").unwrap();
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "keep").unwrap();

        let outcome = link_rule(&source, &dest);

        assert!(outcome.is_failure());
        assert!(dest.join("keep.txt").exists());
    }
}
