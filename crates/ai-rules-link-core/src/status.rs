//! Inspection of materialized rule links

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::error::Result;

/// A symlink found in the destination directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// File name inside the directory
    pub name: String,
    /// Raw link target, `None` if it could not be read
    pub target: Option<PathBuf>,
    /// Whether the target does not resolve
    pub broken: bool,
}

/// List every symlink directly inside `dir`, sorted by name
///
/// Regular files and directories are ignored.
///
/// # Errors
///
/// Returns an error if `dir` cannot be read.
pub fn inspect_links(dir: &Path) -> Result<Vec<LinkEntry>> {
    fs::read_dir(dir).with_context(|| format!("Could not read {}", dir.display()))?;

    let mut links = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Could not read {}", dir.display()))?;
        if !entry.path_is_symlink() {
            continue;
        }

        let target = fs::read_link(entry.path()).ok();
        let broken = dunce::canonicalize(entry.path()).is_err();
        links.push(LinkEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            target,
            broken,
        });
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(inspect_links(&tmp.path().join("absent")).is_err());
    }

    #[test]
    fn test_regular_files_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("gorules.mdc"), "copy").unwrap();

        assert!(inspect_links(tmp.path()).unwrap().is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_lists_live_and_broken_links() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target.mdc");
        fs::write(&target, "rules").unwrap();
        let dir = tmp.path().join("rules");
        fs::create_dir(&dir).unwrap();
        crate::fs_ops::create_symlink(&target, &dir.join("gorules.mdc")).unwrap();
        crate::fs_ops::create_symlink(Path::new("/nonexistent"), &dir.join("brokenrules.mdc"))
            .unwrap();

        let links = inspect_links(&dir).unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name, "brokenrules.mdc");
        assert!(links[0].broken);
        assert_eq!(links[1].name, "gorules.mdc");
        assert_eq!(links[1].target.as_deref(), Some(target.as_path()));
        assert!(!links[1].broken);
    }
}
