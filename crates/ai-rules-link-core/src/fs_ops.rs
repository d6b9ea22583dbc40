//! Filesystem primitives shared by materialization and context bootstrap

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::error::Result;

/// Create a symlink at `link` pointing to `target`
#[cfg(unix)]
pub fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

/// Create a symlink at `link` pointing to `target`
#[cfg(windows)]
pub fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Remove whatever entry sits at `path` without following symlinks
///
/// A missing entry is not an error. Directories are only removed when empty.
pub fn remove_entry(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    if metadata.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// Replace `dest` with `content` via a temporary file in the same directory
///
/// Readers never observe a partially written file.
pub fn write_atomic(dest: &Path, content: &[u8]) -> Result<()> {
    let dir = dest
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(content)
        .with_context(|| format!("Failed to write temporary file for {}", dest.display()))?;
    tmp.persist(dest)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("out.mdc");
        fs::write(&dest, "old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_remove_entry_missing_is_ok() {
        let tmp = TempDir::new().unwrap();
        assert!(remove_entry(&tmp.path().join("absent")).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_remove_entry_dangling_symlink() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("link");
        create_symlink(Path::new("/nonexistent/target"), &link).unwrap();

        remove_entry(&link).unwrap();

        assert!(fs::symlink_metadata(&link).is_err());
    }
}
