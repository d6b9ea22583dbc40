//! Keeps generated context out of version control

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::Context;

use crate::error::Result;

/// Entry ignoring the generated context directory
pub const CONTEXT_IGNORE_ENTRY: &str = ".context/";

const IGNORE_BLOCK: &str = "\n# AI-generated context files\n.context/\n";

/// Effect of [`ensure_gitignore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitignoreUpdate {
    /// `.gitignore` did not exist and was created
    Created,
    /// The entry was appended to an existing file
    Appended,
    /// The entry was already there
    AlreadyPresent,
}

/// Ensure `<root>/.gitignore` ignores the context directory
///
/// Existing content is preserved; the entry is appended at most once.
///
/// # Errors
///
/// Returns an error if the file cannot be read, created or appended to.
pub fn ensure_gitignore(root: &Path) -> Result<GitignoreUpdate> {
    let path = root.join(".gitignore");

    let content = match fs::read(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::write(&path, IGNORE_BLOCK)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            return Ok(GitignoreUpdate::Created);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    // Patterns may name files in any encoding, so match on raw bytes
    let entry = CONTEXT_IGNORE_ENTRY.as_bytes();
    if content.windows(entry.len()).any(|window| window == entry) {
        return Ok(GitignoreUpdate::AlreadyPresent);
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(IGNORE_BLOCK.as_bytes())
        .with_context(|| format!("Failed to append to {}", path.display()))?;

    Ok(GitignoreUpdate::Appended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_gitignore() {
        let tmp = TempDir::new().unwrap();

        assert_eq!(ensure_gitignore(tmp.path()).unwrap(), GitignoreUpdate::Created);

        let content = fs::read_to_string(tmp.path().join(".gitignore")).unwrap();
        assert!(content.contains(CONTEXT_IGNORE_ENTRY));
    }

    #[test]
    fn test_appends_once_preserving_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".gitignore");
        fs::write(&path, "target/\n").unwrap();

        assert_eq!(ensure_gitignore(tmp.path()).unwrap(), GitignoreUpdate::Appended);
        assert_eq!(
            ensure_gitignore(tmp.path()).unwrap(),
            GitignoreUpdate::AlreadyPresent
        );

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("target/\n"));
        assert_eq!(content.matches(CONTEXT_IGNORE_ENTRY).count(), 1);
    }

    #[test]
    fn test_non_utf8_gitignore_is_appended() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".gitignore");
        fs::write(&path, b"caf\xe9.txt\n").unwrap();

        assert_eq!(ensure_gitignore(tmp.path()).unwrap(), GitignoreUpdate::Appended);
        assert_eq!(
            ensure_gitignore(tmp.path()).unwrap(),
            GitignoreUpdate::AlreadyPresent
        );

        let content = fs::read(&path).unwrap();
        assert!(content.starts_with(b"caf\xe9.txt\n"));
        assert!(content.ends_with(IGNORE_BLOCK.as_bytes()));
    }

    #[test]
    fn test_existing_entry_left_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".gitignore");
        fs::write(&path, ".context/\n").unwrap();

        assert_eq!(
            ensure_gitignore(tmp.path()).unwrap(),
            GitignoreUpdate::AlreadyPresent
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), ".context/\n");
    }
}
