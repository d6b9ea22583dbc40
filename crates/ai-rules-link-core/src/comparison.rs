//! Content comparison and diff generation
//!
//! This module provides read-only analysis used to protect user edits:
//! - Content equality via SHA-256 hashing
//! - Visual diffs between a rule source and its materialized copy

mod diff;
mod hash;

use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;

pub use diff::DiffGenerator;
pub use hash::{ContentHash, ContentHasher};

use crate::error::Result;

/// Result of comparing expected content against a destination file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentComparison {
    /// No file exists at the destination
    Missing,
    /// Destination holds exactly the expected content
    Identical,
    /// Destination exists with different content
    Differs,
}

/// Compare `expected` against the file at `dest`
///
/// # Errors
///
/// Returns an error if the destination exists but cannot be read.
pub fn compare_with_file(dest: &Path, expected: &[u8]) -> Result<ContentComparison> {
    let dest_hash = match ContentHasher::hash_file(dest) {
        Ok(hash) => hash,
        Err(e) if is_not_found(&e) => return Ok(ContentComparison::Missing),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to compare with {}", dest.display()));
        }
    };

    if dest_hash == ContentHasher::hash_bytes(expected) {
        Ok(ContentComparison::Identical)
    } else {
        Ok(ContentComparison::Differs)
    }
}

fn is_not_found(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_compare_missing() {
        let tmp = TempDir::new().unwrap();
        let result = compare_with_file(&tmp.path().join("absent.mdc"), b"content").unwrap();
        assert_eq!(result, ContentComparison::Missing);
    }

    #[test]
    fn test_compare_identical_and_differs() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("gorules.mdc");
        fs::write(&dest, "content").unwrap();

        assert_eq!(
            compare_with_file(&dest, b"content").unwrap(),
            ContentComparison::Identical
        );
        assert_eq!(
            compare_with_file(&dest, b"content, edited").unwrap(),
            ContentComparison::Differs
        );
    }

    #[test]
    fn test_compare_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(compare_with_file(tmp.path(), b"content").is_err());
    }
}
