//! Content hashing using SHA-256

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Content hash result
pub type ContentHash = [u8; 32];

/// Content hasher
pub struct ContentHasher;

impl ContentHasher {
    /// Hash an in-memory buffer
    #[must_use]
    pub fn hash_bytes(content: &[u8]) -> ContentHash {
        Sha256::digest(content).into()
    }

    /// Compute SHA-256 hash of a file by streaming its contents
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn hash_file(path: &Path) -> Result<ContentHash> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file for hashing: {}", path.display()))?;

        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();
        let mut buffer = [0; 8192];

        loop {
            let bytes_read = reader
                .read(&mut buffer)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;

            if bytes_read == 0 {
                break;
            }

            hasher.update(&buffer[..bytes_read]);
        }

        Ok(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_hash_matches_bytes_hash() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("gorules.mdc");
        fs::write(&file, "go content").unwrap();

        assert_eq!(
            ContentHasher::hash_file(&file).unwrap(),
            ContentHasher::hash_bytes(b"go content")
        );
    }

    #[test]
    fn test_hash_different_content() {
        assert_ne!(
            ContentHasher::hash_bytes(b"content 1"),
            ContentHasher::hash_bytes(b"content 2")
        );
    }

    #[test]
    fn test_hash_large_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("large.bin");

        // Larger than the read buffer
        let content = vec![7u8; 1024 * 1024 + 3];
        fs::write(&file, &content).unwrap();

        assert_eq!(
            ContentHasher::hash_file(&file).unwrap(),
            ContentHasher::hash_bytes(&content)
        );
    }

    #[test]
    fn test_hash_missing_file() {
        let tmp = TempDir::new().unwrap();
        assert!(ContentHasher::hash_file(&tmp.path().join("absent")).is_err());
    }
}
