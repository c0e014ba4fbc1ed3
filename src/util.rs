//! Utility functions for lexi.

use std::fs;
use std::path::Path;

use crate::error::{LexiError, Result};

/// Maximum file size that can be read into memory (10 MB).
///
/// The word collection and review ledger are rewritten in full on every
/// mutation, so under normal usage they stay far below this limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10 MB

/// Read a file into a string with size limit protection.
///
/// Returns an error if the file exceeds `MAX_FILE_SIZE` to prevent memory
/// issues with unexpectedly large files.
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read (doesn't exist, permission denied, etc.)
/// * The file exceeds `MAX_FILE_SIZE`
pub fn read_to_string_limited(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| LexiError::storage(path, e))?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE {
        return Err(LexiError::serde(format!(
            "File {} is too large ({} bytes, max {} bytes)",
            path.display(),
            size,
            MAX_FILE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| LexiError::storage(path, e))
}

/// Capitalize a string for display: first character uppercase, the rest
/// lowercase. Matches what word and sentence fields get at creation time.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_to_string_limited_success() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "Hello, world!").unwrap();

        let content = read_to_string_limited(&path).unwrap();
        assert_eq!(content, "Hello, world!");
    }

    #[test]
    fn test_read_to_string_limited_nonexistent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.txt");

        let result = read_to_string_limited(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_capitalize_basic() {
        assert_eq!(capitalize("bonjour"), "Bonjour");
        assert_eq!(capitalize("BONJOUR"), "Bonjour");
        assert_eq!(capitalize("bonJour le monde"), "Bonjour le monde");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_single_char() {
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize("école"), "École");
        assert_eq!(capitalize("привет"), "Привет");
    }
}
