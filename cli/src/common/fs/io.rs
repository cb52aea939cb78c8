//! # ChatBot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!

//! ## Overview
//!
//! This module centralizes the filesystem reads the application performs on its
//! two flat-text data sources. It wraps `std::fs` so that a missing or unreadable
//! file surfaces as `ChatbotError::DataSourceUnavailable`, which callers may turn
//! into a warning instead of a failure.
//!
//! - **`read_file_to_string`**: Reads a whole file, tagging failures with the path.
//! - **`read_lines`**: Reads a file and splits it into lines. `\n` and `\r\n`
//!   terminators are both removed.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let questions = io::read_lines(Path::new("QuestionDB.csv"))?;
//! ```
//!
use crate::core::error::ChatbotError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the entire content of a file into a string.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected, so a
/// single bad byte only affects the record it sits in.
///
/// # Errors
///
/// Returns `ChatbotError::DataSourceUnavailable` if the file does not exist or
/// cannot be read.
pub fn read_file_to_string(path: &Path) -> Result<String, ChatbotError> {
    debug!("Reading file: {}", path.display());
    let bytes = fs::read(path).map_err(|source| ChatbotError::DataSourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a file and returns its lines, without terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ChatbotError> {
    let content = read_file_to_string(path)?;
    let lines: Vec<String> = content.lines().map(str::to_owned).collect();
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_lines_strips_terminators() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("questions.csv");
        fs::write(&file_path, "first\r\nsecond\n\nfourth").unwrap();

        let lines = read_lines(&file_path).unwrap();
        assert_eq!(lines, vec!["first", "second", "", "fourth"]);
    }

    #[test]
    fn test_read_lines_tolerates_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("ChatBotDB.csv");
        fs::write(&file_path, b"caf\xe9,Coffee.\nhello,Hey.\n").unwrap();

        let lines = read_lines(&file_path).unwrap();
        assert_eq!(lines, vec!["caf\u{FFFD},Coffee.", "hello,Hey."]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.csv");

        let result = read_lines(&file_path);
        match result {
            Err(ChatbotError::DataSourceUnavailable { path, source }) => {
                assert_eq!(path, file_path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected DataSourceUnavailable, got {:?}", other),
        }
    }
}
