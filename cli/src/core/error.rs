//! # ChatBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! This module defines the error types used throughout the ChatBot application.
//! The taxonomy is deliberately small: most conditions a user can trigger during
//! a conversation (an out-of-range question number, a query nothing matches)
//! are ordinary control flow, not errors.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ChatbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors (invalid or unreadable TOML, bad values)
//! - Data sources that cannot be read (knowledge base, question list)
//! - Console failures (stdin/stdout I/O)
//!
//! ## Examples
//!
//! ```rust
//! // Data sources degrade to "empty" instead of failing the session
//! match io::read_lines(path) {
//!     Ok(lines) => lines,
//!     Err(e @ ChatbotError::DataSourceUnavailable { .. }) => {
//!         warn!("{}", e);
//!         Vec::new()
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the ChatBot application.
#[derive(Error, Debug)]
pub enum ChatbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data source '{}' is unavailable: {source}", .path.display())]
    DataSourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console I/O failed")]
    Console(#[from] std::io::Error),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
