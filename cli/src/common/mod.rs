//! # ChatBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!

//! ## Overview
//!
//! Shared utility modules used by the command handlers. They keep the outside
//! world (files, terminal) behind small interfaces so that the matching engine
//! and the conversation logic stay free of I/O details.
//!
//! - **`fs`**: Reading the flat-text data files.
//! - **`ui`**: The line-oriented console the interactive session talks through.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Line-oriented console abstraction (read a line / write a line).
pub mod ui;
