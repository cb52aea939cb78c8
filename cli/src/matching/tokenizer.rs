//! # Whitespace Tokenizer
//!
//! File: cli/src/matching/tokenizer.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! Tokens are maximal runs of non-whitespace characters. There is no case folding
//! and no punctuation stripping: `Hello` and `hello` are different tokens, and so
//! are `name` and `name?`.
//!

/// Splits `text` on runs of whitespace. Empty or blank input yields no tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
