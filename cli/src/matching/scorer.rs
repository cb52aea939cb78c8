//! # Overlap Scoring
//!
//! File: cli/src/matching/scorer.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! Overlap scoring between a key phrase and a query.
//!

use super::tokenizer::tokenize;

/// Counts the key-phrase tokens that occur anywhere in the query.
///
/// Each key token contributes at most 1, however often it appears in the query.
/// Repeated key tokens are counted separately, so the function is not symmetric:
/// `score("hi hi", "hi") == 2` but `score("hi", "hi hi") == 1`.
pub fn score(key_phrase: &str, query: &str) -> usize {
    let query_tokens = tokenize(query);
    tokenize(key_phrase)
        .into_iter()
        .filter(|key_token| query_tokens.contains(key_token))
        .count()
}
