//! # Best-Match Selection
//!
//! File: cli/src/matching/selector.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! Picks the knowledge base answer whose key phrase shares the most words with a
//! query. The scan runs in knowledge base order and keeps a running best:
//!
//! - the best score starts at 0, so an entry with no shared words never wins;
//! - an entry replaces the current best only if its score is strictly greater
//!   and at least `threshold`, so on equal scores the earliest entry stays;
//! - if nothing qualifies the result is [`MatchResult::NoMatch`], whose raw text is
//!   [`NO_SUITABLE_ANSWER`].
//!
//! Selection is a pure function of the query, the knowledge base and the threshold.
//!
use super::knowledge::KnowledgeBase;
use super::scorer::score;
use tracing::trace;

/// Raw answer text reported when no entry qualifies.
pub const NO_SUITABLE_ANSWER: &str = "Sorry, I couldn't find a suitable answer.";

/// Outcome of matching one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// The raw (comma-encoded) answer of the winning entry.
    Answer(&'a str),
    /// No entry reached the threshold with a non-zero score.
    NoMatch,
}

impl<'a> MatchResult<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Answer(_))
    }

    /// The raw answer to render; the sentinel text for [`MatchResult::NoMatch`].
    pub fn raw_answer(&self) -> &'a str {
        match *self {
            MatchResult::Answer(answer) => answer,
            MatchResult::NoMatch => NO_SUITABLE_ANSWER,
        }
    }
}

/// Selects the best answer for `query`; see the module docs for the rules.
pub fn select_best<'a>(query: &str, kb: &'a KnowledgeBase, threshold: u32) -> MatchResult<'a> {
    let threshold = threshold as usize;
    let mut best_score = 0;
    let mut best = MatchResult::NoMatch;

    for (index, entry) in kb.entries().iter().enumerate() {
        let entry_score = score(&entry.key_phrase, query);
        if entry_score >= threshold && entry_score > best_score {
            trace!(
                "Entry {} ({:?}) is the new best with score {}",
                index,
                entry.key_phrase,
                entry_score
            );
            best_score = entry_score;
            best = MatchResult::Answer(entry.answer.as_str());
        }
    }
    best
}
