//! # Responder
//!
//! File: cli/src/matching/responder.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! Query-to-lines facade used by the commands.
//!

use super::knowledge::KnowledgeBase;
use super::render::render;
use super::selector::{select_best, MatchResult};
use crate::core::config::Config;
use tracing::debug;

/// Owns the knowledge base together with the fixed matching and display settings.
#[derive(Debug, Clone)]
pub struct Responder {
    kb: KnowledgeBase,
    threshold: u32,
    speaker_label: String,
}

impl Responder {
    pub fn new(kb: KnowledgeBase, threshold: u32, speaker_label: impl Into<String>) -> Self {
        Self {
            kb,
            threshold,
            speaker_label: speaker_label.into(),
        }
    }

    pub fn from_config(kb: KnowledgeBase, config: &Config) -> Self {
        Self::new(kb, config.matching.threshold, &config.display.speaker_label)
    }

    pub fn best_match(&self, query: &str) -> MatchResult<'_> {
        select_best(query, &self.kb, self.threshold)
    }

    /// Matches `query` and renders the outcome as display lines.
    pub fn respond(&self, query: &str) -> Vec<String> {
        let result = self.best_match(query);
        debug!(query, matched = result.is_match(), "Answering query");
        render(result.raw_answer(), &self.speaker_label)
    }
}
