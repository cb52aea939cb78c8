//! # Knowledge Base and Question Catalogue
//!
//! File: cli/src/matching/knowledge.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! The two read-only data sets the responder works from:
//!
//! - [`KnowledgeBase`]: ordered `(key phrase, answer)` pairs. Order matters, since
//!   the earliest entry wins a tie in scoring.
//! - [`QuestionList`]: a numbered catalogue of prompts. The user picks one by its
//!   1-based number and the selected text is then matched like a typed query.
//!
//! Both are built once and never mutated: there is no API to add, remove, or
//! change an entry after construction.
//!
//! ## Data Format
//!
//! Knowledge base files hold one record per line, `key phrase,answer`. Only the
//! first comma separates the fields; any later commas belong to the answer, where
//! the renderer uses them as line breaks:
//!
//! ```text
//! hello world,Hi!,How are you?
//! what is your name,My name is ChatBot.
//! ```
//!
//! Lines without a comma are skipped. Question files are plain text, one question
//! per line.
//!
use crate::common::fs::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// One canned stimulus/response pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub key_phrase: String,
    pub answer: String,
}

impl KnowledgeEntry {
    pub fn new(key_phrase: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            key_phrase: key_phrase.into(),
            answer: answer.into(),
        }
    }

    /// Splits a record on its first comma. `None` if the line has no comma.
    pub fn parse_record(line: &str) -> Option<Self> {
        line.split_once(',')
            .map(|(key_phrase, answer)| Self::new(key_phrase, answer))
    }
}

/// Ordered, immutable collection of [`KnowledgeEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries }
    }

    /// Parses knowledge base text, one record per line.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let entry = KnowledgeEntry::parse_record(line);
                if entry.is_none() {
                    debug!("Skipping knowledge base line {} (no comma): {:?}", index + 1, line);
                }
                entry
            })
            .collect();
        Self::new(entries)
    }

    /// Loads the knowledge base from `path`.
    ///
    /// A file that cannot be read yields an empty knowledge base and a warning;
    /// the session still starts and answers every query with the sentinel.
    pub fn load(path: &Path) -> Self {
        match io::read_file_to_string(path) {
            Ok(text) => {
                let kb = Self::parse(&text);
                if kb.is_empty() {
                    warn!("No `key phrase,answer` records found in {}", path.display());
                } else {
                    info!(
                        "Loaded {} knowledge base entries from {}",
                        kb.len(),
                        path.display()
                    );
                }
                kb
            }
            Err(e) => {
                warn!("{}; continuing with an empty knowledge base.", e);
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered, immutable catalogue of questions addressed by 1-based number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionList {
    questions: Vec<String>,
}

impl QuestionList {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    /// Loads the catalogue from `path`, one question per line (blank lines keep
    /// their number). Degrades to an empty list with a warning.
    pub fn load(path: &Path) -> Self {
        match io::read_lines(path) {
            Ok(questions) => {
                info!("Loaded {} questions from {}", questions.len(), path.display());
                Self::new(questions)
            }
            Err(e) => {
                warn!("{}; continuing with an empty question list.", e);
                Self::default()
            }
        }
    }

    /// The question shown to the user as `number`, if `1 <= number <= len`.
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.questions.get(index))
            .map(String::as_str)
    }

    /// Display lines of the catalogue: `1- first question`, `2- second question`, ...
    pub fn numbered_lines(&self) -> Vec<String> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| format!("{}- {}", index + 1, question))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
