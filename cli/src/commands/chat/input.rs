//! # Chat Input Classification
//!
//! File: cli/src/commands/chat/input.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! Three kinds of line reach the session: the exit keywords, question numbers, and
//! free text. Which kinds a state recognises is decided by the session; this module
//! only answers "is this an exit keyword?" and "is this a number?".
//!

/// Lines that end the session. Compared exactly: no trimming, case-sensitive.
pub const EXIT_KEYWORDS: [&str; 2] = ["quit", "q"];

/// A line as understood on the re-prompt path, where all three kinds are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Exit,
    Selection(usize),
    Text(&'a str),
}

pub fn is_exit_keyword(line: &str) -> bool {
    EXIT_KEYWORDS.contains(&line)
}

/// Parses a question number: after trimming, one or more ASCII digits.
///
/// Digit strings too large for `usize` saturate to `usize::MAX`, which is never a
/// valid question number, so they take the out-of-range path.
pub fn parse_selection(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(trimmed.parse().unwrap_or(usize::MAX))
}

pub fn classify(line: &str) -> Input<'_> {
    if is_exit_keyword(line) {
        Input::Exit
    } else if let Some(number) = parse_selection(line) {
        Input::Selection(number)
    } else {
        Input::Text(line)
    }
}
