//! # Answer Rendering
//!
//! File: cli/src/matching/render.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! Answers are stored as one string in which every comma marks a line break.
//! The first display line carries the speaker label, glued directly to the text
//! (`ChatBot:Hi!`); the remaining lines are printed as they are. Commas cannot be
//! escaped, so an answer that needs a literal comma will be split there too.
//!

/// Splits `raw_answer` on every comma and prefixes the first line with `speaker_label`.
///
/// Always returns at least one line: an empty answer renders as the bare label.
pub fn render(raw_answer: &str, speaker_label: &str) -> Vec<String> {
    raw_answer
        .split(',')
        .enumerate()
        .map(|(index, segment)| {
            if index == 0 {
                format!("{}{}", speaker_label, segment)
            } else {
                segment.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::selector::NO_SUITABLE_ANSWER;

    #[test]
    fn multi_line_answer() {
        assert_eq!(
            render("Hi!,How are you?", "ChatBot:"),
            vec!["ChatBot:Hi!", "How are you?"]
        );
    }

    #[test]
    fn single_line_answer() {
        assert_eq!(render("Hey.", "ChatBot:"), vec!["ChatBot:Hey."]);
    }

    #[test]
    fn empty_answer_emits_labeled_line() {
        assert_eq!(render("", "ChatBot:"), vec!["ChatBot:"]);
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(render("a,,b,", "Bot:"), vec!["Bot:a", "", "b", ""]);
    }

    #[test]
    fn sentinel_splits_on_its_comma() {
        assert_eq!(
            render(NO_SUITABLE_ANSWER, "ChatBot:"),
            vec!["ChatBot:Sorry", " I couldn't find a suitable answer."]
        );
    }

    #[test]
    fn stripping_label_and_rejoining_restores_raw_answer() {
        for raw in ["Hi!,How are you?", "", "one", ",leading", "trailing,", "a,,b"] {
            let mut lines = render(raw, "ChatBot:");
            lines[0] = lines[0]
                .strip_prefix("ChatBot:")
                .map(str::to_string)
                .unwrap();
            assert_eq!(lines.join(","), raw);
            assert_eq!(lines, raw.split(',').collect::<Vec<_>>());
        }
    }
}
