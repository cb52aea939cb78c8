//! # ChatBot Question Catalogue
//!
//! File: cli/src/commands/questions.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! `chatbot questions` prints the numbered question catalogue, the same list the
//! interactive session shows at startup. The numbers are the ones accepted as a
//! first input by `chatbot chat`.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use tracing::warn;

pub fn handle_questions(config: &Config) -> Result<()> {
    let questions = super::load_questions(config);
    if questions.is_empty() {
        warn!("No questions available in {}", config.data.questions);
    }
    for line in questions.numbered_lines() {
        println!("{}", line);
    }
    Ok(())
}
