//! # ChatBot Interactive Chat
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! The `chat` command (also what runs when no command is given). It loads the
//! knowledge base and the question catalogue, prints the welcome text with the
//! numbered catalogue, and hands the console to the session state machine.
//!
//! ## Architecture
//!
//! - `input.rs`: classifying lines as exit keywords, question numbers or text
//! - `session.rs`: the state machine owning all reads, writes and the stop decision
//!
//! ## Examples
//!
//! ```bash
//! # Default data files in the current directory
//! chatbot
//!
//! # Explicit data files, stricter matching, no banner
//! chatbot --db answers.csv --questions questions.csv --threshold 2 chat --no-banner
//! ```
//!
use crate::common::ui::{Console, StdConsole};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::matching::QuestionList;
use clap::Args;
use tracing::info;

pub mod input;
pub mod session;

use session::Session;

/// Arguments for `chatbot chat`.
#[derive(Args, Debug, Default)]
pub struct ChatArgs {
    /// Skip the welcome text and the numbered question list.
    #[arg(long)]
    pub no_banner: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs an interactive session on standard input/output until the user types
/// an exit keyword or input ends.
pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let responder = super::load_responder(config);
    let questions = super::load_questions(config);

    let mut console = StdConsole::stdio();
    if !args.no_banner {
        print_welcome(&questions, &mut console)?;
    }
    Session::new(&responder, &questions, &config.display).run(&mut console)
}

/// Usage hint followed by the numbered catalogue.
pub fn print_welcome<C: Console>(questions: &QuestionList, console: &mut C) -> Result<()> {
    console.write_line("Type \"quit\" or \"q\" to exit the program.")?;
    console.write_line("")?;
    console.write_line("Choose a number or enter your question.")?;
    for line in questions.numbered_lines() {
        console.write_line(&line)?;
    }
    Ok(())
}
