//! # ChatBot One-Shot Query
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! `chatbot ask <QUERY>...` answers a single query and exits, which makes the
//! knowledge base easy to probe from scripts:
//!
//! ```bash
//! chatbot ask what is your name
//! chatbot --threshold 3 ask how old are you
//! ```
//!
//! The words are joined with single spaces; since matching splits on whitespace
//! anyway, quoting the query or not gives the same answer. A query that matches
//! nothing prints the "no suitable answer" text and still exits with status 0.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The query to answer.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

pub fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let query = args.query.join(" ");
    info!("Answering one-shot query: {:?}", query);

    let responder = super::load_responder(config);
    for line in responder.respond(&query) {
        println!("{}", line);
    }
    Ok(())
}
