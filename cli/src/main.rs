//! # ChatBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ChatBot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the layered configuration
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `matching`: the knowledge base and the overlap-scoring engine
//! - `commands`: `chat` (default), `ask`, `questions`
//! - `common`: console and filesystem helpers
//! - `core`: configuration and error types
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting with ChatBotDB.csv / QuestionDB.csv from the current directory
//! chatbot
//!
//! # One-shot query with debug logging
//! chatbot -vv ask what is your name
//! ```
//!
//! Logs go to stderr; stdout carries only the conversation.
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (chat, ask, questions)
mod common; // Shared utilities (console, fs)
mod core; // Core infrastructure (errors, config)
mod matching; // Knowledge base and matching engine

use crate::core::config::{self, ConfigOverrides};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatbot",
    about = "ChatBot: answers your questions from a canned knowledge base",
    long_about = "Matches free-text questions against key phrases by shared words and prints\n\
                  the best answer. Pick a question by number or type your own.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user/project files.
    #[arg(long, env = "CHATBOT_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Knowledge base file (`key phrase,answer` per line).
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Question catalogue file (one question per line).
    #[arg(long = "questions", global = true)]
    questions_file: Option<PathBuf>,
    /// Minimum number of shared words for an answer to be selected.
    #[arg(long, global = true)]
    threshold: Option<u32>,
}

/// Enum defining all available commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive session (default).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single query and exit.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the numbered question catalogue.
    #[command(alias = "q")]
    Questions,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        knowledge_base: cli.db,
        questions: cli.questions_file,
        threshold: cli.threshold,
    };
    let config = config::load_config(cli.config.as_deref(), &overrides)?;

    match cli.command.unwrap_or(Commands::Chat(Default::default())) {
        Commands::Chat(args) => commands::chat::handle_chat(args, &config),
        Commands::Ask(args) => commands::ask::handle_ask(args, &config),
        Commands::Questions => commands::questions::handle_questions(&config),
    }
}
