//! # ChatBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! This module aggregates the commands of the ChatBot CLI. Each command defines
//! its own arguments structure and a handler that receives the already loaded
//! configuration.
//!
//! ## Commands
//!
//! - `chat`: Interactive session (the default)
//! - `ask`: Answer one query and exit
//! - `questions`: Print the numbered question catalogue
//!
//! The helpers below load the two data files. Neither can fail: an unreadable
//! file is logged and treated as empty.
//!
use crate::core::config::Config;
use crate::matching::{KnowledgeBase, QuestionList, Responder};
use std::path::Path;

/// One-shot query command.
pub mod ask;
/// Interactive session command, including the conversation state machine.
pub mod chat;
/// Question catalogue listing.
pub mod questions;

/// Loads the knowledge base named in `config` and wraps it with the matching settings.
pub fn load_responder(config: &Config) -> Responder {
    let kb = KnowledgeBase::load(Path::new(&config.data.knowledge_base));
    Responder::from_config(kb, config)
}

pub fn load_questions(config: &Config) -> QuestionList {
    QuestionList::load(Path::new(&config.data.questions))
}
