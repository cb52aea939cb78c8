//! # ChatBot Matching Engine
//!
//! File: cli/src/matching/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! Everything needed to turn a query into printable answer lines, with no I/O
//! beyond the one-time loading of the data files:
//!
//! - `knowledge`: the `KnowledgeBase` and `QuestionList` containers and their file format
//! - `tokenizer`: whitespace tokenization
//! - `scorer`: shared-word counting between a key phrase and a query
//! - `selector`: picking the best-scoring answer under a threshold
//! - `render`: turning a comma-encoded answer into display lines
//! - `responder`: the knowledge base plus its threshold and speaker label, answering queries
//!
//! ## Usage
//!
//! ```rust
//! let kb = KnowledgeBase::parse("hello world,Hi!,How are you?\nhello,Hey.\n");
//! let responder = Responder::new(kb, 1, "ChatBot:");
//! for line in responder.respond("hello world") {
//!     println!("{}", line); // "ChatBot:Hi!" then "How are you?"
//! }
//! ```
//!
pub mod knowledge;
pub mod render;
pub mod responder;
pub mod scorer;
pub mod selector;
pub mod tokenizer;

pub use knowledge::{KnowledgeBase, QuestionList};
pub use responder::Responder;
