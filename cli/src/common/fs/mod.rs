//! # ChatBot Filesystem Utilities Module (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! Filesystem helpers. Only reading is needed: the knowledge base and question
//! list are loaded once at startup and never written back.

/// Reading whole files and line-oriented data files.
pub mod io;
