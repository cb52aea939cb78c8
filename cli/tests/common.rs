//! # ChatBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! Shared helpers for the integration tests (`chat.rs`, `ask.rs`, ...). Every test
//! runs the compiled `chatbot` binary inside its own temporary directory holding
//! the data files, so nothing from the developer's machine leaks in:
//!
//! - the working directory is the temp dir (default data paths resolve there);
//! - a `.git` directory bounds the project config search to the temp dir;
//! - `HOME`/`XDG_CONFIG_HOME` point into the temp dir, hiding any user config.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

pub const KNOWLEDGE_BASE: &str = "\
hello world,Hi!,How are you?
hello,Hey.
How old are you?,I was compiled yesterday.,Still learning though.
What is your name?,My name is ChatBot.
";

pub const QUESTIONS: &str = "\
What is your name?
How old are you?
";

/// Helper function to create an `assert_cmd::Command` for the `chatbot` binary.
pub fn chatbot_cmd() -> Command {
    Command::cargo_bin("chatbot").expect("Failed to find chatbot binary for testing")
}

/// A temporary working directory with `ChatBotDB.csv` and `QuestionDB.csv`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_data(KNOWLEDGE_BASE, QUESTIONS)
    }

    pub fn with_data(knowledge_base: &str, questions: &str) -> Self {
        let workspace = Self::empty();
        workspace.write("ChatBotDB.csv", knowledge_base);
        workspace.write("QuestionDB.csv", questions);
        workspace
    }

    /// No data files at all.
    pub fn empty() -> Self {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// `chatbot` running inside this workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = chatbot_cmd();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("CHATBOT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}
