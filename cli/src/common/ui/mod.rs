//! # ChatBot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!

//! ## Overview
//!
//! The interactive session never touches `stdin`/`stdout` directly. It talks to a
//! [`Console`], which offers exactly three capabilities:
//!
//! - **`read_line`**: block until the next line arrives, or report end of input.
//! - **`write_line`**: emit a full line.
//! - **`write_prompt`**: emit text without a line break (and flush it), so the
//!   user types on the same line.
//!
//! [`StdConsole`] implements it over any `BufRead` + `Write` pair; `StdConsole::stdio()`
//! is what the binary uses. Unit tests use `ScriptedConsole`, which replays a fixed
//! list of input lines and records everything written.
//!
//! ```rust
//! let mut console = StdConsole::stdio();
//! console.write_prompt("You: ")?;
//! if let Some(line) = console.read_line()? {
//!     console.write_line(&format!("You said: {}", line))?;
//! }
//! ```
//!
use crate::core::error::{ChatbotError, Result};
use std::io::{self, BufRead, Write};

/// Line-oriented console collaborator.
pub trait Console {
    /// Returns the next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> Result<()>;

    fn write_prompt(&mut self, prompt: &str) -> Result<()>;
}

/// A [`Console`] over a buffered reader and a writer.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        // Raw bytes; a malformed sequence must not end the session.
        let mut buf = Vec::new();
        let bytes = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(ChatbotError::from)?;
        if bytes == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(ChatbotError::from)?;
        Ok(())
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}", prompt).map_err(ChatbotError::from)?;
        self.output.flush().map_err(ChatbotError::from)?;
        Ok(())
    }
}

/// Replays scripted input and captures output, for unit tests.
#[cfg(test)]
pub struct ScriptedConsole {
    input: std::collections::VecDeque<String>,
    pub output: String,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: String::new(),
        }
    }

    /// Captured output split into lines (a trailing prompt counts as a line).
    pub fn output_lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push_str(line);
        self.output.push('\n');
        Ok(())
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        self.output.push_str(prompt);
        Ok(())
    }
}
