//! # Interactive Session State Machine
//!
//! File: cli/src/commands/chat/session.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! The conversation is a small state machine. Each call to [`Session::step`] reads
//! at most one line, prints whatever that line produces, and returns the next state.
//! All console access and the decision to stop live here; the matching engine only
//! computes answers.
//!
//! ## States
//!
//! - `AwaitingFirstInput`: a number selects from the question catalogue, anything
//!   else is answered as a query. Exit keywords are not recognised yet.
//! - `ResolvingNumericSelection(n)`: a valid `n` answers question `n`. Otherwise the
//!   user is re-prompted; the reply may be an exit keyword, another number (checked
//!   again) or a query (answered, then straight on to chatting).
//! - `Chatting`: exit keywords end the session, every other line is answered.
//! - `Terminated`: the farewell is printed by [`Session::run`].
//!
//! End of input in any reading state leads to `Terminated`.
//!
use super::input::{self, Input};
use crate::common::ui::Console;
use crate::core::config::DisplayConfig;
use crate::core::error::Result;
use crate::matching::{QuestionList, Responder};
use tracing::debug;

/// Printed (without a line break) when a question number is out of range.
pub const INVALID_SELECTION_PROMPT: &str =
    "Invalid line number. You can enter a valid number or type a question: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingFirstInput,
    ResolvingNumericSelection(usize),
    Chatting,
    Terminated,
}

pub struct Session<'a> {
    responder: &'a Responder,
    questions: &'a QuestionList,
    display: &'a DisplayConfig,
}

impl<'a> Session<'a> {
    pub fn new(
        responder: &'a Responder,
        questions: &'a QuestionList,
        display: &'a DisplayConfig,
    ) -> Self {
        Self {
            responder,
            questions,
            display,
        }
    }

    /// Drives the state machine from `AwaitingFirstInput` until it terminates,
    /// then prints the farewell line.
    pub fn run<C: Console>(&self, console: &mut C) -> Result<()> {
        let mut state = SessionState::AwaitingFirstInput;
        while state != SessionState::Terminated {
            let next = self.step(state, console)?;
            debug!("Session transition: {:?} -> {:?}", state, next);
            state = next;
        }
        console.write_line(&self.display.farewell)?;
        Ok(())
    }

    pub fn step<C: Console>(&self, state: SessionState, console: &mut C) -> Result<SessionState> {
        match state {
            SessionState::AwaitingFirstInput => {
                let Some(line) = self.prompt(console)? else {
                    return end_of_input(console);
                };
                match input::parse_selection(&line) {
                    Some(number) => Ok(SessionState::ResolvingNumericSelection(number)),
                    None => {
                        self.answer(&line, console)?;
                        Ok(SessionState::Chatting)
                    }
                }
            }
            SessionState::ResolvingNumericSelection(number) => {
                if let Some(question) = self.questions.get(number) {
                    debug!("Question {} selected: {:?}", number, question);
                    self.answer(question, console)?;
                    return Ok(SessionState::Chatting);
                }
                debug!(
                    "Question number {} is outside 1..={}",
                    number,
                    self.questions.len()
                );
                console.write_prompt(INVALID_SELECTION_PROMPT)?;
                let Some(line) = console.read_line()? else {
                    return end_of_input(console);
                };
                match input::classify(&line) {
                    Input::Exit => Ok(SessionState::Terminated),
                    Input::Selection(retry) => Ok(SessionState::ResolvingNumericSelection(retry)),
                    Input::Text(query) => {
                        self.answer(query, console)?;
                        Ok(SessionState::Chatting)
                    }
                }
            }
            SessionState::Chatting => {
                let Some(line) = self.prompt(console)? else {
                    return end_of_input(console);
                };
                if input::is_exit_keyword(&line) {
                    return Ok(SessionState::Terminated);
                }
                self.answer(&line, console)?;
                Ok(SessionState::Chatting)
            }
            SessionState::Terminated => Ok(SessionState::Terminated),
        }
    }

    /// Blank line, then the prompt on the line the user types on.
    fn prompt<C: Console>(&self, console: &mut C) -> Result<Option<String>> {
        console.write_line("")?;
        console.write_prompt(&self.display.prompt)?;
        console.read_line()
    }

    fn answer<C: Console>(&self, query: &str, console: &mut C) -> Result<()> {
        for line in self.responder.respond(query) {
            console.write_line(&line)?;
        }
        Ok(())
    }
}

// Moves the farewell off the unanswered prompt line.
fn end_of_input<C: Console>(console: &mut C) -> Result<SessionState> {
    debug!("End of input reached.");
    console.write_line("")?;
    Ok(SessionState::Terminated)
}
