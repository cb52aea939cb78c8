//! # ChatBot CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatbot
//!
//! ## Overview
//!
//! Drives the interactive session through stdin and checks what reaches stdout.
//! `chatbot` with no command and `chatbot chat` are the same session.
//!

mod common;
use common::*;
use predicates::prelude::*;

const BANNER: &str = "\
Type \"quit\" or \"q\" to exit the program.

Choose a number or enter your question.
1- What is your name?
2- How old are you?
";

const INVALID_SELECTION: &str =
    "Invalid line number. You can enter a valid number or type a question: ";

#[test]
fn test_free_text_then_quit() {
    let workspace = Workspace::new();
    let expected = format!(
        "{}\nYou: ChatBot:Hi!\nHow are you?\n\nYou: ChatBot: Goodbye!\n",
        BANNER
    );

    workspace
        .cmd()
        .write_stdin("hello world\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_numeric_selection_answers_catalogue_question() {
    let workspace = Workspace::new();
    let expected = format!(
        "{}\nYou: ChatBot:I was compiled yesterday.\nStill learning though.\n\nYou: ChatBot: Goodbye!\n",
        BANNER
    );

    workspace
        .cmd()
        .arg("chat")
        .write_stdin("2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_out_of_range_selection_reprompts_then_quits() {
    let workspace = Workspace::new();
    let expected = format!("{}\nYou: {}ChatBot: Goodbye!\n", BANNER, INVALID_SELECTION);

    workspace
        .cmd()
        .write_stdin("5\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_reprompt_accepts_new_number_and_text() {
    let workspace = Workspace::new();

    workspace
        .cmd()
        .write_stdin("0\n9\n1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}{}", INVALID_SELECTION, INVALID_SELECTION)))
        .stdout(predicate::str::contains("ChatBot:My name is ChatBot.\n"));

    workspace
        .cmd()
        .write_stdin("42\nhello\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}ChatBot:Hi!\nHow are you?\n",
            INVALID_SELECTION
        )));
}

#[test]
fn test_unmatched_query_prints_sentinel() {
    let workspace = Workspace::new();

    workspace
        .cmd()
        .arg("chat")
        .arg("--no-banner")
        .write_stdin("tell me a joke\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "\nYou: ChatBot:Sorry\n I couldn't find a suitable answer.\n\nYou: ChatBot: Goodbye!\n",
        ));
}

#[test]
fn test_end_of_input_ends_session() {
    let workspace = Workspace::new();

    workspace
        .cmd()
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\nYou: \nChatBot: Goodbye!\n"));
}

#[test]
fn test_invalid_utf8_input_keeps_session_alive() {
    let workspace = Workspace::new();

    workspace
        .cmd()
        .write_stdin(b"hello world\n\xff\xfe caf\xe9\nq\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("You: ChatBot:Hi!\nHow are you?\n"))
        .stdout(predicate::str::contains("You: ChatBot:Sorry\n I couldn't find a suitable answer.\n"))
        .stdout(predicate::str::ends_with("ChatBot: Goodbye!\n"));
}

#[test]
fn test_missing_data_files_still_run() {
    let workspace = Workspace::empty();

    workspace
        .cmd()
        .write_stdin("hello world\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose a number or enter your question.\n\nYou: ChatBot:Sorry\n"))
        .stderr(predicate::str::contains("continuing with an empty knowledge base"));
}

#[test]
fn test_threshold_flag() {
    let workspace = Workspace::new();

    workspace
        .cmd()
        .args(["--threshold", "3", "chat", "--no-banner"])
        .write_stdin("hello world\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ChatBot:Sorry\n"));
}

#[test]
fn test_data_file_flags() {
    let workspace = Workspace::empty();
    let kb = workspace.write("answers.csv", "ping,pong\n");
    let questions = workspace.write("prompts.txt", "ping\n");

    workspace
        .cmd()
        .arg("--db")
        .arg(&kb)
        .arg("--questions")
        .arg(&questions)
        .write_stdin("1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1- ping\n"))
        .stdout(predicate::str::contains("You: ChatBot:pong\n"));
}

#[test]
fn test_project_config_file() {
    let workspace = Workspace::new();
    workspace.write(
        ".chatbot.toml",
        "[matching]\nthreshold = 2\n\n[display]\nspeaker_label = \"Bot> \"\nfarewell = \"Bye.\"\n",
    );

    workspace
        .cmd()
        .args(["chat", "--no-banner"])
        .write_stdin("hello\nhello world\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "\nYou: Bot> Sorry\n I couldn't find a suitable answer.\n\nYou: Bot> Hi!\nHow are you?\n\nYou: Bye.\n",
        ));
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_file() {
    let workspace = Workspace::new();
    std::fs::create_dir_all(workspace.path().join(".config/chatbot")).unwrap();
    workspace.write(".config/chatbot/config.toml", "[display]\nprompt = \"> \"\n");

    workspace
        .cmd()
        .args(["chat", "--no-banner"])
        .write_stdin("q\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\n> ChatBot:Sorry\n"));
}

#[test]
fn test_invalid_config_file_fails() {
    let workspace = Workspace::new();
    let config = workspace.write("broken.toml", "[matching]\nthreshold = \"high\"\n");

    workspace
        .cmd()
        .env("CHATBOT_CONFIG", &config)
        .write_stdin("q\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
