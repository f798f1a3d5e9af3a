// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wikoo chat` command implementation.
//!
//! Interactive REPL over a [`ChatSession`] with readline history.
//! Slash commands replay replies and show the log without leaving the chat.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use wikoo_core::{Language, Phrase, Utterance, WikooError};
use wikoo_report::ChatSession;

use crate::app::App;
use crate::history::print_utterance;

/// A line typed at the chat prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    History,
    Speak(Option<usize>),
    Help,
    Message(&'a str),
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix('/') else {
        return Input::Message(trimmed);
    };
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("quit" | "exit") => Input::Quit,
        Some("history") => Input::History,
        Some("help") => Input::Help,
        Some("speak") => Input::Speak(parts.next().and_then(|n| n.parse().ok())),
        _ => Input::Unknown(trimmed),
    }
}

/// Runs the `wikoo chat` REPL.
pub async fn run_chat(app: &App) -> Result<(), WikooError> {
    let session = app.chat_session().await?;
    let lang = session.language();

    let mut rl = DefaultEditor::new()
        .map_err(|e| WikooError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", app.config.app.name.bold().green());
    println!(
        "Type {} to exit, {} for commands.\n",
        "/quit".yellow(),
        "/help".yellow()
    );

    for (index, utterance) in session.open().await?.iter().enumerate() {
        print_utterance(index, utterance);
    }

    let prompt = format!("{}> ", "you".cyan());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let input = parse_input(&line);
                if input == Input::Quit {
                    break;
                }
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(&line);
                }
                if let Err(e) = handle_input(&session, lang, input).await {
                    eprintln!("{}: {e}", "error".red());
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    if let Some(speech) = &app.speech {
        speech.selector.cancel().await;
    }
    Ok(())
}

async fn handle_input(
    session: &ChatSession,
    lang: Language,
    input: Input<'_>,
) -> Result<(), WikooError> {
    match input {
        Input::Quit => {}
        Input::Message(text) => {
            if let Some(reply) = session.send(text).await? {
                print_bot(&reply);
            }
        }
        Input::History => {
            for (index, utterance) in session.history().await?.iter().enumerate() {
                print_utterance(index, utterance);
            }
        }
        Input::Speak(index) => {
            let log = session.history().await?;
            let index = match index {
                Some(i) => Some(i),
                None => log.iter().rposition(|u| !u.is_user()),
            };
            let Some(index) = index else {
                println!("{}", "nothing to speak yet".dimmed());
                return Ok(());
            };
            match session.speak(index).await {
                Ok(_) => {}
                Err(WikooError::CapabilityUnsupported(_)) => {
                    println!("{}", lang.phrase(Phrase::VoiceUnsupported).yellow());
                }
                Err(e) => return Err(e),
            }
        }
        Input::Help => {
            println!("  {}          show the conversation", "/history".yellow());
            println!("  {} [n]       speak reply n (default: latest)", "/speak".yellow());
            println!("  {}             leave the chat", "/quit".yellow());
        }
        Input::Unknown(cmd) => {
            println!("unknown command {}, try {}", cmd.yellow(), "/help".yellow());
        }
    }
    Ok(())
}

fn print_bot(reply: &Utterance) {
    println!("{} {}", "wikoo>".green(), reply.text);
}
