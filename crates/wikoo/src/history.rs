// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wikoo history` command implementation.

use colored::Colorize;
use serde::Serialize;
use wikoo_core::{Sender, Utterance, WikooError};

use crate::app::App;

#[derive(Serialize)]
struct HistoryEntry<'a> {
    index: usize,
    #[serde(flatten)]
    utterance: &'a Utterance,
}

/// Print the whole conversation log in order.
pub async fn run_history(app: &App, json: bool) -> Result<(), WikooError> {
    let log = app.conversations.load().await?;
    if json {
        let entries: Vec<HistoryEntry<'_>> = log
            .iter()
            .enumerate()
            .map(|(index, utterance)| HistoryEntry { index, utterance })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    if log.is_empty() {
        println!("{}", "no conversation yet".dimmed());
        return Ok(());
    }
    for (index, utterance) in log.iter().enumerate() {
        print_utterance(index, utterance);
    }
    Ok(())
}

pub fn speaker_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "you",
        Sender::Bot => "wikoo",
    }
}

pub fn print_utterance(index: usize, utterance: &Utterance) {
    let label = format!("{}>", speaker_label(utterance.sender));
    let label = match utterance.sender {
        Sender::User => label.cyan(),
        Sender::Bot => label.green(),
    };
    println!("{} {label} {}", format!("[{index}]").dimmed(), utterance.text);
}
