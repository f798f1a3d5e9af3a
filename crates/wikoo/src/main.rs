// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wikoo - a multilingual wellness companion for the terminal.
//!
//! This is the binary entry point.

mod app;
mod chat;
mod history;
mod profile;
mod remind;
mod report;
mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use wikoo_core::{MoodSelection, WikooError};

use crate::app::App;
use crate::remind::ReminderKind;
use crate::report::ReportArgs;

/// Wikoo - a multilingual wellness companion.
#[derive(Parser, Debug)]
#[command(name = "wikoo", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Talk with Wikoo.
    Chat,
    /// Generate a wellness report from the conversation so far.
    Report {
        /// Write the report as a text file into this directory.
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
        /// Do not read the report aloud.
        #[arg(long)]
        quiet: bool,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the conversation log.
    History {
        #[arg(long)]
        json: bool,
    },
    /// Create a local profile.
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Sign in with an email address.
    Login {
        #[arg(long)]
        email: String,
    },
    /// Sign out and clear everything stored on this device.
    Logout,
    /// Show or change the conversation language (en, ta, hi).
    Language { tag: Option<String> },
    /// Show or record how you feel right now.
    Mood { mood: Option<MoodSelection> },
    /// Ask the companion service to schedule a reminder.
    Remind {
        #[command(subcommand)]
        kind: RemindCommand,
    },
    /// Show store, companion, and speech health.
    Status {
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Subcommand, Debug)]
enum RemindCommand {
    /// Create a calendar event.
    Calendar {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Send a reminder email.
    Email {
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => wikoo_config::load_and_validate_path(path),
        None => wikoo_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            wikoo_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let Some(command) = cli.command else {
        println!("wikoo: use --help for available commands");
        return;
    };

    let app = match App::open(config).await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            std::process::exit(1);
        }
    };

    let result = dispatch(&app, command).await;
    app.close().await;

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

async fn dispatch(app: &App, command: Commands) -> Result<(), WikooError> {
    match command {
        Commands::Chat => chat::run_chat(app).await,
        Commands::Report {
            export,
            quiet,
            json,
        } => {
            report::run_report(
                app,
                ReportArgs {
                    export,
                    speak: !quiet,
                    json,
                },
            )
            .await
        }
        Commands::History { json } => history::run_history(app, json).await,
        Commands::Signup { email, name } => profile::run_signup(app, name, &email).await,
        Commands::Login { email } => profile::run_login(app, &email).await,
        Commands::Logout => profile::run_logout(app).await,
        Commands::Language { tag } => profile::run_language(app, tag.as_deref()).await,
        Commands::Mood { mood } => profile::run_mood(app, mood).await,
        Commands::Remind { kind } => {
            let kind = match kind {
                RemindCommand::Calendar { title, description } => {
                    ReminderKind::Calendar { title, description }
                }
                RemindCommand::Email { subject, body } => ReminderKind::Email { subject, body },
            };
            remind::run_remind(app, kind).await
        }
        Commands::Status { json, plain } => status::run_status(app, json, plain).await,
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wikoo={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
