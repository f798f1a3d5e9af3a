// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Profile subcommands: `signup`, `login`, `logout`, `language`, `mood`.

use colored::Colorize;
use strum::IntoEnumIterator;
use wikoo_core::{Language, MoodSelection, WikooError};

use crate::app::App;

pub async fn run_signup(app: &App, name: Option<String>, email: &str) -> Result<(), WikooError> {
    let user = app
        .profile
        .signup(name.as_deref().unwrap_or_default(), email)
        .await?;
    println!("Welcome, {} 💙", user.name.bold());
    Ok(())
}

pub async fn run_login(app: &App, email: &str) -> Result<(), WikooError> {
    let user = app.profile.login(email).await?;
    println!("Welcome back, {} 💙", user.name.bold());
    Ok(())
}

pub async fn run_logout(app: &App) -> Result<(), WikooError> {
    app.profile.logout().await?;
    println!("{}", "Signed out. Local conversation and settings were cleared.".dimmed());
    Ok(())
}

/// Show the active language, or switch to `tag`.
pub async fn run_language(app: &App, tag: Option<&str>) -> Result<(), WikooError> {
    let Some(tag) = tag else {
        let current = app.profile.language().await?;
        for lang in Language::iter() {
            let marker = if lang == current { "*" } else { " " };
            println!(
                "{marker} {:<3} {:<7} {}",
                lang.code(),
                lang.locale_tag(),
                lang.native_name()
            );
        }
        return Ok(());
    };
    let lang = Language::from_tag(tag);
    app.profile.set_language(lang).await?;
    println!("language set to {} ({})", lang.native_name().bold(), lang.code());
    Ok(())
}

/// Show the last mood check-in, or record `mood`.
pub async fn run_mood(app: &App, mood: Option<MoodSelection>) -> Result<(), WikooError> {
    match mood {
        Some(mood) => {
            app.profile.set_mood(mood).await?;
            println!("{} {}", mood_emoji(mood), format!("mood saved: {mood}").bold());
        }
        None => match app.profile.mood().await? {
            Some(mood) => println!("{} {mood}", mood_emoji(mood)),
            None => println!("{}", "no mood recorded yet".dimmed()),
        },
    }
    Ok(())
}

pub fn mood_emoji(mood: MoodSelection) -> &'static str {
    match mood {
        MoodSelection::Great => "😄",
        MoodSelection::Good => "🙂",
        MoodSelection::Okay => "😐",
        MoodSelection::Low => "😔",
        MoodSelection::Bad => "😢",
    }
}
