// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wikoo status` command implementation.
//!
//! Reports the health of the local store, the companion service, and
//! speech output. With `--json` the same data is printed for scripting.

use std::io::IsTerminal;

use colored::Colorize;
use serde::Serialize;
use wikoo_core::{HealthStatus, PluginAdapter, WikooError};

use crate::app::App;

/// One adapter's health in `--json` output.
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub component: &'static str,
    pub name: String,
    pub healthy: bool,
    pub detail: Option<String>,
}

impl ComponentStatus {
    fn from_health(component: &'static str, name: &str, health: HealthStatus) -> Self {
        let (healthy, detail) = match health {
            HealthStatus::Healthy => (true, None),
            HealthStatus::Degraded(d) => (true, Some(d)),
            HealthStatus::Unhealthy(d) => (false, Some(d)),
        };
        Self {
            component,
            name: name.to_string(),
            healthy,
            detail,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub language: String,
    pub companion_url: String,
    pub components: Vec<ComponentStatus>,
}

async fn probe(component: &'static str, adapter: &dyn PluginAdapter) -> ComponentStatus {
    let health = adapter
        .health_check()
        .await
        .unwrap_or_else(|e| HealthStatus::Unhealthy(e.to_string()));
    ComponentStatus::from_health(component, adapter.name(), health)
}

pub async fn run_status(app: &App, json: bool, plain: bool) -> Result<(), WikooError> {
    let mut components = vec![
        probe("store", app.store.as_ref()).await,
        probe("companion", app.companion.as_ref()).await,
    ];
    components.push(match &app.speech {
        Some(speech) => probe("speech", speech.synthesizer.as_ref()).await,
        None => ComponentStatus {
            component: "speech",
            name: app.config.voice.command.clone(),
            healthy: false,
            detail: Some("disabled in config".to_string()),
        },
    });

    let status = StatusResponse {
        language: app.language().await?.code().to_string(),
        companion_url: app.companion.base_url().to_string(),
        components,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print_status(&status, use_color);
    }
    Ok(())
}

fn print_status(status: &StatusResponse, use_color: bool) {
    colored::control::set_override(use_color);
    println!("{}", "wikoo status".bold());
    println!("  language:  {}", status.language);
    println!("  companion: {}", status.companion_url);
    println!();
    for c in &status.components {
        let mark = if c.healthy { "ok".green() } else { "down".red() };
        match &c.detail {
            Some(detail) => println!(
                "  {:<10} {:<5} {} {}",
                c.component,
                mark,
                c.name,
                format!("({detail})").dimmed()
            ),
            None => println!("  {:<10} {:<5} {}", c.component, mark, c.name),
        }
    }
}
