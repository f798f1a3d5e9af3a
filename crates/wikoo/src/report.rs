// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wikoo report` command implementation.
//!
//! Generates a report from the stored conversation, prints the mood gauge
//! and the text, and optionally speaks and exports it.

use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use wikoo_core::{MoodTier, ReportResult, ReportSource, WikooError};
use wikoo_mood::MoodGauge;
use wikoo_report::{REPORT_TITLE, ReportOrchestrator, TextExporter};

use crate::app::App;

const GAUGE_WIDTH: usize = 20;

pub struct ReportArgs {
    pub export: Option<PathBuf>,
    pub speak: bool,
    pub json: bool,
}

pub async fn run_report(app: &App, args: ReportArgs) -> Result<(), WikooError> {
    let speak = args.speak && app.config.voice.auto_play_reports && !args.json;
    let mut orch = app.orchestrator(speak).await?;
    let result = orch.generate().await?.clone();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result, orch.gauge());
        if speak && app.speech.as_ref().is_some_and(|s| !s.selector.is_available()) {
            println!(
                "{}",
                orch.language()
                    .phrase(wikoo_core::Phrase::VoiceUnsupported)
                    .yellow()
            );
        }
    }

    if let Some(dir) = args.export {
        export(&orch, dir)?;
    }
    Ok(())
}

fn export(orch: &ReportOrchestrator, dir: PathBuf) -> Result<(), WikooError> {
    let path = orch.export(&TextExporter::new(dir))?;
    println!("saved {}", path.display().to_string().bold());
    Ok(())
}

fn print_report(result: &ReportResult, gauge: Option<MoodGauge>) {
    println!("{}", REPORT_TITLE.bold());
    println!("{}", format!("Date: {}", result.generated_on.format("%d/%m/%Y")).dimmed());
    println!();

    if let Some(gauge) = gauge {
        let style = gauge.style();
        println!(
            "{} {} {}",
            tint(&gauge.bar(GAUGE_WIDTH), gauge.tier),
            tint(style.label, gauge.tier).bold(),
            format!("({:.0}/100)", gauge.value).dimmed()
        );
        println!();
    }

    println!("{}", result.text);
    if result.source == ReportSource::Fallback {
        println!();
        println!("{}", "(the report service could not be reached)".dimmed());
    }
}

fn tint(text: &str, tier: MoodTier) -> ColoredString {
    match tier {
        MoodTier::Low => text.red(),
        MoodTier::Balanced => text.yellow(),
        MoodTier::Good => text.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(tint("[##]", MoodTier::Good).to_string(), "[##]");
        assert_eq!(tint("x", MoodTier::Low).to_string(), "x");
    }
}
