// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wikoo remind` command implementation.

use colored::Colorize;
use wikoo_core::{CalendarReminder, CompanionService, EmailReminder, WikooError};

use crate::app::App;

pub enum ReminderKind {
    Calendar {
        title: Option<String>,
        description: Option<String>,
    },
    Email {
        subject: Option<String>,
        body: Option<String>,
    },
}

pub fn calendar_reminder(title: Option<String>, description: Option<String>) -> CalendarReminder {
    let defaults = CalendarReminder::default();
    CalendarReminder {
        title: title.unwrap_or(defaults.title),
        description: description.unwrap_or(defaults.description),
    }
}

pub fn email_reminder(subject: Option<String>, body: Option<String>) -> EmailReminder {
    let defaults = EmailReminder::default();
    EmailReminder {
        subject: subject.unwrap_or(defaults.subject),
        body: body.unwrap_or(defaults.body),
    }
}

/// Ask the companion service to schedule a reminder. Failures are not retried.
pub async fn run_remind(app: &App, kind: ReminderKind) -> Result<(), WikooError> {
    let message = match kind {
        ReminderKind::Calendar { title, description } => {
            app.companion
                .calendar_reminder(&calendar_reminder(title, description))
                .await?
        }
        ReminderKind::Email { subject, body } => {
            app.companion
                .email_reminder(&email_reminder(subject, body))
                .await?
        }
    };
    if message.is_empty() {
        println!("{}", "reminder scheduled".green());
    } else {
        println!("{}", message.green());
    }
    Ok(())
}
