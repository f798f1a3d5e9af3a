// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Companion service double with scripted outcomes.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use wikoo_core::{
    AdapterType, CalendarReminder, ChatRequest, CompanionService, EmailReminder, HealthStatus,
    PluginAdapter, ReportRequest, WikooError,
};

/// One queued outcome.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// The service answers with this text.
    Reply(String),
    /// The service answers with a non-success status.
    Status(u16),
    /// The request never reaches the service.
    Unreachable,
    /// The service accepts the request and never answers.
    Hang,
}

impl Scripted {
    async fn resolve(self) -> Result<String, WikooError> {
        match self {
            Scripted::Reply(text) => Ok(text),
            Scripted::Status(code) => Err(WikooError::Service {
                message: format!("companion returned HTTP {code}"),
                status: Some(code),
                source: None,
            }),
            Scripted::Unreachable => Err(WikooError::Service {
                message: "connection refused".into(),
                status: None,
                source: None,
            }),
            Scripted::Hang => std::future::pending().await,
        }
    }
}

#[derive(Default)]
struct Recorded {
    reports: Vec<ReportRequest>,
    chats: Vec<ChatRequest>,
    calendar: Vec<CalendarReminder>,
    email: Vec<EmailReminder>,
}

/// A [`CompanionService`] that pops outcomes from a FIFO queue and records
/// every request it receives.
///
/// An empty queue answers `"mock reply"`.
#[derive(Default)]
pub struct ScriptedCompanion {
    outcomes: Mutex<VecDeque<Scripted>>,
    recorded: Mutex<Recorded>,
}

impl ScriptedCompanion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcomes(outcomes: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            recorded: Mutex::default(),
        }
    }

    pub fn push(&self, outcome: Scripted) {
        lock(&self.outcomes).push_back(outcome);
    }

    pub fn report_requests(&self) -> Vec<ReportRequest> {
        lock(&self.recorded).reports.clone()
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        lock(&self.recorded).chats.clone()
    }

    pub fn calendar_requests(&self) -> Vec<CalendarReminder> {
        lock(&self.recorded).calendar.clone()
    }

    pub fn email_requests(&self) -> Vec<EmailReminder> {
        lock(&self.recorded).email.clone()
    }

    /// Total number of calls of any kind.
    pub fn call_count(&self) -> usize {
        let r = lock(&self.recorded);
        r.reports.len() + r.chats.len() + r.calendar.len() + r.email.len()
    }

    async fn next(&self) -> Result<String, WikooError> {
        let outcome = lock(&self.outcomes)
            .pop_front()
            .unwrap_or_else(|| Scripted::Reply("mock reply".into()));
        outcome.resolve().await
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl PluginAdapter for ScriptedCompanion {
    fn name(&self) -> &str {
        "scripted-companion"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Companion
    }

    async fn health_check(&self) -> Result<HealthStatus, WikooError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), WikooError> {
        Ok(())
    }
}

#[async_trait]
impl CompanionService for ScriptedCompanion {
    async fn generate_report(&self, request: &ReportRequest) -> Result<String, WikooError> {
        lock(&self.recorded).reports.push(request.clone());
        self.next().await
    }

    async fn chat_reply(&self, request: &ChatRequest) -> Result<String, WikooError> {
        lock(&self.recorded).chats.push(request.clone());
        self.next().await
    }

    async fn calendar_reminder(
        &self,
        reminder: &CalendarReminder,
    ) -> Result<String, WikooError> {
        lock(&self.recorded).calendar.push(reminder.clone());
        self.next().await
    }

    async fn email_reminder(&self, reminder: &EmailReminder) -> Result<String, WikooError> {
        lock(&self.recorded).email.push(reminder.clone());
        self.next().await
    }
}
