// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote companion service trait (report writer, chat replies, reminders).

use async_trait::async_trait;

use crate::error::WikooError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{CalendarReminder, ChatRequest, EmailReminder, ReportRequest};

/// The remote text generator and reminder scheduler.
///
/// Implementations make exactly one attempt per call. Any transport failure
/// or non-success status surfaces as [`WikooError::Service`]; the caller
/// decides what the user sees instead.
#[async_trait]
pub trait CompanionService: PluginAdapter {
    /// Produce a wellness report for the given conversation context.
    async fn generate_report(&self, request: &ReportRequest) -> Result<String, WikooError>;

    /// Produce a single chat reply.
    async fn chat_reply(&self, request: &ChatRequest) -> Result<String, WikooError>;

    /// Schedule a calendar reminder. Returns the service's confirmation text.
    async fn calendar_reminder(&self, reminder: &CalendarReminder)
    -> Result<String, WikooError>;

    /// Schedule an email reminder. Returns the service's confirmation text.
    async fn email_reminder(&self, reminder: &EmailReminder) -> Result<String, WikooError>;
}
