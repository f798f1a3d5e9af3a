// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response bodies of the companion service.
//!
//! Fields default to empty so a response missing its field parses; callers
//! decide what an empty value means.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub report: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReminderResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body some deployments return alongside a failure status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub detail: String,
}
