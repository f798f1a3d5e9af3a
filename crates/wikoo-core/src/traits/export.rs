// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Report export trait.

use std::path::PathBuf;

use crate::error::WikooError;
use crate::types::ReportResult;

/// Renders a report to a document the user can keep.
pub trait ReportExporter: Send + Sync {
    /// Write `report` and return the path of the created document.
    fn export(&self, report: &ReportResult) -> Result<PathBuf, WikooError>;
}
