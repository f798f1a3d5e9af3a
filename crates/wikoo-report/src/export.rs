// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text report documents.

use std::path::{Path, PathBuf};

use tracing::info;
use wikoo_core::{ReportExporter, ReportResult, WikooError};

use crate::orchestrator::REPORT_DATE_FORMAT;

pub const REPORT_TITLE: &str = "Wikoo Wellness Report";

/// `Wikoo_Report_<YYYY-MM-DD>` with the given extension.
pub fn report_file_name(report: &ReportResult, extension: &str) -> String {
    format!(
        "Wikoo_Report_{}.{extension}",
        report.generated_on.format("%Y-%m-%d")
    )
}

/// Document body: title, date line, blank line, report text.
pub fn render_text(report: &ReportResult) -> String {
    format!(
        "{REPORT_TITLE}\nDate: {}\n\n{}\n",
        report.generated_on.format(REPORT_DATE_FORMAT),
        report.text
    )
}

/// Writes reports as `.txt` files into a directory.
#[derive(Debug, Clone)]
pub struct TextExporter {
    dir: PathBuf,
}

impl TextExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportExporter for TextExporter {
    fn export(&self, report: &ReportResult) -> Result<PathBuf, WikooError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| WikooError::Storage {
            source: Box::new(e),
        })?;
        let path = self.dir.join(report_file_name(report, "txt"));
        std::fs::write(&path, render_text(report)).map_err(|e| WikooError::Storage {
            source: Box::new(e),
        })?;
        info!(path = %path.display(), "report exported");
        Ok(path)
    }
}
