// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session analysis for Wikoo.
//!
//! [`ReportOrchestrator`] reduces the stored conversation to a mood score and
//! a narrative report, [`ChatSession`] runs the chat flow that fills the
//! conversation, and [`TextExporter`] saves finished reports.

pub mod chat;
pub mod export;
pub mod orchestrator;

pub use chat::ChatSession;
pub use export::{REPORT_TITLE, TextExporter, render_text, report_file_name};
pub use orchestrator::{REPORT_DATE_FORMAT, ReportOrchestrator, ReportState};
