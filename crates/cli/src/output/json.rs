// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end as one document covering every
//! checked unit.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::diagnostic::{Diagnostic, Report};

/// The complete JSON document.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub timestamp: String,
    pub passed: bool,
    pub units: Vec<UnitOutput<'a>>,
}

/// One checked unit with its counts.
#[derive(Debug, Serialize)]
pub struct UnitOutput<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    pub passed: bool,
    pub lines_checked: usize,
    pub warnings: usize,
    pub errors: usize,
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> From<&'a Report> for UnitOutput<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            name: &report.name,
            title: report.title.as_deref(),
            passed: report.passed(),
            lines_checked: report.lines_checked,
            warnings: report.warnings(),
            errors: report.errors(),
            diagnostics: &report.diagnostics,
        }
    }
}

/// Create the JSON document with the current timestamp.
pub fn create_output(reports: &[Report]) -> JsonOutput<'_> {
    JsonOutput {
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        passed: reports.iter().all(Report::passed),
        units: reports.iter().map(Into::into).collect(),
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &JsonOutput<'_>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
