// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic and per-unit report types.

use std::fmt;

use serde::Serialize;

/// How serious a diagnostic is. Only errors fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("WARNING"),
            Severity::Error => f.write_str("ERROR"),
        }
    }
}

/// A single reported issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// File the issue was found in (None for commit-message issues).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// 1-based line number (None for whole-message issues).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    pub severity: Severity,

    /// Name of the rule that produced this diagnostic, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    /// Rule-provided description.
    pub message: String,

    /// The offending text, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic attached to a file line.
    pub fn at_line(
        file: impl Into<String>,
        line: u32,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line),
            severity,
            rule: None,
            message: message.into(),
            source: None,
        }
    }

    /// Create a diagnostic with no file or line context.
    pub fn general(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            file: None,
            line: None,
            severity,
            rule: None,
            message: message.into(),
            source: None,
        }
    }

    /// Create an error with no file or line context.
    pub fn error(message: impl Into<String>) -> Self {
        Self::general(Severity::Error, message)
    }

    /// Create a warning with no file or line context.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::general(Severity::Warning, message)
    }

    /// Attach a line number without a file (commit-message lines).
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Record which rule produced the diagnostic.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Attach the offending source text.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Everything found while checking one input unit (patch, commit, or file).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Display name of the unit (path, `-`, or commit id).
    pub name: String,

    /// Optional heading, e.g. the commit subject for `--recent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Number of input lines examined.
    pub lines_checked: usize,

    /// Diagnostics in the order they were produced.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A report for a unit that could not be checked at all.
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut report = Self::new(name);
        report.diagnostics.push(Diagnostic::error(message));
        report
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn errors(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics.len() - self.errors()
    }

    /// True when nothing at error severity was reported.
    pub fn passed(&self) -> bool {
        self.errors() == 0
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
