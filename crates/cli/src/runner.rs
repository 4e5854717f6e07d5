// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel unit runner with error isolation.
//!
//! Units are checked in parallel using rayon; reports come back in input
//! order. A unit that cannot be read or parsed yields a failed report and
//! the remaining units still run.

use rayon::prelude::*;

use crate::checker::FileChecker;
use crate::commit::{self, CommitMessage, MessageOptions};
use crate::diagnostic::Report;
use crate::error::Result;
use crate::patch::{self, Patch};
use crate::sources::{Input, InputKind};

/// Checks whole units: commit message plus every file change.
pub struct CheckRunner<'r> {
    files: FileChecker<'r>,
    message: MessageOptions,
}

impl<'r> CheckRunner<'r> {
    pub fn new(files: FileChecker<'r>, message: MessageOptions) -> Self {
        Self { files, message }
    }

    /// Check every input, in parallel, preserving order.
    pub fn run(&self, inputs: &[Input]) -> Vec<Report> {
        inputs.par_iter().map(|input| self.check(input)).collect()
    }

    /// Check one input; errors become a failed report.
    pub fn check(&self, input: &Input) -> Report {
        let report = input
            .read()
            .and_then(|text| self.check_text(&input.name, input.kind, &text));
        let report = match report {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("{}: {}", input.name, e);
                Report::failed(&input.name, e.to_string())
            }
        };
        match &input.title {
            Some(title) => report.with_title(title),
            None => report,
        }
    }

    /// Check already-loaded text.
    pub fn check_text(&self, name: &str, kind: InputKind, text: &str) -> Result<Report> {
        let patch = match kind {
            InputKind::Patch => patch::parse(name, text)?,
            InputKind::Source => Patch::from_source(name, text),
        };
        Ok(self.check_patch(name, &patch))
    }

    /// Check a parsed patch.
    ///
    /// Sign-offs are only validated when there is a commit message.
    pub fn check_patch(&self, name: &str, patch: &Patch) -> Report {
        let mut report = Report::new(name);
        report.lines_checked = patch.total_lines;

        if patch.has_message() {
            let message = CommitMessage::parse(&patch.message);
            report.extend(commit::check_commit(&message, &self.message));
        }

        for change in &patch.files {
            report.extend(self.files.check_file(&change.name, &change.lines));
        }

        tracing::debug!(
            "{}: {} lines, {} warnings, {} errors",
            name,
            report.lines_checked,
            report.warnings(),
            report.errors()
        );
        report
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
