// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for check reports.

pub mod json;
pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Print only diagnostics: no headings or summaries.
    pub quiet: bool,

    /// Print a `== Checking ... ==` heading before each unit.
    pub headings: bool,
}

impl FormatOptions {
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            headings: false,
        }
    }

    pub fn with_headings(mut self, headings: bool) -> Self {
        self.headings = headings;
        self
    }
}
