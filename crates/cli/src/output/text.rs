// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! == Checking <unit> ==
//! <file>:<line>: WARNING: <message>
//! <offending line>
//!
//! Lines checked: <n>, Warnings: <w>, Errors: <e>
//! ```

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::diagnostic::{Diagnostic, Report, Severity};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write one unit's report (streaming).
    pub fn write_report(&mut self, report: &Report) -> std::io::Result<()> {
        if self.options.headings && !self.options.quiet {
            self.write_heading(report)?;
        }

        for diagnostic in &report.diagnostics {
            self.write_diagnostic(diagnostic)?;
        }

        if !self.options.quiet {
            self.write_summary(report)?;
        }
        self.writer.flush()
    }

    fn write_heading(&mut self, report: &Report) -> std::io::Result<()> {
        self.writer.set_color(&scheme::heading())?;
        match &report.title {
            Some(title) => write!(self.writer, "== Checking {} (\"{}\") ==", report.name, title)?,
            None => write!(self.writer, "== Checking {} ==", report.name)?,
        }
        self.writer.reset()?;
        writeln!(self.writer)
    }

    fn write_diagnostic(&mut self, d: &Diagnostic) -> std::io::Result<()> {
        if let Some(file) = &d.file {
            self.writer.set_color(&scheme::path())?;
            write!(self.writer, "{}", file)?;
            self.writer.reset()?;
            if let Some(line) = d.line {
                write!(self.writer, ":")?;
                self.writer.set_color(&scheme::line_number())?;
                write!(self.writer, "{}", line)?;
                self.writer.reset()?;
            }
            write!(self.writer, ": ")?;
        }

        let label = match d.severity {
            Severity::Error => scheme::error(),
            Severity::Warning => scheme::warning(),
        };
        self.writer.set_color(&label)?;
        write!(self.writer, "{}", d.severity)?;
        self.writer.reset()?;
        writeln!(self.writer, ": {}", d.message)?;

        // Message lines carry their number with the source; file lines
        // already printed it in the location prefix.
        match (&d.file, d.line, &d.source) {
            (Some(_), _, Some(source)) => {
                self.writer.set_color(&scheme::source())?;
                write!(self.writer, "{}", source)?;
                self.writer.reset()?;
                writeln!(self.writer)?;
            }
            (None, Some(line), Some(source)) => {
                self.writer.set_color(&scheme::source())?;
                write!(self.writer, "{}: {}", line, source)?;
                self.writer.reset()?;
                writeln!(self.writer)?;
            }
            _ => {}
        }
        writeln!(self.writer)
    }

    /// Write the per-unit summary line.
    pub fn write_summary(&mut self, report: &Report) -> std::io::Result<()> {
        if report.diagnostics.is_empty() {
            write!(self.writer, "Lines checked: {}, ", report.lines_checked)?;
            self.writer.set_color(&scheme::clean())?;
            write!(self.writer, "no obvious problems found")?;
            self.writer.reset()?;
            writeln!(self.writer)?;
        } else {
            writeln!(
                self.writer,
                "Lines checked: {}, Warnings: {}, Errors: {}",
                report.lines_checked,
                report.warnings(),
                report.errors()
            )?;
        }
        writeln!(self.writer)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
