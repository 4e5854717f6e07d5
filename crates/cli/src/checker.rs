// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file rule evaluation.
//!
//! Lines are visited in order. Classifier state and tracker state are
//! threaded through the traversal and dropped at the end of the file.

use std::cell::Cell;
use std::sync::Once;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::classify::{CommentState, classify};
use crate::diagnostic::{Diagnostic, Severity};
use crate::error::{Error, Result};
use crate::rules::{LineContext, LineTracker, Registry, Rule, RuleKind};

/// Paths that are vendored or mirrored from elsewhere; only line length is
/// checked there.
pub const DEFAULT_SKIP_PATHS: &[&str] = &[
    "datapath/**",
    "include/linux/**",
    "include/sparse/**",
    "utilities/bugtool/**",
];

/// One line of a file, with its 1-based number in the new version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: u32,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Number every line of a whole file from 1.
pub fn number_lines(content: &str) -> Vec<SourceLine> {
    content
        .lines()
        .zip(1u32..)
        .map(|(text, number)| SourceLine::new(number, text))
        .collect()
}

/// Build a glob set from skip-path patterns.
pub fn build_skip_paths<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|e| Error::Config {
            message: format!("invalid skip path `{}`: {}", pattern, e),
            path: None,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::Config {
        message: format!("invalid skip paths: {}", e),
        path: None,
    })
}

/// Applies a rule registry to files.
pub struct FileChecker<'r> {
    registry: &'r Registry,
    skip_paths: GlobSet,
}

impl<'r> FileChecker<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            skip_paths: GlobSet::empty(),
        }
    }

    /// Files matching `skip_paths` are only checked for line length.
    pub fn with_skip_paths(mut self, skip_paths: GlobSet) -> Self {
        self.skip_paths = skip_paths;
        self
    }

    fn rules_for(&self, filename: &str) -> Vec<&'r Rule> {
        let length_only = self.skip_paths.is_match(filename);
        self.registry
            .matching(filename)
            .into_iter()
            .filter(|rule| !length_only || rule.kind == RuleKind::LineLength)
            .collect()
    }

    /// Check the given lines of `filename`.
    ///
    /// A gap in line numbers starts a new hunk: comment state is reset.
    pub fn check_file(&self, filename: &str, lines: &[SourceLine]) -> Vec<Diagnostic> {
        let rules = self.rules_for(filename);
        if rules.is_empty() {
            return Vec::new();
        }
        tracing::trace!("{}: {} rules apply", filename, rules.len());

        let mut trackers: Vec<Option<Box<dyn LineTracker>>> =
            rules.iter().map(|rule| rule.new_tracker()).collect();
        let mut state = CommentState::default();
        let mut previous: Option<u32> = None;
        let mut diagnostics = Vec::new();

        for line in lines {
            if previous.is_some_and(|p| p.checked_add(1) != Some(line.number)) {
                state = CommentState::default();
            }
            previous = Some(line.number);

            let (classified, next) = classify(&line.text, state);
            state = next;
            let ctx = LineContext {
                filename,
                line: &line.text,
                number: line.number,
                classified: &classified,
            };

            let mut reported: Vec<String> = Vec::new();
            for (rule, tracker) in rules.iter().zip(trackers.iter_mut()) {
                let diagnostic = match evaluate(rule, &ctx, tracker.as_mut()) {
                    Ok(None) => continue,
                    Ok(Some(message)) => {
                        // Several operator rules can fire on one line.
                        if reported.contains(&message) {
                            continue;
                        }
                        reported.push(message.clone());
                        Diagnostic::at_line(filename, line.number, rule.severity, message)
                    }
                    Err(panic) => {
                        tracing::error!("rule {} panicked on {}:{}", rule.kind, filename, line.number);
                        Diagnostic::at_line(
                            filename,
                            line.number,
                            Severity::Error,
                            format!("internal error in rule {}: {}", rule.kind, panic),
                        )
                    }
                };
                diagnostics.push(
                    diagnostic
                        .with_rule(rule.kind.name())
                        .with_source(line.text.clone()),
                );
            }
        }

        diagnostics
    }
}

thread_local! {
    /// Set while a rule runs on this thread.
    static IN_RULE: Cell<bool> = const { Cell::new(false) };
}

static QUIET_RULE_PANICS: Once = Once::new();

/// Keep the panic hook silent for panics raised inside rules; they are
/// reported as diagnostics instead. Other panics reach the previous hook.
fn install_panic_filter() {
    QUIET_RULE_PANICS.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !IN_RULE.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Run one rule on one line, isolating panics.
fn evaluate(
    rule: &Rule,
    ctx: &LineContext<'_>,
    tracker: Option<&mut Box<dyn LineTracker>>,
) -> std::result::Result<Option<String>, String> {
    install_panic_filter();
    IN_RULE.with(|flag| flag.set(true));
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        if !rule.applies_to(ctx) {
            return None;
        }
        rule.detect(ctx, tracker).then(|| rule.message(ctx))
    }));
    IN_RULE.with(|flag| flag.set(false));
    outcome.map_err(|payload| {
        payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "rule panicked".to_string())
    })
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
