// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules that depend on preceding lines.
//!
//! Each tracker is created fresh for every file, so nothing leaks from one
//! file into the next. A jump in line numbers (a new hunk) also resets state.

use std::sync::LazyLock;

use regex::Regex;

use super::LineContext;

/// Per-file state for a rule that needs preceding-line context.
pub trait LineTracker {
    /// Feed the next line; returns true if it is a violation.
    fn observe(&mut self, ctx: &LineContext<'_>) -> bool;
}

/// Tracks line-number continuity so hunks are not treated as adjacent.
#[derive(Debug, Default)]
struct Continuity {
    last: Option<u32>,
}

impl Continuity {
    /// Record `number`; true if it does not directly follow the last line.
    fn is_break(&mut self, number: u32) -> bool {
        let broken = self
            .last
            .is_none_or(|last| last.checked_add(1) != Some(number));
        self.last = Some(number);
        broken
    }
}

#[allow(clippy::expect_used)]
static EMPTY_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*return;").expect("valid regex"));

/// Flags a function-closing `}` that follows a bare `return;`.
#[derive(Debug, Default)]
pub struct EmptyReturnTracker {
    continuity: Continuity,
    after_return: bool,
}

impl EmptyReturnTracker {
    pub fn boxed() -> Box<dyn LineTracker> {
        Box::new(Self::default())
    }
}

impl LineTracker for EmptyReturnTracker {
    fn observe(&mut self, ctx: &LineContext<'_>) -> bool {
        if self.continuity.is_break(ctx.number) {
            self.after_return = false;
        }

        if ctx.classified.is_blank() {
            return false;
        }

        let violation = self.after_return && ctx.line == "}";
        self.after_return = EMPTY_RETURN.is_match(ctx.line);
        violation
    }
}

/// Flags every blank line beyond the first in a run.
#[derive(Debug, Default)]
pub struct BlankRunTracker {
    continuity: Continuity,
    run: usize,
}

impl BlankRunTracker {
    pub fn boxed() -> Box<dyn LineTracker> {
        Box::new(Self::default())
    }
}

impl LineTracker for BlankRunTracker {
    fn observe(&mut self, ctx: &LineContext<'_>) -> bool {
        if self.continuity.is_break(ctx.number) {
            self.run = 0;
        }

        if ctx.classified.is_blank() {
            self.run += 1;
        } else {
            self.run = 0;
        }
        self.run > 1
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
