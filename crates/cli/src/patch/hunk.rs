// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unified diff hunk headers.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("valid regex")
});

/// Line ranges of one `@@ -a,b +c,d @@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: u32,
    pub old_count: u32,
    pub new_start: u32,
    pub new_count: u32,
}

impl HunkHeader {
    /// Parse a hunk header; `None` if the line is not one.
    ///
    /// A missing count means one line, as in `@@ -3 +3 @@`.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = HUNK_HEADER.captures(line)?;
        let number = |i: usize, default: u32| -> Option<u32> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(default),
            }
        };
        Some(Self {
            old_start: number(1, 0)?,
            old_count: number(2, 1)?,
            new_start: number(3, 0)?,
            new_count: number(4, 1)?,
        })
    }
}

#[cfg(test)]
#[path = "hunk_tests.rs"]
mod tests;
