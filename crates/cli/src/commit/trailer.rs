// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trailer tag recognition.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        #[allow(clippy::expect_used)]
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect("valid regex"));
    };
}

static_regex!(CHANGE_ID, r"(?i)^\s*change-id:");
static_regex!(FIXES_TAG, r"(?i)^\s*fixes:");
static_regex!(FIXES_WELL_FORMED, r#"^Fixes: [0-9a-f]{12} \(".*"\)$"#);
static_regex!(NAME_TAG, r"(?i)^\s*([a-z-]+-by): (.*@.*)$");

pub const CHANGE_ID_MESSAGE: &str = "Remove Gerrit Change-Id's before submitting upstream.";

pub const FIXES_MESSAGE: &str = "\"Fixes\" tag is malformed.";

pub const FIXES_FORMAT: &str = "Use the following format:\n  \
     git log -1 --pretty=format:\"Fixes: %h (\\\"%s\\\")\" --abbrev=12 COMMIT_REF";

/// Near-miss spellings of trailer tags and the tag they were meant to be.
const TAG_TYPOS: &[(&str, &str)] = &[
    ("acked by:", "Acked-by"),
    ("reported at:", "Reported-at"),
    ("reported by:", "Reported-by"),
    ("requested by:", "Requested-by"),
    ("reviewed by:", "Reviewed-by"),
    ("submitted at:", "Submitted-at"),
    ("suggested by:", "Suggested-by"),
];

/// A Gerrit `Change-Id:` line.
pub fn is_change_id(line: &str) -> bool {
    CHANGE_ID.is_match(line)
}

/// Any line tagged `Fixes:`, well formed or not.
pub fn is_fixes(line: &str) -> bool {
    FIXES_TAG.is_match(line)
}

/// `Fixes: <12 hex digits> ("<subject>")`, exactly.
pub fn is_well_formed_fixes(line: &str) -> bool {
    FIXES_WELL_FORMED.is_match(line)
}

/// A `*-by:` tag carrying an email address.
pub fn is_name_tag(line: &str) -> bool {
    NAME_TAG.is_match(line)
}

/// The intended tag, if the line starts with a known misspelling of one.
pub fn mistyped_tag(line: &str) -> Option<&'static str> {
    let lower = line.to_lowercase();
    TAG_TYPOS
        .iter()
        .find(|(typo, _)| lower.starts_with(typo))
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
#[path = "trailer_tests.rs"]
mod tests;
