// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subject line conventions: `area: Summary.`

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::Diagnostic;

/// Default limit for the `area: summary` part of the subject.
pub const DEFAULT_SUBJECT_LENGTH: usize = 70;

#[allow(clippy::expect_used)]
static PATCH_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[[^\]]*\]\s*").expect("valid regex"));

/// Remove leading `[PATCH v2 1/3]`-style tags.
pub fn strip_patch_prefix(subject: &str) -> &str {
    let mut rest = subject;
    while let Some(m) = PATCH_PREFIX.find(rest) {
        rest = &rest[m.end()..];
    }
    rest.trim()
}

/// The summary: text after the last `: `, or the whole subject.
pub fn summary(subject: &str) -> &str {
    subject
        .rfind(": ")
        .map_or(subject, |i| &subject[i + 2..])
}

/// Check the subject (without `Subject:` and patch tags).
pub fn check_subject(subject: &str, limit: usize) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let length = subject.chars().count();
    if length > limit {
        diagnostics.push(Diagnostic::warning(format!(
            "The subject, '<area>: <summary>', is over {} characters, i.e., {}.",
            limit, length
        )));
    }

    if summary(subject)
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() && c.is_lowercase())
    {
        diagnostics.push(Diagnostic::warning(
            "The subject summary should start with a capital.",
        ));
    }

    if !subject.ends_with(['.', '?', '!']) {
        diagnostics.push(Diagnostic::warning(
            "The subject summary should end with a dot.",
        ));
    }

    diagnostics
}

#[cfg(test)]
#[path = "subject_tests.rs"]
mod tests;
