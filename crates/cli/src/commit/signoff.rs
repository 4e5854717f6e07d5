// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Authorship and `Signed-off-by` validation.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::Diagnostic;

#[allow(clippy::expect_used)]
static AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:Author|From): (.*)$").expect("valid regex"));

#[allow(clippy::expect_used)]
static COMMITTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Commit: (.*)$").expect("valid regex"));

#[allow(clippy::expect_used)]
static SIGNED_OFF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Signed-off-by: (.*)$").expect("valid regex"));

#[allow(clippy::expect_used)]
static CO_AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Co-authored-by: (.*)$").expect("valid regex"));

/// Author, committer, sign-off and co-author lines.
pub fn is_authorship_line(line: &str) -> bool {
    [&AUTHOR, &COMMITTER, &SIGNED_OFF, &CO_AUTHOR]
        .iter()
        .any(|re| re.is_match(line))
}

/// Who wrote, co-wrote, committed and signed off a change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authorship {
    pub author: Option<String>,
    pub committer: Option<String>,
    pub signatures: Vec<String>,
    pub co_authors: Vec<String>,
}

impl Authorship {
    /// Record one message line; returns true if it was an authorship line.
    ///
    /// A later `Author:`/`From:` or `Commit:` line replaces an earlier one.
    pub fn observe(&mut self, line: &str) -> bool {
        let value = |re: &Regex| re.captures(line).map(|c| c[1].trim().to_string());
        if let Some(author) = value(&AUTHOR) {
            self.author = Some(author);
        } else if let Some(committer) = value(&COMMITTER) {
            self.committer = Some(committer);
        } else if let Some(signature) = value(&SIGNED_OFF) {
            self.signatures.push(signature);
        } else if let Some(co_author) = value(&CO_AUTHOR) {
            self.co_authors.push(co_author);
        } else {
            return false;
        }
        true
    }

    fn signed(&self, who: &str) -> bool {
        self.signatures.iter().any(|s| s == who)
    }

    /// Validate authorship and sign-offs.
    ///
    /// Structural problems (no author, mailing-list author, author listed as
    /// co-author, duplicate co-authors) stop validation at the first one.
    pub fn validate(&self) -> Vec<Diagnostic> {
        let Some(author) = self.author.as_deref() else {
            return vec![Diagnostic::error("Patch lacks author.")];
        };
        if author.contains(" via ") || author.contains("@openvswitch.org") {
            return vec![Diagnostic::error("Author should not be mailing list.")];
        }
        if self.co_authors.iter().any(|c| c == author) {
            return vec![Diagnostic::error(
                "Author should not be also be co-author.",
            )];
        }
        let unique: HashSet<&str> = self.co_authors.iter().map(String::as_str).collect();
        if unique.len() != self.co_authors.len() {
            return vec![Diagnostic::error("Duplicate co-author.")];
        }

        let mut diagnostics = Vec::new();
        if !self.signed(author) {
            diagnostics.push(Diagnostic::error(format!(
                "Author {} needs to sign off.",
                author
            )));
        }
        if let Some(co_author) = self.co_authors.iter().find(|c| !self.signed(c)) {
            diagnostics.push(Diagnostic::error(format!(
                "Co-author {} needs to sign off.",
                co_author
            )));
        }
        let committer = self.committer.as_deref();
        if let Some(committer) = committer
            && committer != author
            && !self.signed(committer)
        {
            diagnostics.push(Diagnostic::error(format!(
                "Committer {} needs to sign off.",
                committer
            )));
        }

        // With no known committer, one extra sign-off is probably theirs.
        let extra: Vec<&str> = self
            .signatures
            .iter()
            .map(String::as_str)
            .filter(|s| *s != author && Some(*s) != committer)
            .filter(|s| !self.co_authors.iter().any(|c| c == s))
            .collect();
        if extra.len() > 1 || (committer.is_some() && !extra.is_empty()) {
            diagnostics.push(Diagnostic::warning(format!(
                "Unexpected sign-offs from developers who are not authors or co-authors or committers: {}",
                extra.join(", ")
            )));
        }

        diagnostics
    }
}

#[cfg(test)]
#[path = "signoff_tests.rs"]
mod tests;
