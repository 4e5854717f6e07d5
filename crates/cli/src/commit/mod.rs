// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit message checks.
//!
//! The message is the part of a patch before the diff: optional mail-style
//! headers, a blank line, then the body with its trailers.

pub mod signoff;
pub mod subject;
pub mod trailer;

use crate::checker::{SourceLine, number_lines};
use crate::diagnostic::{Diagnostic, Severity};
use crate::spell::{SpellChecker, describe_misspellings};

pub use signoff::Authorship;
pub use subject::DEFAULT_SUBJECT_LENGTH;

/// Header names that start a mail-style header block.
const MAIL_HEADERS: &[&str] = &[
    "author",
    "cc",
    "commit",
    "content-transfer-encoding",
    "content-type",
    "date",
    "from",
    "in-reply-to",
    "message-id",
    "mime-version",
    "references",
    "reply-to",
    "subject",
    "to",
];

/// Settings for commit message checks.
#[derive(Debug, Clone, Copy)]
pub struct MessageOptions {
    pub skip_signoff: bool,
    pub skip_gerrit_change_id: bool,
    pub subject_length: usize,
    /// Spell checking of the message; disabled for comment-only mode.
    pub spell: SpellChecker<'static>,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            skip_signoff: false,
            skip_gerrit_change_id: false,
            subject_length: DEFAULT_SUBJECT_LENGTH,
            spell: SpellChecker::disabled(),
        }
    }
}

/// One mail header, with folded continuation lines joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
    pub line: u32,
}

/// A commit message split into headers and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessage {
    pub headers: Vec<Header>,
    pub body: Vec<SourceLine>,
}

fn header_name(line: &str) -> Option<&str> {
    let (name, _) = line.split_once(": ")?;
    let lower = name.to_ascii_lowercase();
    (MAIL_HEADERS.contains(&lower.as_str()) || lower.starts_with("x-")).then_some(name)
}

impl CommitMessage {
    /// Split off a leading header block, if the message has one.
    ///
    /// The block starts with an mbox `From ` line or a known header and ends
    /// at the first blank line.
    pub fn parse(lines: &[SourceLine]) -> Self {
        let mut message = Self::default();
        let start = lines.iter().position(|l| !l.text.trim().is_empty());
        let Some(start) = start else {
            return message;
        };

        let first = &lines[start].text;
        let has_headers = first.starts_with("From ") || header_name(first).is_some();
        if !has_headers {
            message.body = lines.to_vec();
            return message;
        }

        let mut rest = lines[start..].iter();
        for line in rest.by_ref() {
            let text = line.text.as_str();
            if text.trim().is_empty() {
                break;
            }
            if text.starts_with([' ', '\t']) {
                if let Some(last) = message.headers.last_mut() {
                    last.value.push(' ');
                    last.value.push_str(text.trim());
                }
                continue;
            }
            if let Some((name, value)) = text.split_once(": ") {
                message.headers.push(Header {
                    name: name.to_string(),
                    value: value.trim().to_string(),
                    line: line.number,
                });
            }
        }
        message.body = rest.cloned().collect();
        message
    }

    /// Last header named `name`, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&Header> {
        self.headers
            .iter()
            .rev()
            .find(|h| h.name.eq_ignore_ascii_case(name))
    }

    pub fn is_mail(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Subject with patch tags removed.
    pub fn subject(&self) -> Option<&str> {
        self.header("subject")
            .map(|h| subject::strip_patch_prefix(&h.value))
    }

    /// Authorship from headers first, then body lines.
    pub fn authorship(&self) -> Authorship {
        let mut authorship = Authorship::default();
        for header in &self.headers {
            authorship.observe(&format!("{}: {}", header.name, header.value));
        }
        for line in &self.body {
            authorship.observe(&line.text);
        }
        authorship
    }
}

fn at(line: &SourceLine, severity: Severity, message: impl Into<String>) -> Diagnostic {
    Diagnostic::general(severity, message)
        .with_line(line.number)
        .with_source(line.text.clone())
}

/// Per-line checks of message body lines.
pub fn check_lines(lines: &[SourceLine], options: &MessageOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for line in lines {
        let text = line.text.as_str();
        if text.starts_with('\u{c}') {
            continue;
        }

        if trailer::is_change_id(text) {
            if !options.skip_gerrit_change_id {
                diagnostics.push(at(line, Severity::Error, trailer::CHANGE_ID_MESSAGE));
            }
        } else if trailer::is_fixes(text) {
            if !trailer::is_well_formed_fixes(text) {
                diagnostics.push(at(
                    line,
                    Severity::Error,
                    format!("{}\n{}", trailer::FIXES_MESSAGE, trailer::FIXES_FORMAT),
                ));
            }
        } else if options.spell.is_enabled()
            && !signoff::is_authorship_line(text)
            && !trailer::is_name_tag(text)
        {
            let words = options.spell.check_words(text, false);
            if !words.is_empty() {
                diagnostics.push(at(
                    line,
                    Severity::Warning,
                    describe_misspellings(&words, options.spell.dictionary()),
                ));
            }
        }

        if let Some(tag) = trailer::mistyped_tag(text) {
            diagnostics.push(at(line, Severity::Error, format!("{} tag is malformed.", tag)));
        }
    }

    diagnostics
}

/// Check a bare commit message text, line by line.
pub fn check_message(text: &str, options: &MessageOptions) -> Vec<Diagnostic> {
    check_lines(&number_lines(text), options)
}

/// Full commit checks: body lines, subject, and sign-offs.
pub fn check_commit(message: &CommitMessage, options: &MessageOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    match message.subject() {
        Some(subject) => {
            if options.spell.is_enabled() {
                let words = options.spell.check_words(subject, false);
                if !words.is_empty() {
                    diagnostics.push(Diagnostic::warning(describe_misspellings(
                        &words,
                        options.spell.dictionary(),
                    )));
                }
            }
            diagnostics.extend(subject::check_subject(subject, options.subject_length));
        }
        None if message.is_mail() => {
            diagnostics.push(Diagnostic::warning("Email subject missing"));
        }
        None => {}
    }

    diagnostics.extend(check_lines(&message.body, options));

    if !options.skip_signoff {
        diagnostics.extend(message.authorship().validate());
    }

    diagnostics
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
