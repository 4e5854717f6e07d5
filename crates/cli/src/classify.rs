// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line classification for C-family sources.
//!
//! Separates each line into its code and comment portions. Block comments
//! that span lines are tracked through an explicit [`CommentState`] that the
//! caller threads from one line to the next; nothing is kept globally.
//!
//! String and character literals are tracked within a line, so `"/*"` or
//! `"http://"` are code. Literals continued onto the next line with a
//! trailing backslash are not followed across the line break.

use std::sync::LazyLock;

use regex::Regex;

/// Running classifier state carried between lines of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentState {
    /// Inside a `/* ... */` comment that has not been closed yet.
    pub in_block: bool,
}

/// What a line mostly consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Only comment text (and whitespace).
    Comment,
    /// Only code.
    Code,
    /// Code with a comment on the same line.
    Mixed,
}

/// Result of classifying one line. The original line is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    /// The line with every comment span removed.
    pub code: String,
    /// Comment text only, without the delimiters.
    pub comment: String,
    /// A `//` comment was found outside any literal.
    pub line_comment: bool,
    /// The line ends with a backslash continuation.
    pub continuation: bool,
}

impl ClassifiedLine {
    pub fn has_comment(&self) -> bool {
        matches!(self.kind, LineKind::Comment | LineKind::Mixed)
    }

    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }
}

/// Classify `line` given the state left by the previous line.
///
/// Returns the classification and the state to pass to the next line.
pub fn classify(line: &str, state: CommentState) -> (ClassifiedLine, CommentState) {
    // A leading `* ` outside a known block only labels this line; the
    // guess is never carried to the next one.
    let guessed = !state.in_block && is_continuation(line);
    let mut in_block = state.in_block || guessed;
    let mut saw_comment = in_block;
    let mut opened = false;
    let mut line_comment = false;
    let mut code = String::with_capacity(line.len());
    let mut comment = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if in_block {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block = false;
            } else {
                comment.push(c);
            }
            continue;
        }

        if let Some(q) = quote {
            code.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                code.push(c);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                in_block = true;
                opened = true;
                saw_comment = true;
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                saw_comment = true;
                line_comment = true;
                comment.extend(chars.by_ref());
            }
            _ => code.push(c),
        }
    }

    let has_code = !code.trim().is_empty();
    let kind = match (has_code, saw_comment) {
        (false, false) => LineKind::Blank,
        (false, true) => LineKind::Comment,
        (true, false) => LineKind::Code,
        (true, true) => LineKind::Mixed,
    };

    let classified = ClassifiedLine {
        kind,
        code,
        comment,
        line_comment,
        continuation: line.trim_end().ends_with('\\'),
    };
    (
        classified,
        CommentState {
            in_block: in_block && (!guessed || opened),
        },
    )
}

/// A line that opens with `* ` or `*/` is assumed to continue a block
/// comment whose opening line is not visible (typical for patch hunks).
fn is_continuation(line: &str) -> bool {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.is_empty() || rest.starts_with([' ', '\t', '/']),
        None => false,
    }
}

#[allow(clippy::expect_used)]
static COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(/\*|\*\s)").expect("valid regex"));

/// True if the line starts or continues a block comment.
///
/// Works on a single line without state, for use as a rule prerequisite.
pub fn is_comment_line(line: &str) -> bool {
    COMMENT_LINE.is_match(line)
}

/// Comment text of a standalone line, or the whole line when it carries no
/// comment markers (assumed to sit inside a comment).
pub fn comment_text(line: &str) -> String {
    let (classified, _) = classify(line, CommentState::default());
    if classified.has_comment() {
        classified.comment
    } else {
        line.to_string()
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
