// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Patch splitting.
//!
//! A patch is a commit message (possibly preceded by mail headers), a `---`
//! separator, and a unified diff. Parsing yields the message lines and, per
//! file, the added lines numbered as in the new version of the file.

mod hunk;

use std::sync::LazyLock;

use regex::Regex;

pub use hunk::HunkHeader;

use crate::checker::{SourceLine, number_lines};
use crate::error::{Error, Result};

#[allow(clippy::expect_used)]
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^---(\w*| \S+)$").expect("valid regex"));

/// Added lines of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path relative to the repository root.
    pub name: String,
    pub lines: Vec<SourceLine>,
}

/// A parsed patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    /// Lines before the diff, numbered by position in the patch.
    pub message: Vec<SourceLine>,
    pub files: Vec<FileChange>,
    /// Total number of input lines.
    pub total_lines: usize,
}

impl Patch {
    /// Wrap a whole source file, every line numbered from 1.
    pub fn from_source(name: impl Into<String>, content: &str) -> Self {
        let lines = number_lines(content);
        Self {
            message: Vec::new(),
            total_lines: lines.len(),
            files: vec![FileChange {
                name: name.into(),
                lines,
            }],
        }
    }

    /// True if there is any non-blank text before the diff.
    pub fn has_message(&self) -> bool {
        self.message.iter().any(|l| !l.text.trim().is_empty())
    }
}

enum State {
    /// Mail headers and commit message.
    Heading,
    /// Between hunks: `diff --git`, `index`, `---`, `+++` lines.
    FileHeader,
    /// Inside a hunk with the given lines left on each side.
    Hunk {
        old_left: u32,
        new_left: u32,
        /// Wider than line numbers so stepping past the last one is caught.
        number: u64,
    },
}

/// Strip the `b/` prefix and any trailing timestamp from a `+++` path.
///
/// Returns `None` for `/dev/null` (the file was deleted).
fn new_file_path(header: &str) -> Option<String> {
    let path = header.split('\t').next().unwrap_or(header).trim_end();
    if path == "/dev/null" {
        return None;
    }
    Some(path.strip_prefix("b/").unwrap_or(path).to_string())
}

/// Narrow a running new-file line number; a hunk that runs past the last
/// representable line is malformed.
fn line_number(name: &str, index: usize, number: u64) -> Result<u32> {
    u32::try_from(number).map_err(|_| Error::Parse {
        name: name.to_string(),
        message: format!("line {}: hunk runs past line {}", index + 1, u32::MAX),
    })
}

/// Split patch text into commit message and per-file added lines.
///
/// `name` identifies the input in errors.
pub fn parse(name: &str, text: &str) -> Result<Patch> {
    let mut patch = Patch::default();
    let mut state = State::Heading;
    // Index into patch.files of the file receiving hunks; None after a
    // deletion.
    let mut current: Option<usize> = None;
    let mut seen_file_header = false;

    for (index, line) in text.lines().enumerate() {
        patch.total_lines += 1;

        if let State::Hunk {
            old_left,
            new_left,
            number,
        } = &mut state
        {
            let in_hunk = match line.chars().next() {
                _ if *old_left == 0 && *new_left == 0 => false,
                Some('+') => {
                    let at = line_number(name, index, *number)?;
                    if let Some(file) = current.and_then(|i| patch.files.get_mut(i)) {
                        file.lines.push(SourceLine::new(at, &line[1..]));
                    }
                    *number += 1;
                    *new_left = new_left.saturating_sub(1);
                    true
                }
                Some('-') => {
                    *old_left = old_left.saturating_sub(1);
                    true
                }
                Some(' ') | None => {
                    *number += 1;
                    *old_left = old_left.saturating_sub(1);
                    *new_left = new_left.saturating_sub(1);
                    true
                }
                Some('\\') => true,
                Some(_) => false,
            };
            if in_hunk {
                continue;
            }
            state = State::FileHeader;
        }

        match state {
            State::Heading => {
                if SEPARATOR.is_match(line) || line.starts_with("diff --git ") {
                    state = State::FileHeader;
                } else {
                    let number = u32::try_from(index + 1).unwrap_or(u32::MAX);
                    patch.message.push(SourceLine::new(number, line));
                }
            }
            State::FileHeader => {
                if let Some(path) = line.strip_prefix("+++ ") {
                    seen_file_header = true;
                    current = new_file_path(path).map(|name| {
                        match patch.files.iter().position(|f| f.name == name) {
                            Some(i) => i,
                            None => {
                                patch.files.push(FileChange {
                                    name,
                                    lines: Vec::new(),
                                });
                                patch.files.len() - 1
                            }
                        }
                    });
                } else if line.starts_with("@@ ") {
                    let header = HunkHeader::parse(line).ok_or_else(|| Error::Parse {
                        name: name.to_string(),
                        message: format!("line {}: bad hunk header: {}", index + 1, line),
                    })?;
                    if !seen_file_header {
                        return Err(Error::Parse {
                            name: name.to_string(),
                            message: format!("line {}: hunk before any file header", index + 1),
                        });
                    }
                    state = State::Hunk {
                        old_left: header.old_count,
                        new_left: header.new_count,
                        number: u64::from(header.new_start),
                    };
                }
            }
            State::Hunk { .. } => {}
        }
    }

    tracing::debug!(
        "{}: {} message lines, {} files",
        name,
        patch.message.len(),
        patch.files.len()
    );
    Ok(patch)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
