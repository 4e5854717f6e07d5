// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolving what to check into a list of input units.
//!
//! A unit is one patch (file, stdin, commit, or working-tree diff) or one
//! whole source file. Failures to obtain a unit's text are kept on the unit
//! and reported when it is checked, so one bad input does not stop the run.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::git;
use crate::walker::{FileWalker, WalkerConfig};

/// Name used for patches read from standard input.
pub const STDIN_NAME: &str = "-";

/// Name used for the uncommitted working-tree diff.
pub const WORKING_TREE_NAME: &str = "working tree";

/// How a unit's text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Mail-formatted patch or plain diff.
    Patch,
    /// Whole source file; every line is checked.
    Source,
}

/// Where a unit's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Path(PathBuf),
    Text(String),
    /// The text could not be obtained.
    Unavailable(String),
}

/// One unit to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub title: Option<String>,
    pub kind: InputKind,
    pub content: Content,
}

impl Input {
    pub fn patch_file(path: &Path) -> Self {
        Self {
            name: display_name(path),
            title: None,
            kind: InputKind::Patch,
            content: Content::Path(path.to_path_buf()),
        }
    }

    pub fn source_file(path: &Path) -> Self {
        Self {
            name: display_name(path),
            title: None,
            kind: InputKind::Source,
            content: Content::Path(path.to_path_buf()),
        }
    }

    pub fn text(name: impl Into<String>, kind: InputKind, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            kind,
            content: Content::Text(text.into()),
        }
    }

    pub fn unavailable(name: impl Into<String>, kind: InputKind, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            kind,
            content: Content::Unavailable(message.into()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The unit's text, read from disk if needed.
    pub fn read(&self) -> Result<String> {
        match &self.content {
            Content::Text(text) => Ok(text.clone()),
            Content::Path(path) => {
                let bytes = std::fs::read(path).map_err(|e| Error::Io {
                    path: path.clone(),
                    source: e,
                })?;
                decode(&self.name, bytes)
            }
            Content::Unavailable(message) => Err(Error::Parse {
                name: self.name.clone(),
                message: message.clone(),
            }),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

fn decode(name: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::Parse {
        name: name.to_string(),
        message: format!("not valid UTF-8 (at byte {})", e.utf8_error().valid_up_to()),
    })
}

/// What the user asked to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The N most recent commits, oldest first.
    Recent(usize),
    /// Whole source files or directories.
    Sources(Vec<PathBuf>),
    /// Patch files; `-` means stdin.
    Patches(Vec<PathBuf>),
    /// A patch piped on stdin.
    Stdin,
    /// The uncommitted working-tree diff.
    WorkingTree,
}

impl Target {
    /// Pick the target from the command line.
    ///
    /// With no paths, a piped stdin wins over the working tree.
    pub fn select(
        recent: Option<usize>,
        check_file: bool,
        paths: &[PathBuf],
        stdin_is_terminal: bool,
    ) -> Result<Self> {
        if let Some(count) = recent {
            if count == 0 {
                return Err(Error::Argument("--recent needs a count of at least 1".into()));
            }
            return Ok(Target::Recent(count));
        }
        if check_file {
            if paths.is_empty() {
                return Err(Error::Argument(
                    "-f/--check-file needs at least one file or directory".into(),
                ));
            }
            return Ok(Target::Sources(paths.to_vec()));
        }
        if !paths.is_empty() {
            return Ok(Target::Patches(paths.to_vec()));
        }
        if stdin_is_terminal {
            Ok(Target::WorkingTree)
        } else {
            Ok(Target::Stdin)
        }
    }
}

/// Turn a target into input units, in the order they will be reported.
pub fn resolve(target: &Target, cwd: &Path, stdin: &mut dyn Read) -> Vec<Input> {
    match target {
        Target::Recent(count) => recent_inputs(cwd, *count),
        Target::Sources(paths) => source_inputs(paths),
        Target::Patches(paths) => {
            let mut stdin_text: Option<Input> = None;
            paths
                .iter()
                .map(|path| {
                    if path.as_os_str() == STDIN_NAME {
                        stdin_text
                            .get_or_insert_with(|| read_stdin(stdin))
                            .clone()
                    } else {
                        Input::patch_file(path)
                    }
                })
                .collect()
        }
        Target::Stdin => vec![read_stdin(stdin)],
        Target::WorkingTree => vec![working_tree_input(cwd)],
    }
}

fn read_stdin(stdin: &mut dyn Read) -> Input {
    let mut bytes = Vec::new();
    let text = stdin
        .read_to_end(&mut bytes)
        .map_err(|e| Error::Io {
            path: PathBuf::from(STDIN_NAME),
            source: e,
        })
        .and_then(|_| decode(STDIN_NAME, bytes));
    match text {
        Ok(text) => Input::text(STDIN_NAME, InputKind::Patch, text),
        Err(e) => Input::unavailable(STDIN_NAME, InputKind::Patch, e.to_string()),
    }
}

fn source_inputs(paths: &[PathBuf]) -> Vec<Input> {
    let walker = FileWalker::new(WalkerConfig::default());
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            let (files, stats) = walker.walk_collect(path);
            inputs.extend(files.iter().map(|f| Input::source_file(f)));
            if stats.errors > 0 || stats.symlink_loops > 0 {
                inputs.push(Input::unavailable(
                    display_name(path),
                    InputKind::Source,
                    format!(
                        "{} entries could not be walked ({} symlink loops)",
                        stats.errors + stats.symlink_loops,
                        stats.symlink_loops
                    ),
                ));
            }
        } else {
            // Missing files surface as read errors on the unit.
            inputs.push(Input::source_file(path));
        }
    }
    inputs
}

fn recent_inputs(cwd: &Path, count: usize) -> Vec<Input> {
    let commits = git::repo_root(cwd)
        .ok_or_else(|| Error::Git {
            message: format!("{} is not inside a git repository", cwd.display()),
        })
        .and_then(|root| git::recent_commits(&root, count));

    match commits {
        Ok(commits) => commits
            .into_iter()
            .map(|c| Input::text(c.id, InputKind::Patch, c.text).with_title(c.summary))
            .collect(),
        Err(e) => vec![Input::unavailable(
            format!("HEAD~{}..HEAD", count),
            InputKind::Patch,
            e.to_string(),
        )],
    }
}

fn working_tree_input(cwd: &Path) -> Input {
    let diff = git::repo_root(cwd)
        .ok_or_else(|| Error::Git {
            message: format!(
                "{} is not inside a git repository; pass a patch file or pipe one on stdin",
                cwd.display()
            ),
        })
        .and_then(|root| git::working_tree_diff(&root));

    match diff {
        Ok(text) => Input::text(WORKING_TREE_NAME, InputKind::Patch, text),
        Err(e) => Input::unavailable(WORKING_TREE_NAME, InputKind::Patch, e.to_string()),
    }
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod tests;
