// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory walking for whole-file checks.
//!
//! Uses the `ignore` crate so `.gitignore` and hidden directories are
//! respected the same way git would see the tree.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (None = unlimited).
    pub max_depth: Option<usize>,

    /// Respect .gitignore files.
    pub git_ignore: bool,

    /// Skip hidden files and directories.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            git_ignore: true,
            hidden: true,
        }
    }
}

/// Statistics from a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    pub symlink_loops: usize,
    pub errors: usize,
}

fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Walks a directory tree, collecting regular files in sorted order.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Collect every file under `root`, sorted by path.
    pub fn walk_collect(&self, root: &Path) -> (Vec<PathBuf>, WalkStats) {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(false)
            .require_git(false)
            .max_depth(self.config.max_depth)
            .follow_links(true)
            .sort_by_file_path(|a, b| a.cmp(b));

        let mut files = Vec::new();
        let mut stats = WalkStats::default();
        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|t| t.is_file()) {
                        files.push(entry.into_path());
                    }
                }
                Err(err) if is_loop_error(&err) => {
                    tracing::warn!("Symlink loop detected: {}", err);
                    stats.symlink_loops += 1;
                }
                Err(err) => {
                    tracing::warn!("Walk error: {}", err);
                    stats.errors += 1;
                }
            }
        }
        stats.files_found = files.len();
        tracing::debug!("walked {}: {} files", root.display(), stats.files_found);
        (files, stats)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
