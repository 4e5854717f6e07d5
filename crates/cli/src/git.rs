// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git sources of patch text.
//!
//! Uses git2 (libgit2) for all git operations to avoid subprocess overhead.
//! Commits are rendered the way `git format-patch` would show them with an
//! `Author:`/`Commit:`/`Subject:` header block, so they go through the same
//! patch parser as mailed patches.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use git2::{Diff, DiffFormat, Repository, Signature};

use crate::error::{Error, Result};

/// Length of the abbreviated commit id in headings.
const SHORT_ID_LEN: usize = 12;

/// A commit rendered as patch text.
#[derive(Debug, Clone)]
pub struct CommitPatch {
    /// Abbreviated commit id.
    pub id: String,
    /// First line of the commit message.
    pub summary: String,
    pub text: String,
}

/// Root of the repository containing `path`, if any.
pub fn repo_root(path: &Path) -> Option<PathBuf> {
    let repo = Repository::discover(path).ok()?;
    repo.workdir().map(Path::to_path_buf)
}

fn person(signature: &Signature<'_>) -> String {
    format!(
        "{} <{}>",
        signature.name().unwrap_or_default(),
        signature.email().unwrap_or_default()
    )
}

/// Append the diff in unified format.
fn render_diff(diff: &Diff<'_>, text: &mut String) -> Result<()> {
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let origin = line.origin();
        if matches!(origin, '+' | '-' | ' ') {
            text.push(origin);
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })?;
    Ok(())
}

/// Render one commit against its first parent.
fn render_commit(repo: &Repository, commit: &git2::Commit<'_>) -> Result<CommitPatch> {
    let summary = commit.summary().unwrap_or_default().to_string();

    let mut text = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(text, "Author: {}", person(&commit.author()));
    let _ = writeln!(text, "Commit: {}", person(&commit.committer()));
    let _ = writeln!(text, "Subject: {}", summary);
    text.push('\n');
    if let Some(body) = commit.body() {
        text.push_str(body.trim_end());
        text.push('\n');
    }
    text.push_str("---\n");

    let tree = commit.tree()?;
    let parent_tree = match commit.parent(0) {
        Ok(parent) => Some(parent.tree()?),
        Err(_) => None,
    };
    let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;
    render_diff(&diff, &mut text)?;

    let id = commit.id().to_string();
    Ok(CommitPatch {
        id: id[..SHORT_ID_LEN.min(id.len())].to_string(),
        summary,
        text,
    })
}

/// The `count` most recent commits reachable from HEAD, oldest first.
///
/// Fewer are returned if the history is shorter.
pub fn recent_commits(root: &Path, count: usize) -> Result<Vec<CommitPatch>> {
    let repo = Repository::discover(root)?;
    let head = repo
        .head()
        .map_err(|e| Error::Git {
            message: format!("cannot resolve HEAD: {}", e.message()),
        })?
        .peel_to_commit()?;

    let mut revwalk = repo.revwalk()?;
    revwalk.push(head.id())?;
    revwalk.set_sorting(git2::Sort::TOPOLOGICAL)?;

    let mut patches = Vec::with_capacity(count);
    for oid in revwalk.take(count) {
        let commit = repo.find_commit(oid?)?;
        patches.push(render_commit(&repo, &commit)?);
    }
    if patches.len() < count {
        tracing::warn!("only {} commits available, {} requested", patches.len(), count);
    }

    patches.reverse();
    Ok(patches)
}

/// Uncommitted changes (staged and unstaged) against HEAD, as a diff.
///
/// In a repository without commits, everything in the index counts as new.
pub fn working_tree_diff(root: &Path) -> Result<String> {
    let repo = Repository::discover(root)?;
    let head_tree = match repo.head() {
        Ok(head) => Some(head.peel_to_tree()?),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
        Err(e) => return Err(e.into()),
    };

    let diff = repo.diff_tree_to_workdir_with_index(head_tree.as_ref(), None)?;
    let mut text = String::new();
    render_diff(&diff, &mut text)?;
    Ok(text)
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
