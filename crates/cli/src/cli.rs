// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface definitions.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Style checker for patches, commit messages and source files
#[derive(Parser, Debug)]
#[command(name = "checkpatch")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
Examples:
  checkpatch 0001-fix.patch      Check a patch file
  git show | checkpatch -        Check a patch from stdin
  checkpatch -3                  Check the 3 most recent commits
  checkpatch -f lib/             Check whole source files
  checkpatch                     Check the uncommitted working-tree diff")]
pub struct Cli {
    /// Patch files to check (`-` reads stdin), or source files with -f
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Check whole files or directories instead of patches
    #[arg(short = 'f', long = "check-file")]
    pub check_file: bool,

    /// Check the N most recent commits (also accepted as -N)
    #[arg(long, value_name = "N", conflicts_with_all = ["paths", "check_file"])]
    pub recent: Option<usize>,

    /// Skip the whitespace-around-block-braces check
    #[arg(short = 'b', long)]
    pub skip_block_whitespace: bool,

    /// Skip the leading-whitespace check
    #[arg(short = 'l', long)]
    pub skip_leading_whitespace: bool,

    /// Skip the Signed-off-by validation
    #[arg(short = 's', long = "skip-signoff-lines")]
    pub skip_signoff: bool,

    /// Spell check comments and commit messages
    #[arg(short = 'S', long)]
    pub spellcheck: bool,

    /// Spell check comments only
    #[arg(long)]
    pub spellcheck_comments: bool,

    /// Skip the trailing-whitespace check
    #[arg(short = 't', long)]
    pub skip_trailing_whitespace: bool,

    /// Do not flag Gerrit Change-Id lines
    #[arg(long)]
    pub skip_gerrit_change_id: bool,

    /// Only print diagnostics, no headings or summaries
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "CHECKPATCH_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Parse the process arguments, accepting `-N` as `--recent N`.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-<digits>` arguments into `--recent <digits>`.
///
/// Arguments after `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut out = Vec::new();
    let mut literal = false;
    for arg in args.into_iter().map(Into::into) {
        if literal {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            literal = true;
            out.push(arg);
            continue;
        }
        match arg.to_str().and_then(|s| s.strip_prefix('-')) {
            Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                out.push(OsString::from("--recent"));
                out.push(OsString::from(digits));
            }
            _ => out.push(arg),
        }
    }
    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
