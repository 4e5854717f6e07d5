// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule-driven style checker for patches, commit messages and source files.

pub mod checker;
pub mod classify;
pub mod cli;
pub mod color;
pub mod commit;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod git;
pub mod output;
pub mod patch;
pub mod rules;
pub mod runner;
pub mod sources;
pub mod spell;
pub mod walker;

pub use checker::{FileChecker, SourceLine};
pub use cli::{Cli, OutputFormat};
pub use diagnostic::{Diagnostic, Report, Severity};
pub use error::{Error, ExitCode, Result};
pub use rules::{Registry, Rule, RuleKind};
pub use runner::CheckRunner;
pub use sources::{Input, InputKind, Target};

#[cfg(test)]
pub mod test_utils;
