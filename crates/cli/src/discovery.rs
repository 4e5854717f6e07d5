// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating checkpatch.toml.
//!
//! An explicit `-C`/`--config` path (or `CHECKPATCH_CONFIG`, which clap folds
//! into the same flag) must exist. Otherwise the working directory and its
//! ancestors are searched, stopping at the first directory holding `.git`.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::error::{Error, Result};

/// Where the configuration for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Named on the command line or in the environment.
    Explicit(PathBuf),
    /// Found next to the working directory or in an ancestor.
    Discovered(PathBuf),
    /// No file; built-in defaults apply.
    Defaults,
}

impl ConfigLocation {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigLocation::Explicit(path) | ConfigLocation::Discovered(path) => Some(path),
            ConfigLocation::Defaults => None,
        }
    }
}

/// Search `start_dir` and its ancestors for checkpatch.toml.
///
/// The repository root (a directory containing `.git`) is searched but its
/// parents are not.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Decide which config file, if any, applies to a run started in `cwd`.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<ConfigLocation> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        return Ok(ConfigLocation::Explicit(path.to_path_buf()));
    }
    Ok(find_config(cwd).map_or(ConfigLocation::Defaults, ConfigLocation::Discovered))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
