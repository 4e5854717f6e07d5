// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles checkpatch.toml parsing with version validation and unknown key
//! warnings. Every setting is optional; command-line flags are combined with
//! the file afterwards.

mod parse;
mod suggest;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::checker::DEFAULT_SKIP_PATHS;
use crate::commit::DEFAULT_SUBJECT_LENGTH;
use crate::error::{Error, Result};
use crate::rules::MisuseApi;
use crate::rules::builtin::DEFAULT_LINE_LENGTH;
use parse::{deserialize_section, warn_unknown_fields};
use suggest::warn_unknown_section;

/// Config file name looked for during discovery.
pub const CONFIG_FILE: &str = "checkpatch.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    check: Option<toml::Value>,

    #[serde(default)]
    spelling: Option<toml::Value>,

    #[serde(default)]
    misuse: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub spelling: SpellingConfig,

    /// Extra easy-to-misuse APIs, added to the built-in list.
    #[serde(default)]
    pub misuse: Vec<MisuseApi>,
}

/// `[check]`: which rules run and their limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckConfig {
    #[serde(default)]
    pub skip_trailing_whitespace: bool,

    #[serde(default)]
    pub skip_leading_whitespace: bool,

    #[serde(default)]
    pub skip_block_whitespace: bool,

    #[serde(default)]
    pub skip_signoff: bool,

    #[serde(default)]
    pub skip_gerrit_change_id: bool,

    /// Maximum line length (default: 79).
    #[serde(default = "CheckConfig::default_line_length")]
    pub line_length: usize,

    /// Maximum `area: summary` subject length (default: 70).
    #[serde(default = "CheckConfig::default_subject_length")]
    pub subject_length: usize,

    /// Globs of paths where only line length is checked.
    #[serde(default = "CheckConfig::default_skip_paths")]
    pub skip_paths: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            skip_trailing_whitespace: false,
            skip_leading_whitespace: false,
            skip_block_whitespace: false,
            skip_signoff: false,
            skip_gerrit_change_id: false,
            line_length: Self::default_line_length(),
            subject_length: Self::default_subject_length(),
            skip_paths: Self::default_skip_paths(),
        }
    }
}

impl CheckConfig {
    pub(crate) fn default_line_length() -> usize {
        DEFAULT_LINE_LENGTH
    }

    pub(crate) fn default_subject_length() -> usize {
        DEFAULT_SUBJECT_LENGTH
    }

    pub(crate) fn default_skip_paths() -> Vec<String> {
        DEFAULT_SKIP_PATHS.iter().map(|s| s.to_string()).collect()
    }
}

/// `[spelling]`: dictionary-based spell checking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpellingConfig {
    /// Check comments and commit messages.
    #[serde(default)]
    pub enabled: bool,

    /// Check comments only (implies enabled).
    #[serde(default)]
    pub comments_only: bool,

    /// Word list file (default: /usr/share/dict/words).
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    /// Extra accepted words.
    #[serde(default)]
    pub words: Vec<String>,
}

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "check", "spelling", "misuse"];

const KNOWN_CHECK_KEYS: &[&str] = &[
    "skip_trailing_whitespace",
    "skip_leading_whitespace",
    "skip_block_whitespace",
    "skip_signoff",
    "skip_gerrit_change_id",
    "line_length",
    "subject_length",
    "skip_paths",
];

const KNOWN_SPELLING_KEYS: &[&str] = &["enabled", "comments_only", "dictionary", "words"];

const KNOWN_MISUSE_KEYS: &[&str] = &["function", "location", "warning"];

fn config_error(message: impl Into<String>, path: &Path) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    parse(&read(path)?, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    parse_with_warnings(&read(path)?, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version", path))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade checkpatch to use this config.",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }

    toml::from_str(content).map_err(|e| config_error(e.to_string(), path))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})",
                flexible.version, SUPPORTED_VERSION
            ),
            path,
        ));
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_section(path, key);
        }
    }

    let check = match flexible.check {
        Some(value) => {
            warn_unknown_fields(path, "check", &value, KNOWN_CHECK_KEYS);
            deserialize_section(value, "check", path)?
        }
        None => CheckConfig::default(),
    };

    let spelling = match flexible.spelling {
        Some(value) => {
            warn_unknown_fields(path, "spelling", &value, KNOWN_SPELLING_KEYS);
            deserialize_section(value, "spelling", path)?
        }
        None => SpellingConfig::default(),
    };

    let misuse = match flexible.misuse {
        Some(toml::Value::Array(entries)) => entries
            .into_iter()
            .map(|entry| {
                warn_unknown_fields(path, "misuse", &entry, KNOWN_MISUSE_KEYS);
                deserialize_section(entry, "misuse", path)
            })
            .collect::<Result<Vec<MisuseApi>>>()?,
        Some(_) => {
            return Err(config_error(
                "misuse: expected an array of tables ([[misuse]])",
                path,
            ));
        }
        None => Vec::new(),
    };

    Ok(Config {
        version: flexible.version,
        check,
        spelling,
        misuse,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
