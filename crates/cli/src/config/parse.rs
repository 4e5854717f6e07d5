// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Section-level parsing helpers.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Warn about an unknown config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "checkpatch: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Warn about keys of a table section that are not in `known`.
pub(super) fn warn_unknown_fields(path: &Path, section: &str, value: &toml::Value, known: &[&str]) {
    let Some(table) = value.as_table() else {
        return;
    };
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{}.{}", section, key));
        }
    }
}

/// Deserialize one section, naming it in the error.
pub(super) fn deserialize_section<T: DeserializeOwned>(
    value: toml::Value,
    section: &str,
    path: &Path,
) -> Result<T> {
    value.try_into().map_err(|e: toml::de::Error| Error::Config {
        message: format!("{}: {}", section, e.message()),
        path: Some(path.to_path_buf()),
    })
}
