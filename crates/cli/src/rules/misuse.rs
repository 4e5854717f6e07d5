// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Table-driven function-call rules.
//!
//! Two tables expand into one rule per entry: standard library functions
//! that have a project wrapper, and project APIs that are easy to misuse
//! outside the file that defines them.

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Standard functions and the advice to use the project wrapper instead.
pub const STD_FUNCTIONS: &[(&str, &str)] = &[
    ("malloc", "Use xmalloc() in place of malloc()"),
    ("calloc", "Use xcalloc() in place of calloc()"),
    ("realloc", "Use xrealloc() in place of realloc()"),
    ("strdup", "Use xstrdup() in place of strdup()"),
    ("asprintf", "Use xasprintf() in place of asprintf()"),
    ("vasprintf", "Use xvasprintf() in place of vasprintf()"),
    ("strcpy", "Use ovs_strlcpy() in place of strcpy()"),
    ("strlcpy", "Use ovs_strlcpy() in place of strlcpy()"),
    ("strncpy", "Use ovs_strzcpy() in place of strncpy()"),
    ("strerror", "Use ovs_strerror() in place of strerror()"),
    ("sleep", "Use xsleep() in place of sleep()"),
    ("abort", "Use ovs_abort() in place of abort()"),
    ("assert", "Use ovs_assert() in place of assert()"),
    ("error", "Use ovs_error() in place of error()"),
];

/// An API that should only be called with care outside its home file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MisuseApi {
    /// Function name, matched as a call.
    pub function: String,
    /// Defining file, exempt from the warning.
    pub location: String,
    /// Warning shown at each call site.
    pub warning: String,
}

/// The built-in easy-to-misuse API list.
pub fn default_misuse_apis() -> Vec<MisuseApi> {
    vec![MisuseApi {
        function: "ovsrcu_barrier".to_string(),
        location: "lib/ovs-rcu.c".to_string(),
        warning: "Are you sure you need to use ovsrcu_barrier(), \
                  in most cases ovsrcu_synchronize() will be fine?"
            .to_string(),
    }]
}

/// Regex matching a call of `function` with a closed argument list.
pub fn call_pattern(function: &str) -> Result<Regex> {
    let pattern = format!(r"\b{}\([^)]*\)", regex::escape(function));
    Regex::new(&pattern).map_err(|e| Error::Config {
        message: format!("invalid function name `{}`: {}", function, e),
        path: None,
    })
}

#[cfg(test)]
#[path = "misuse_tests.rs"]
mod tests;
