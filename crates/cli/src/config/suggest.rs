// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Section name suggestions for config validation.

use std::path::Path;

/// Known section names for suggestions.
const KNOWN_SECTIONS: &[&str] = &["check", "spelling", "misuse"];

/// Suggest a section name for a typo.
pub fn suggest_section_name(unknown: &str) -> Option<&'static str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    let suggestion = match unknown {
        "checks" | "rules" | "whitespace" => Some("check"),
        "spell" | "spellcheck" | "dictionary" | "words" => Some("spelling"),
        "api" | "apis" | "misuse_api" | "easy_to_misuse" => Some("misuse"),
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Try prefix matching (require at least 2 chars to avoid false positives)
    if unknown.len() >= 2 {
        for &name in KNOWN_SECTIONS {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about unknown top-level key with suggestion.
pub fn warn_unknown_section(path: &Path, key: &str) {
    if let Some(suggested) = suggest_section_name(key) {
        eprintln!(
            "checkpatch: warning: {}: unknown section `{}`. Did you mean `{}`?",
            path.display(),
            key,
            suggested
        );
    } else {
        eprintln!(
            "checkpatch: warning: {}: unknown section `{}` (ignored)\n  Valid sections: {}",
            path.display(),
            key,
            KNOWN_SECTIONS.join(", ")
        );
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
