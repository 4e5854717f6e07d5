// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word-list spell checking for comments and commit messages.
//!
//! The dictionary is process-wide: it is loaded at most once, on first use,
//! and only read afterwards.

mod words;

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::classify::comment_text;
use crate::error::{Error, Result};

/// System word list used when none is configured.
pub const SYSTEM_WORD_LIST: &str = "/usr/share/dict/words";

/// Characters that mark a token as an identifier, path or expression.
const IDENTIFIER_CHARS: &[char] = &['=', '(', '-', '_', '/', '\'', '.'];

/// Maximum number of suggestions offered per word.
const MAX_SUGGESTIONS: usize = 5;

/// A set of accepted words.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from the given words.
    ///
    /// Each word is accepted as written and in lower case.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        dict.add_words(words);
        dict
    }

    /// Load a newline-separated word list, plus the built-in vocabulary.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut dict = Self::from_words(content.lines().map(str::trim).filter(|w| !w.is_empty()));
        dict.add_words(words::EXTRA_WORDS);
        Ok(dict)
    }

    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            self.words.insert(word.to_lowercase());
            self.words.insert(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Known words one edit away from `word`, in alphabetical order.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        let mut found = BTreeSet::new();

        let mut consider = |candidate: String| {
            if candidate != lower && self.words.contains(&candidate) {
                found.insert(candidate);
            }
        };

        for i in 0..chars.len() {
            // deletion
            consider(chars[..i].iter().chain(&chars[i + 1..]).collect());
            // transposition
            if i + 1 < chars.len() {
                let mut swapped = chars.clone();
                swapped.swap(i, i + 1);
                consider(swapped.into_iter().collect());
            }
        }
        for i in 0..=chars.len() {
            for letter in 'a'..='z' {
                // insertion
                let mut inserted = chars.clone();
                inserted.insert(i, letter);
                consider(inserted.into_iter().collect());
                // substitution
                if i < chars.len() && chars[i] != letter {
                    let mut replaced = chars.clone();
                    replaced[i] = letter;
                    consider(replaced.into_iter().collect());
                }
            }
        }

        found.into_iter().take(MAX_SUGGESTIONS).collect()
    }
}

/// Where the process-wide dictionary comes from.
#[derive(Debug, Clone, Default)]
pub struct DictionarySource {
    /// Word list file; falls back to [`SYSTEM_WORD_LIST`].
    pub path: Option<PathBuf>,
    /// Additional accepted words.
    pub words: Vec<String>,
}

static DICTIONARY: OnceLock<Option<Dictionary>> = OnceLock::new();

/// Get the process-wide dictionary, loading it on first call.
///
/// Later calls ignore `source`. Returns `None` when no word list could be
/// loaded, which turns spell checking into a no-op.
pub fn global(source: &DictionarySource) -> Option<&'static Dictionary> {
    DICTIONARY
        .get_or_init(|| {
            let path = source
                .path
                .clone()
                .unwrap_or_else(|| PathBuf::from(SYSTEM_WORD_LIST));
            match Dictionary::load(&path) {
                Ok(mut dict) => {
                    dict.add_words(&source.words);
                    tracing::debug!("loaded {} dictionary words from {}", dict.len(), path.display());
                    Some(dict)
                }
                Err(e) => {
                    tracing::warn!("spell checking disabled: {}", e);
                    None
                }
            }
        })
        .as_ref()
}

/// Flags words not found in a dictionary.
///
/// A checker without a dictionary reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpellChecker<'a> {
    dictionary: Option<&'a Dictionary>,
}

impl<'a> SpellChecker<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary: Some(dictionary),
        }
    }

    pub fn disabled() -> Self {
        Self { dictionary: None }
    }

    pub fn from_option(dictionary: Option<&'a Dictionary>) -> Self {
        Self { dictionary }
    }

    pub fn is_enabled(&self) -> bool {
        self.dictionary.is_some()
    }

    pub fn dictionary(&self) -> Option<&'a Dictionary> {
        self.dictionary
    }

    /// Return the misspelled words of `text`, in order of appearance.
    ///
    /// With `is_comment`, only the comment portion of the line is examined.
    pub fn check_words(&self, text: &str, is_comment: bool) -> Vec<String> {
        let Some(dict) = self.dictionary else {
            return Vec::new();
        };

        let text = if is_comment {
            comment_text(text)
        } else {
            text.to_string()
        };

        text.split(|c: char| c.is_whitespace() || c == ':')
            .filter_map(|token| {
                let word = token.trim_matches(|c: char| !c.is_alphanumeric());
                if word.is_empty() || word.chars().any(|c| c.is_ascii_digit()) {
                    return None;
                }
                if word.contains(IDENTIFIER_CHARS) || token.contains(['=', '(', '_', '/']) {
                    return None;
                }
                if dict.contains(word) || dict.contains(&word.to_lowercase()) {
                    return None;
                }
                Some(word.to_string())
            })
            .collect()
    }
}

/// One message for all misspelled words of a line, with suggestions.
pub fn describe_misspellings(words: &[String], dictionary: Option<&Dictionary>) -> String {
    words
        .iter()
        .map(|word| {
            let suggestions = dictionary.map(|d| d.suggest(word)).unwrap_or_default();
            if suggestions.is_empty() {
                format!("Possible misspelled word: \"{}\"", word)
            } else {
                format!(
                    "Possible misspelled word: \"{}\" (did you mean: {})",
                    word,
                    suggestions.join(", ")
                )
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
