//! Keyword configuration for theorem classification.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::DivideError;

/// Words that introduce a theorem-like declaration.
pub const THEOREM_WORDS: &[&str] = &["lemma", "theorem", "def"];

/// Words that mark a sentence as something other than a theorem.
pub const NON_THEOREM_WORDS: &[&str] = &["meta", "add_tactic_doc"];

/// Whitelist and blacklist handed to the classifier.
///
/// Whitelist words must be followed by a space to match; blacklist words
/// match anywhere. Both are case-sensitive substrings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordSets {
    #[serde(default = "default_whitelist")]
    pub whitelist: BTreeSet<String>,

    #[serde(default = "default_blacklist")]
    pub blacklist: BTreeSet<String>,
}

fn to_set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_whitelist() -> BTreeSet<String> {
    to_set(THEOREM_WORDS)
}

fn default_blacklist() -> BTreeSet<String> {
    to_set(NON_THEOREM_WORDS)
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            whitelist: default_whitelist(),
            blacklist: default_blacklist(),
        }
    }
}

impl KeywordSets {
    /// Load keyword sets from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, DivideError> {
        let text = fs::read_to_string(path).map_err(|source| DivideError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DivideError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_whitelist(mut self, words: BTreeSet<String>) -> Self {
        self.whitelist = words;
        self
    }

    pub fn with_blacklist(mut self, words: BTreeSet<String>) -> Self {
        self.blacklist = words;
        self
    }
}

/// Split a shell-style word list such as `lemma theorem 'private def'`.
pub fn parse_word_list(text: &str) -> Result<BTreeSet<String>, DivideError> {
    shlex::split(text)
        .map(|words| words.into_iter().filter(|w| !w.is_empty()).collect())
        .ok_or_else(|| DivideError::WordList(text.to_string()))
}
