//! English stop-word filtering.
//!
//! The base list is the NLTK English list, embedded at compile time. A user file
//! (one word per line) can extend it, the same way the `--stopwords` option does.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{AnalysisError, Result};

const ENGLISH: &str = include_str!("../resources/stopwords_en.txt");

/// Set of case-folded stop words.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    /// The embedded English list.
    pub fn english() -> Result<Self> {
        let words: HashSet<String> = parse_list(ENGLISH).collect();
        if words.is_empty() {
            return Err(AnalysisError::Resources(
                "embedded English stop-word list is empty".to_string(),
            ));
        }
        Ok(Self { words })
    }

    /// Build a filter from an explicit list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.trim().to_lowercase()).collect(),
        }
    }

    /// Add every word listed in `path`. A missing or unreadable file is a setup error.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path).map_err(|e| {
            AnalysisError::Resources(format!(
                "cannot read stop-word file {}: {e}",
                path.display()
            ))
        })?;
        let before = self.words.len();
        self.words.extend(parse_list(&content));
        Ok(self.words.len() - before)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// Blank lines and `#` comments are skipped.
fn parse_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
}
