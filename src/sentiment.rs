//! Lexicon-based polarity and subjectivity scoring.
//!
//! Each lexicon word found in the text contributes one assessment. An intensifier
//! scales the next assessment, a negation multiplies its polarity by -0.5, and
//! sentence punctuation clears both. The document score is the mean assessment.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::normalize::word_tokens;

const LEXICON: &str = include_str!("../resources/sentiment_lexicon.txt");

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("highly", 1.3),
    ("so", 1.2),
    ("quite", 1.1),
    ("too", 1.2),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "n't", "nothing", "nobody", "none", "neither", "nor"];

const NEGATION_FACTOR: f64 = -0.5;

/// Polarity label by strict sign test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// `> 0` is Positive, `< 0` is Negative, anything else (including NaN) is Neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    /// In [-1, 1].
    pub polarity: f64,
    /// In [0, 1].
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    polarity: f64,
    subjectivity: f64,
}

#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: HashMap<String, Entry>,
}

impl SentimentScorer {
    pub fn english() -> Result<Self> {
        Self::from_lexicon(LEXICON)
    }

    /// Build a scorer from `word polarity subjectivity` lines.
    pub fn from_lexicon(content: &str) -> Result<Self> {
        let mut lexicon = HashMap::new();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let malformed = || {
                AnalysisError::Resources(format!(
                    "sentiment lexicon line {}: expected `word polarity subjectivity`, got {line:?}",
                    number + 1
                ))
            };
            let [word, polarity, subjectivity] = fields[..] else {
                return Err(malformed());
            };
            let polarity: f64 = polarity.parse().map_err(|_| malformed())?;
            let subjectivity: f64 = subjectivity.parse().map_err(|_| malformed())?;
            if !(-1.0..=1.0).contains(&polarity) || !(0.0..=1.0).contains(&subjectivity) {
                return Err(malformed());
            }
            lexicon.insert(
                word.to_lowercase(),
                Entry {
                    polarity,
                    subjectivity,
                },
            );
        }
        if lexicon.is_empty() {
            return Err(AnalysisError::Resources(
                "sentiment lexicon is empty".to_string(),
            ));
        }
        Ok(Self { lexicon })
    }

    /// Score the original, unfiltered document text.
    pub fn score(&self, text: &str) -> Sentiment {
        let mut polarities: Vec<f64> = Vec::new();
        let mut subjectivities: Vec<f64> = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for token in word_tokens(&text.to_lowercase()) {
            let token = token.as_str();
            if NEGATIONS.contains(&token) {
                negated = true;
                continue;
            }
            if let Some((_, factor)) = INTENSIFIERS.iter().find(|(word, _)| *word == token) {
                intensity *= factor;
                continue;
            }
            if let Some(entry) = self.lexicon.get(token) {
                let mut polarity = entry.polarity * intensity;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                polarities.push(polarity.clamp(-1.0, 1.0));
                subjectivities.push((entry.subjectivity * intensity).clamp(0.0, 1.0));
                intensity = 1.0;
                negated = false;
            } else if matches!(token, "." | "!" | "?" | ";" | ",") {
                intensity = 1.0;
                negated = false;
            } else if token.chars().any(char::is_alphanumeric) {
                // An intensifier only reaches the word right after it.
                intensity = 1.0;
            }
        }

        let polarity = mean(&polarities).clamp(-1.0, 1.0);
        let subjectivity = mean(&subjectivities).clamp(0.0, 1.0);
        Sentiment {
            polarity,
            subjectivity,
            label: SentimentLabel::from_score(polarity),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
