//! Rule-based part-of-speech tagging with Penn Treebank tags, and the
//! four-bucket tally built from it.
//!
//! Tagging order for a single word:
//! 1. numbers are `CD`;
//! 2. lexicon lookup (most frequent tag);
//! 3. inflections of a known base word, found through the English stemmer;
//! 4. suffix rules;
//! 5. `NN`.
//!
//! A noun tag right after a modal or `to` becomes `VB` when the word is a known verb.
//!
//! The document pipeline tags stop-word-filtered alphabetic tokens, so modals, `to`
//! and numbers never reach the tagger from there. The `CD` and context rules only
//! apply to direct callers of [`PosTagger::tag`] and [`PosTagger::tag_word`].

use std::collections::HashMap;
use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;

use crate::error::{AnalysisError, Result};

const LEXICON: &str = include_str!("../resources/pos_lexicon.txt");

const PENN_TAGS: &[&str] = &[
    "CC", "CD", "DT", "EX", "FW", "IN", "JJ", "JJR", "JJS", "LS", "MD", "NN", "NNS", "NNP",
    "NNPS", "PDT", "POS", "PRP", "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO", "UH", "VB",
    "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP", "WP$", "WRB",
];

// Checked in order, so longer and more specific endings come first.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ness", "NN"),
    ("ment", "NN"),
    ("tion", "NN"),
    ("sion", "NN"),
    ("ship", "NN"),
    ("hood", "NN"),
    ("ance", "NN"),
    ("ence", "NN"),
    ("ism", "NN"),
    ("ist", "NN"),
    ("ity", "NN"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("able", "JJ"),
    ("ible", "JJ"),
    ("less", "JJ"),
    ("ical", "JJ"),
    ("ive", "JJ"),
    ("ish", "JJ"),
    ("ic", "JJ"),
    ("al", "JJ"),
    ("ly", "RB"),
    ("ing", "VBG"),
    ("ed", "VBD"),
    ("ize", "VB"),
    ("ise", "VB"),
    ("ify", "VB"),
    ("est", "JJS"),
];

/// Tagger backed by the embedded lexicon and the English Snowball stemmer.
pub struct PosTagger {
    lexicon: HashMap<String, Vec<&'static str>>,
    stemmer: Stemmer,
}

impl fmt::Debug for PosTagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PosTagger")
            .field("lexicon_entries", &self.lexicon.len())
            .finish()
    }
}

impl PosTagger {
    /// Parse the embedded lexicon. Fails when the lexicon is empty or malformed.
    pub fn english() -> Result<Self> {
        Self::from_lexicon(LEXICON)
    }

    /// Build a tagger from `word TAG [TAG ...]` lines.
    pub fn from_lexicon(content: &str) -> Result<Self> {
        let mut lexicon = HashMap::new();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else { continue };
            let tags = fields
                .map(|tag| {
                    canonical_tag(tag).ok_or_else(|| {
                        AnalysisError::Resources(format!(
                            "POS lexicon line {}: unknown tag {tag:?}",
                            number + 1
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            if tags.is_empty() {
                return Err(AnalysisError::Resources(format!(
                    "POS lexicon line {}: no tag for {word:?}",
                    number + 1
                )));
            }
            lexicon.insert(word.to_lowercase(), tags);
        }
        if lexicon.is_empty() {
            return Err(AnalysisError::Resources("POS lexicon is empty".to_string()));
        }
        Ok(Self {
            lexicon,
            stemmer: Stemmer::create(Algorithm::English),
        })
    }

    /// Tag every token, keeping order.
    pub fn tag(&self, tokens: &[String]) -> Vec<(String, &'static str)> {
        let mut tagged: Vec<(String, &'static str)> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let mut tag = self.tag_word(token);
            if let Some((prev_word, prev_tag)) = tagged.last() {
                let after_infinitive = *prev_tag == "MD" || prev_word == "to";
                if after_infinitive && tag.starts_with("NN") && self.is_verb_base(token) {
                    tag = "VB";
                }
            }
            tagged.push((token.clone(), tag));
        }
        tagged
    }

    /// Tag a single lower-case word without context.
    pub fn tag_word(&self, word: &str) -> &'static str {
        if is_number(word) {
            return "CD";
        }
        if let Some(tags) = self.lexicon.get(word) {
            return tags[0];
        }
        if let Some(tag) = self.inflected_tag(word) {
            return tag;
        }
        if let Some(tag) = suffix_tag(word) {
            return tag;
        }
        "NN"
    }

    fn has_tag(&self, word: &str, tag: &str) -> bool {
        self.lexicon
            .get(word)
            .is_some_and(|tags| tags.contains(&tag))
    }

    fn is_verb_base(&self, word: &str) -> bool {
        self.has_tag(word, "VB")
    }

    // Tag for an inflected form of a word the lexicon knows as a base.
    fn inflected_tag(&self, word: &str) -> Option<&'static str> {
        let stem = self.stemmer.stem(word).into_owned();
        if stem != word {
            for base in [stem.clone(), format!("{stem}e")] {
                if self.has_tag(&base, "VB") {
                    if word.ends_with("ing") {
                        return Some("VBG");
                    }
                    if word.ends_with("ed") {
                        return Some("VBD");
                    }
                    if word.ends_with('s') {
                        return Some("VBZ");
                    }
                }
                if self.has_tag(&base, "NN") && word.ends_with('s') {
                    return Some("NNS");
                }
            }
        }

        for (suffix, tag) in [("est", "JJS"), ("er", "JJR")] {
            let Some(base) = word.strip_suffix(suffix) else {
                continue;
            };
            if adjective_bases(base).any(|candidate| self.has_tag(&candidate, "JJ")) {
                return Some(tag);
            }
        }
        None
    }
}

// "dark" for "darker", "nice" for "nicer", "big" for "bigger", "happy" for "happier".
fn adjective_bases(base: &str) -> impl Iterator<Item = String> {
    let mut candidates = vec![base.to_string(), format!("{base}e")];
    let chars: Vec<char> = base.chars().collect();
    if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
        candidates.push(chars[..chars.len() - 1].iter().collect());
    }
    if let Some(stripped) = base.strip_suffix('i') {
        candidates.push(format!("{stripped}y"));
    }
    candidates.into_iter()
}

fn suffix_tag(word: &str) -> Option<&'static str> {
    let len = word.chars().count();
    for (suffix, tag) in SUFFIX_RULES {
        if len > suffix.len() + 2 && word.ends_with(suffix) {
            return Some(*tag);
        }
    }
    let plural = word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is");
    (plural && len > 3).then_some("NNS")
}

fn is_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

fn canonical_tag(tag: &str) -> Option<&'static str> {
    PENN_TAGS.iter().copied().find(|known| *known == tag)
}

/// The four tracked grammatical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PosCategory {
    Nouns,
    Adjectives,
    Verbs,
    Adverbs,
}

impl PosCategory {
    /// Display order.
    pub const ALL: [PosCategory; 4] = [
        PosCategory::Nouns,
        PosCategory::Adjectives,
        PosCategory::Verbs,
        PosCategory::Adverbs,
    ];

    /// Bucket a Penn tag by prefix. Tags outside the four prefixes belong nowhere.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.starts_with("NN") {
            Some(Self::Nouns)
        } else if tag.starts_with("JJ") {
            Some(Self::Adjectives)
        } else if tag.starts_with("VB") {
            Some(Self::Verbs)
        } else if tag.starts_with("RB") {
            Some(Self::Adverbs)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Nouns => "Nouns",
            Self::Adjectives => "Adjectives",
            Self::Verbs => "Verbs",
            Self::Adverbs => "Adverbs",
        }
    }
}

impl fmt::Display for PosCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts per category. Starts at zero and only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PosTally {
    pub nouns: usize,
    pub adjectives: usize,
    pub verbs: usize,
    pub adverbs: usize,
}

impl PosTally {
    pub fn from_tagged(tagged: &[(String, &str)]) -> Self {
        let mut tally = Self::default();
        for (_, tag) in tagged {
            tally.record(tag);
        }
        tally
    }

    /// Count one tag; returns the bucket it landed in, if any.
    pub fn record(&mut self, tag: &str) -> Option<PosCategory> {
        let category = PosCategory::from_tag(tag)?;
        match category {
            PosCategory::Nouns => self.nouns += 1,
            PosCategory::Adjectives => self.adjectives += 1,
            PosCategory::Verbs => self.verbs += 1,
            PosCategory::Adverbs => self.adverbs += 1,
        }
        Some(category)
    }

    pub fn count(&self, category: PosCategory) -> usize {
        match category {
            PosCategory::Nouns => self.nouns,
            PosCategory::Adjectives => self.adjectives,
            PosCategory::Verbs => self.verbs,
            PosCategory::Adverbs => self.adverbs,
        }
    }

    pub fn total(&self) -> usize {
        self.nouns + self.adjectives + self.verbs + self.adverbs
    }

    /// `(category, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PosCategory, usize)> + '_ {
        PosCategory::ALL.into_iter().map(|c| (c, self.count(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn tagger() -> PosTagger {
        PosTagger::english().unwrap()
    }

    #[test]
    fn example_tokens() {
        let tagged = tagger().tag(&tokens(&["cat", "sat", "mat", "cat", "happy"]));
        let tags: Vec<&str> = tagged.iter().map(|(_, t)| *t).collect();
        assert_eq!(tags, vec!["NN", "VBD", "NN", "NN", "JJ"]);

        let tally = PosTally::from_tagged(&tagged);
        assert_eq!(tally.nouns, 3);
        assert_eq!(tally.verbs, 1);
        assert_eq!(tally.adjectives, 1);
        assert_eq!(tally.adverbs, 0);
    }

    #[test]
    fn inflections_of_known_bases() {
        let t = tagger();
        assert_eq!(t.tag_word("running"), "VBG");
        assert_eq!(t.tag_word("walked"), "VBD");
        assert_eq!(t.tag_word("hoped"), "VBD");
        assert_eq!(t.tag_word("cars"), "NNS");
        assert_eq!(t.tag_word("darker"), "JJR");
        assert_eq!(t.tag_word("nicest"), "JJS");
        assert_eq!(t.tag_word("happier"), "JJR");
    }

    #[test]
    fn suffix_rules_and_default() {
        let t = tagger();
        assert_eq!(t.tag_word("quickly"), "RB");
        assert_eq!(t.tag_word("zorbification"), "NN");
        assert_eq!(t.tag_word("glumptious"), "JJ");
        assert_eq!(t.tag_word("frobnicating"), "VBG");
        assert_eq!(t.tag_word("blorps"), "NNS");
        assert_eq!(t.tag_word("blorp"), "NN");
        assert_eq!(t.tag_word("42"), "CD");
    }

    #[test]
    fn modal_turns_noun_into_verb() {
        let tagged = tagger().tag(&tokens(&["they", "can", "work"]));
        assert_eq!(tagged[2].1, "VB");
        let tagged = tagger().tag(&tokens(&["hard", "work"]));
        assert_eq!(tagged[1].1, "NN");
    }

    #[test]
    fn context_rules_need_unfiltered_tokens() {
        let t = tagger();
        let tagged = t.tag(&tokens(&["want", "to", "work"]));
        assert_eq!(tagged[2].1, "VB");

        let stopwords = crate::stopwords::StopwordFilter::english().unwrap();
        let filtered = crate::normalize::normalize("I want to work.", &stopwords);
        assert_eq!(filtered, vec!["want", "work"]);
        assert_eq!(t.tag(&filtered)[1].1, "NN");
    }

    #[test]
    fn untracked_tags_count_nowhere() {
        let mut tally = PosTally::default();
        assert_eq!(tally.record("DT"), None);
        assert_eq!(tally.record("IN"), None);
        assert_eq!(tally.record("NNS"), Some(PosCategory::Nouns));
        assert_eq!(tally.record("RBR"), Some(PosCategory::Adverbs));
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn bucket_sum_never_exceeds_token_count() {
        let words = tokens(&["the", "very", "old", "man", "of", "the", "sea", "swam", "there"]);
        let tagged = tagger().tag(&words);
        let tally = PosTally::from_tagged(&tagged);
        assert!(tally.total() <= words.len());
        assert!(tally.total() < words.len());
    }

    #[test]
    fn malformed_lexicon_is_rejected() {
        assert!(matches!(
            PosTagger::from_lexicon("cat XX\n"),
            Err(AnalysisError::Resources(_))
        ));
        assert!(matches!(
            PosTagger::from_lexicon("# only comments\n"),
            Err(AnalysisError::Resources(_))
        ));
    }

    #[test]
    fn iter_follows_display_order() {
        let tally = PosTally {
            nouns: 4,
            adjectives: 3,
            verbs: 2,
            adverbs: 1,
        };
        let labels: Vec<String> = tally.iter().map(|(c, _)| c.to_string()).collect();
        assert_eq!(labels, vec!["Nouns", "Adjectives", "Verbs", "Adverbs"]);
    }
}
