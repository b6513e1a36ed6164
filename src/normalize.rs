//! Tokenization and token filtering.

use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords::StopwordFilter;

/// Lower-cases `text`, splits it into word tokens and keeps only alphabetic
/// tokens that are not stop words. Document order and duplicates are preserved.
/// # Example
/// ```
/// use text_profile::{normalize, StopwordFilter};
/// let stop = StopwordFilter::english().unwrap();
/// let tokens = normalize("The cat sat on the mat. The cat was happy.", &stop);
/// assert_eq!(tokens, vec!["cat", "sat", "mat", "cat", "happy"]);
/// ```
pub fn normalize(text: &str, stopwords: &StopwordFilter) -> Vec<String> {
    word_tokens(&text.to_lowercase())
        .into_iter()
        .filter(|token| is_alphabetic(token) && !stopwords.is_stopword(token))
        .collect()
}

/// Splits text into word-level tokens. Punctuation marks become tokens of their own,
/// whitespace is dropped, hyphenated compounds stay whole and clitics are split off
/// (`don't` -> `do`, `n't`).
pub fn word_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    // A hyphen glued to the previous word, waiting to see whether a word follows.
    let mut pending_hyphen = false;
    let mut after_space = true;

    for segment in text.split_word_bounds() {
        if segment.chars().all(char::is_whitespace) {
            if pending_hyphen {
                tokens.push("-".to_string());
                pending_hyphen = false;
            }
            after_space = true;
            continue;
        }

        if segment == "-" && !pending_hyphen && !after_space && ends_wordlike(tokens.last()) {
            pending_hyphen = true;
            after_space = false;
            continue;
        }

        if pending_hyphen {
            pending_hyphen = false;
            if starts_wordlike(segment) {
                if let Some(last) = tokens.last_mut() {
                    last.push('-');
                    last.push_str(segment);
                    after_space = false;
                    continue;
                }
            }
            tokens.push("-".to_string());
        }

        tokens.extend(split_clitics(segment));
        after_space = false;
    }

    if pending_hyphen {
        tokens.push("-".to_string());
    }
    tokens
}

/// True when every character is alphabetic and the token is non-empty.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

fn ends_wordlike(token: Option<&String>) -> bool {
    token
        .and_then(|t| t.chars().last())
        .is_some_and(char::is_alphanumeric)
}

fn starts_wordlike(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_alphanumeric)
}

fn split_clitics(segment: &str) -> Vec<String> {
    if !segment.contains(['\'', '\u{2019}']) {
        return vec![segment.to_string()];
    }
    let word = segment.replace('\u{2019}', "'");

    if let Some(stem) = word.strip_suffix("n't") {
        if !stem.is_empty() && !stem.contains('\'') {
            return vec![stem.to_string(), "n't".to_string()];
        }
    }
    match word.rfind('\'') {
        Some(pos) if pos > 0 && pos + 1 < word.len() => {
            vec![word[..pos].to_string(), word[pos..].to_string()]
        }
        _ => vec![word],
    }
}
