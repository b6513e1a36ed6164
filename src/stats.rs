use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Word count and vocabulary size of a filtered token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub vocabulary_size: usize,
}

impl TextStats {
    pub fn from_tokens(tokens: &[String]) -> Self {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        Self {
            word_count: tokens.len(),
            vocabulary_size: distinct.len(),
        }
    }
}

///Takes a token slice and counts the quantity of each word. Returns HashMap<String,u32>, with String being the word and u32 the quantity
/// # Example
/// ```
/// use text_profile::count_words;
/// let words = vec!["one".to_string(), "two".to_string(), "two".to_string()];
/// let counted = count_words(&words);
/// assert_eq!(counted["one"], 1);
/// assert_eq!(counted["two"], 2);
/// ```
pub fn count_words(words: &[String]) -> HashMap<String, u32> {
    let mut frequency: HashMap<String, u32> = HashMap::new();
    for word in words {
        *frequency.entry(word.to_owned()).or_insert(0) += 1;
    }
    frequency
}

///Sort words in HashMap<Word, Frequency> according to frequency into Vec<(String, u32)>.
///Words with equal frequency are ordered alphabetically so the result is deterministic.
/// # Example
/// ```
/// use text_profile::sort_map_to_vec;
/// use std::collections::HashMap;
/// let mut words_map = HashMap::new();
/// words_map.insert("one".to_string(), 1 as u32);
/// words_map.insert("two".to_string(), 2 as u32);
/// words_map.insert("three".to_string(), 3 as u32);
/// let vec_sorted = sort_map_to_vec(words_map);
/// let expected = vec![("three".to_string(), 3 as u32), ("two".to_string(), 2 as u32), ("one".to_string(), 1 as u32)];
/// assert_eq!(vec_sorted, expected);
/// ```
pub fn sort_map_to_vec(frequency: HashMap<String, u32>) -> Vec<(String, u32)> {
    let mut vec_sorted: Vec<(String, u32)> = frequency.into_iter().collect();
    vec_sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    vec_sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_count() {
        let words = words(&["one", "two", "two", "three", "three", "three"]);
        let counted = count_words(&words);
        let mut words_map = HashMap::new();
        words_map.insert("one".to_string(), 1_u32);
        words_map.insert("two".to_string(), 2_u32);
        words_map.insert("three".to_string(), 3_u32);
        assert_eq!(counted, words_map);
    }

    #[test]
    fn ties_sort_alphabetically() {
        let counted = count_words(&words(&["pear", "apple", "fig", "apple", "pear"]));
        let sorted = sort_map_to_vec(counted);
        assert_eq!(
            sorted,
            vec![
                ("apple".to_string(), 2),
                ("pear".to_string(), 2),
                ("fig".to_string(), 1)
            ]
        );
    }

    #[test]
    fn stats_of_example_tokens() {
        let stats = TextStats::from_tokens(&words(&["cat", "sat", "mat", "cat", "happy"]));
        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.vocabulary_size, 4);
    }

    #[test]
    fn stats_of_empty_sequence() {
        assert_eq!(TextStats::from_tokens(&[]), TextStats::default());
    }
}
