//! Tokenization and stable "most common" counting shared by the text analyzers.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::types::WordCount;

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z']+").expect("word pattern is valid"))
}

/// Split `text` into lowercase words: runs of ASCII letters and apostrophes.
///
/// The text is lowercased before matching, so non-ASCII letters act as separators.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Counts words while remembering the order in which each was first seen.
///
/// The position of a word in the underlying [`IndexMap`] is its first-occurrence index, which
/// [`WordCounter::most_common`] uses to break ties.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    counts: IndexMap<String, usize>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    /// Number of distinct words seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The `n` most common words, by count descending then first occurrence.
    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        let mut ranked: Vec<(&String, &usize)> = self.counts.iter().collect();
        // Stable sort keeps insertion (first-occurrence) order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(word, count)| WordCount::new(word.clone(), *count))
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for WordCounter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = Self::new();
        for word in iter {
            counter.add(word);
        }
        counter
    }
}

/// Count the tokens of at least `min_len` characters and return the top `n`.
pub(crate) fn top_words(tokens: &[String], min_len: usize, n: usize) -> Vec<WordCount> {
    tokens
        .iter()
        .map(String::as_str)
        .filter(|w| w.chars().count() >= min_len)
        .collect::<WordCounter>()
        .most_common(n)
}
