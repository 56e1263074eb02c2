//! Sentence splitting, word tokenization and the word-frequency model.
//!
//! Sentences end at any run of `.`, `!` or `?`. Words are the lowercased
//! fragments between runs of non-word characters, where a word character is an
//! ASCII letter, digit or underscore. Single-character tokens never count.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Common English function words excluded from the frequency table.
pub const STOP_WORDS: [&str; 54] = [
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being", "in", "on", "at", "to",
    "for", "with", "by", "about", "as", "of", "that", "this", "these", "those", "it", "its", "they", "them", "their",
    "there", "here", "where", "when", "how", "has", "have", "had", "not", "no", "nor", "if", "else", "then", "so",
    "than", "up", "down", "out", "off", "over", "under",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| STOP_WORDS.into_iter().collect());

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").unwrap());

/// Split text into trimmed, non-empty sentences.
///
/// ```rust
/// use credence_core::tokenize::split_sentences;
///
/// let sentences = split_sentences("First one... Second one?! ");
/// assert_eq!(sentences, vec!["First one", "Second one"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Lowercase a sentence and yield every token longer than one character.
///
/// Stop-words are *not* removed here; see [`content_words`] for that.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    NON_WORD
        .split(&lowered)
        .filter(|token| token.len() > 1)
        .map(str::to_string)
        .collect()
}

/// Tokens of a sentence with stop-words removed.
pub fn content_words(sentence: &str) -> Vec<String> {
    let mut words = tokenize(sentence);
    words.retain(|word| !is_stop_word(word));
    words
}

/// Case-insensitive stop-word membership.
pub fn is_stop_word(word: &str) -> bool {
    if word.bytes().any(|b| b.is_ascii_uppercase()) {
        STOP_WORD_SET.contains(word.to_ascii_lowercase().as_str())
    } else {
        STOP_WORD_SET.contains(word)
    }
}

/// Document-wide occurrence counts of content words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
}

impl WordFrequencies {
    /// Count the content words of every sentence.
    pub fn from_sentences(sentences: &[&str]) -> Self {
        let mut counts = HashMap::new();
        for sentence in sentences {
            for word in content_words(sentence) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrence count of `word`, zero when it never appeared.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent words, ties broken alphabetically.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut words: Vec<(&str, usize)> = self.counts.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(n);
        words
    }
}

/// Build the frequency table for a whole document.
pub fn build_frequencies(text: &str) -> WordFrequencies {
    WordFrequencies::from_sentences(&split_sentences(text))
}
