//! Extractive summarization.
//!
//! Two strategies are available:
//!
//! - [`SummaryStrategy::Frequency`] (default) scores each sentence by the
//!   average document frequency of its words and keeps the densest ones.
//! - [`SummaryStrategy::Lead`] prefers the opening sentences of the article,
//!   longer sentences first.
//!
//! Both return the selected sentences in their original order, joined with
//! `". "` and terminated with a period. Text without any sentence yields
//! [`FALLBACK_SUMMARY`].
//!
//! # Example
//!
//! ```rust
//! use credence_core::summarize;
//!
//! let summary = summarize("Rust is fast. Rust is safe. Cats sleep. Rust is fun.");
//! assert!(summary.ends_with('.'));
//! assert_eq!(summarize("   "), credence_core::FALLBACK_SUMMARY);
//! ```

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analyzer::AnalysisConfig;
use crate::tokenize::{WordFrequencies, split_sentences, tokenize};

/// Returned when the input contains no sentence to summarize.
pub const FALLBACK_SUMMARY: &str = "Unable to summarize. Please provide more content.";

/// Number of opening sentences the lead strategy prefers.
const LEAD_WINDOW: usize = 3;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Sentence selection strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStrategy {
    /// Rank sentences by average word frequency.
    #[default]
    #[serde(alias = "extractive")]
    Frequency,
    /// Prefer the first sentences of the article. The three opening sentences
    /// always rank ahead of later ones, longest first within each group.
    #[serde(alias = "position")]
    Lead,
}

impl FromStr for SummaryStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frequency" | "extractive" => Ok(Self::Frequency),
            "lead" | "position" => Ok(Self::Lead),
            _ => Err(format!("Invalid strategy: {}. Valid options: frequency, lead", s)),
        }
    }
}

impl fmt::Display for SummaryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "frequency"),
            Self::Lead => write!(f, "lead"),
        }
    }
}

/// A sentence with its position in the document and its frequency score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    /// Trimmed sentence text, without its terminal punctuation.
    pub text: String,
    /// Zero-based index in document order.
    pub position: usize,
    /// Length-normalized frequency score.
    pub score: f64,
}

/// Score a sentence against a frequency table.
///
/// Every token longer than one character counts toward the length, stop-words
/// included; stop-words contribute nothing since the table never holds them.
pub fn sentence_score(sentence: &str, frequencies: &WordFrequencies) -> f64 {
    let tokens = tokenize(sentence);
    let total: usize = tokens.iter().map(|token| frequencies.get(token)).sum();
    total as f64 / tokens.len().max(1) as f64
}

/// Split `text` and score every sentence, in document order.
pub fn score_sentences(text: &str) -> Vec<Sentence> {
    let sentences = split_sentences(text);
    let frequencies = WordFrequencies::from_sentences(&sentences);

    sentences
        .iter()
        .enumerate()
        .map(|(position, text)| Sentence {
            text: text.to_string(),
            position,
            score: sentence_score(text, &frequencies),
        })
        .collect()
}

/// How many sentences a document of `total` sentences contributes.
///
/// `ceil(total * ratio)` bounded by the configured minimum and maximum, and
/// never more than the document has.
pub fn selection_count(total: usize, config: &AnalysisConfig) -> usize {
    let wanted = (total as f64 * config.ratio).ceil() as usize;
    wanted.max(config.min_sentences).min(config.max_sentences).min(total)
}

/// Summarize with the default configuration.
pub fn summarize(text: &str) -> String {
    summarize_with_config(text, &AnalysisConfig::default())
}

/// Summarize with an explicit configuration.
pub fn summarize_with_config(text: &str, config: &AnalysisConfig) -> String {
    match config.strategy {
        SummaryStrategy::Frequency => frequency_summary(text, config),
        SummaryStrategy::Lead => lead_summary(text, config.lead_sentences),
    }
}

fn frequency_summary(text: &str, config: &AnalysisConfig) -> String {
    let sentences = score_sentences(text);
    if sentences.is_empty() {
        return FALLBACK_SUMMARY.to_string();
    }

    let mut ranked: Vec<&Sentence> = sentences.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let count = selection_count(sentences.len(), config);
    if count == 0 {
        return FALLBACK_SUMMARY.to_string();
    }

    // Positions come from the first sentence with the same text, so a repeated
    // sentence always maps to its earliest occurrence.
    let mut positions: Vec<usize> = ranked
        .iter()
        .take(count)
        .map(|selected| {
            sentences
                .iter()
                .position(|s| s.text == selected.text)
                .unwrap_or(selected.position)
        })
        .collect();
    positions.sort_unstable();

    join_sentences(positions.iter().map(|&i| sentences[i].text.as_str()))
}

fn lead_summary(text: &str, count: usize) -> String {
    let normalized = WHITESPACE.replace_all(text.trim(), " ");
    let sentences: Vec<&str> = normalized
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.is_empty() || count == 0 {
        return FALLBACK_SUMMARY.to_string();
    }

    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by_key(|&i| (i >= LEAD_WINDOW, Reverse(sentences[i].split_whitespace().count())));
    ranked.truncate(count.min(sentences.len()));
    ranked.sort_unstable();

    join_sentences(ranked.iter().map(|&i| sentences[i]))
}

fn join_sentences<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let mut result = parts.collect::<Vec<_>>().join(". ");
    if !result.ends_with(['.', '!', '?']) {
        result.push('.');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbered_sentences(n: usize) -> String {
        (0..n).map(|i| format!("Sentence number {} talks about topic{}. ", i, i)).collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("...")]
    #[case("?!")]
    fn test_fallback_on_no_sentences(#[case] text: &str) {
        assert_eq!(summarize(text), FALLBACK_SUMMARY);
    }

    #[test]
    fn test_fallback_on_no_sentences_lead() {
        let config = AnalysisConfig::builder().strategy(SummaryStrategy::Lead).build();
        assert_eq!(summarize_with_config("  \n ", &config), FALLBACK_SUMMARY);
    }

    #[test]
    fn test_fallback_on_zero_selection() {
        let text = "First sentence here. Second one follows. Third closes it.";

        let lead = AnalysisConfig::builder().strategy(SummaryStrategy::Lead).lead_sentences(0).build();
        assert_eq!(summarize_with_config(text, &lead), FALLBACK_SUMMARY);

        let frequency = AnalysisConfig::builder().min_sentences(0).max_sentences(0).build();
        assert_eq!(summarize_with_config(text, &frequency), FALLBACK_SUMMARY);

        let zero_ratio = AnalysisConfig::builder().ratio(0.0).min_sentences(0).build();
        assert_eq!(summarize_with_config(text, &zero_ratio), FALLBACK_SUMMARY);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(3, 3)]
    #[case(4, 3)]
    #[case(12, 3)]
    #[case(13, 4)]
    #[case(20, 5)]
    #[case(28, 7)]
    #[case(29, 7)]
    #[case(100, 7)]
    fn test_selection_count(#[case] total: usize, #[case] expected: usize) {
        assert_eq!(selection_count(total, &AnalysisConfig::default()), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(16)]
    #[case(40)]
    fn test_summary_sentence_count(#[case] n: usize) {
        let text = numbered_sentences(n);
        let summary = summarize(&text);
        let expected = selection_count(n, &AnalysisConfig::default());
        assert_eq!(summary.matches("Sentence number").count(), expected);
    }

    #[test]
    fn test_single_sentence_gets_period() {
        assert_eq!(summarize("Just one sentence without a stop"), "Just one sentence without a stop.");
    }

    #[test]
    fn test_short_text_returns_all_sentences_in_order() {
        assert_eq!(summarize("Alpha beta. Gamma delta! Epsilon zeta?"), "Alpha beta. Gamma delta. Epsilon zeta.");
    }

    #[test]
    fn test_selects_densest_sentences() {
        let text = "Rust compiler checks rust code. Cats nap. Dogs bark loudly. \
                    Rust code compiles with the rust compiler. Birds sing.";
        let summary = summarize(text);
        assert_eq!(
            summary,
            "Rust compiler checks rust code. Cats nap. Rust code compiles with the rust compiler."
        );
    }

    #[test]
    fn test_order_preserved_regardless_of_rank() {
        let text = "Weather is mild. Markets markets markets rally. Sports news. Markets rally again markets. Fin.";
        let summary = summarize(text);
        let first = summary.find("Markets markets").unwrap();
        let second = summary.find("Markets rally again").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_duplicate_sentences_resolve_to_first_occurrence() {
        let text = "Rust rust rust. Other words here. Rust rust rust. More filler text.";
        let summary = summarize(text);
        assert_eq!(summary, "Rust rust rust. Rust rust rust. More filler text.");
    }

    #[test]
    fn test_score_sentences_normalizes_by_length() {
        let scored = score_sentences("Rust rust. Rust is great.");
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].position, 0);
        assert!((scored[0].score - 3.0).abs() < f64::EPSILON);
        // rust(3) + is(0) + great(1) over three tokens
        assert!((scored[1].score - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sentence_without_tokens_scores_zero() {
        let freq = WordFrequencies::default();
        assert_eq!(sentence_score("- ! a", &freq), 0.0);
    }

    #[test]
    fn test_lead_strategy_prefers_opening_sentences() {
        let config = AnalysisConfig::builder().strategy(SummaryStrategy::Lead).lead_sentences(3).build();
        let text = "Short one. Second sentence here. Third. A much longer fourth sentence with many words in it.";
        let summary = summarize_with_config(text, &config);
        assert_eq!(summary, "Short one. Second sentence here. Third.");
    }

    #[test]
    fn test_lead_strategy_fills_with_longest_remaining() {
        let config = AnalysisConfig::builder().strategy(SummaryStrategy::Lead).lead_sentences(4).build();
        let text = "One. Two. Three. Tiny. A far longer closing sentence. Mid sized one";
        let summary = summarize_with_config(text, &config);
        assert_eq!(summary, "One. Two. Three. A far longer closing sentence.");
    }

    #[test]
    fn test_lead_strategy_collapses_whitespace() {
        let config = AnalysisConfig::builder().strategy(SummaryStrategy::Lead).build();
        let summary = summarize_with_config("Line\n\none   here.\tNext  line", &config);
        assert_eq!(summary, "Line one here. Next line.");
    }

    #[rstest]
    #[case("frequency", SummaryStrategy::Frequency)]
    #[case("Extractive", SummaryStrategy::Frequency)]
    #[case("lead", SummaryStrategy::Lead)]
    #[case("POSITION", SummaryStrategy::Lead)]
    fn test_strategy_from_str(#[case] input: &str, #[case] expected: SummaryStrategy) {
        assert_eq!(input.parse::<SummaryStrategy>().unwrap(), expected);
    }

    #[test]
    fn test_strategy_from_str_invalid() {
        assert!("bart".parse::<SummaryStrategy>().is_err());
    }

    #[test]
    fn test_strategy_serde() {
        let strategy: SummaryStrategy = serde_json::from_str(r#""position""#).unwrap();
        assert_eq!(strategy, SummaryStrategy::Lead);
        assert_eq!(serde_json::to_string(&SummaryStrategy::Frequency).unwrap(), r#""frequency""#);
        assert_eq!(SummaryStrategy::Lead.to_string(), "lead");
    }
}
