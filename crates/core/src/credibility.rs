//! Rule-based credibility scoring.
//!
//! A text starts at [`BASELINE_SCORE`] and every check in [`CHECKS`] that
//! fires adds its delta and appends a labelled [`CredibilityFactor`]. The
//! checks are plain substring patterns over the lowercased text plus a few
//! length measurements, so scoring is cheap and deterministic. A neutral
//! disclaimer factor always closes the list and the final score is clamped
//! to `0..=100`.
//!
//! # Example
//!
//! ```rust
//! use credence_core::{FactorKind, score_credibility};
//!
//! let result = score_credibility(r#"He said "this is true"."#);
//! assert_eq!(result.score, 63);
//! assert_eq!(result.factors.last().map(|f| f.kind), Some(FactorKind::Neutral));
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tokenize::split_sentences;

/// Score every text starts from.
pub const BASELINE_SCORE: i32 = 50;

/// Disclaimer appended to every factor list.
pub const NEUTRAL_FACTOR: &str = "Analysis uses text patterns to estimate credibility";

/// Only this many leading characters are searched for clickbait phrasing.
pub const CLICKBAIT_WINDOW: usize = 500;

const LONG_ARTICLE_CHARS: usize = 3000;
const BRIEF_ARTICLE_CHARS: usize = 1000;
const MAX_AVERAGE_SENTENCE_CHARS: f64 = 100.0;

const STATISTICS_PATTERN: &str = r"[0-9]+(\.[0-9]+)?(%|percent|percentage)";
const QUOTE_PATTERN: &str = r#""[^"]*""#;
const CITATION_PATTERN: &str = r"(according to|said|reported by|cited|source|study)";
const SENSATIONAL_PATTERN: &str = r"(shocking|unbelievable|mind-blowing|jaw-dropping|you won't believe|incredible|amazing|outrageous|scandal)";
const BALANCE_PATTERN: &str = r"(however|on the other hand|alternatively|in contrast|while|despite|nevertheless|conversely|critics|proponents)";
const HEDGING_PATTERN: &str = r"(may|might|could|possibly|potentially|suggests|indicates|appears|likely)";
const CERTAINTY_PATTERN: &str = r"(absolutely|definitely|undoubtedly|without question|100 percent|guaranteed|proven fact|irrefutable)";
const ACADEMIC_PATTERN: &str = r"(methodology|analysis|hypothesis|conclusion|investigation|evidence-based|peer-reviewed|correlation|causation|significant|variable)";
const CLICKBAIT_PATTERN: &str = r"(top [0-9]+|what happens next|won't believe|changed my life|mind-blowing|trending now|gone wrong)";
const TEMPORAL_PATTERN: &str = r"(january|february|march|april|may|june|july|august|september|october|november|december|yesterday|today|last week|this week)";

static STATISTICS: LazyLock<Regex> = LazyLock::new(|| Regex::new(STATISTICS_PATTERN).unwrap());
static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(QUOTE_PATTERN).unwrap());
static CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(CITATION_PATTERN).unwrap());
static SENSATIONAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(SENSATIONAL_PATTERN).unwrap());
static BALANCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(BALANCE_PATTERN).unwrap());
static HEDGING: LazyLock<Regex> = LazyLock::new(|| Regex::new(HEDGING_PATTERN).unwrap());
static CERTAINTY: LazyLock<Regex> = LazyLock::new(|| Regex::new(CERTAINTY_PATTERN).unwrap());
static ACADEMIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(ACADEMIC_PATTERN).unwrap());
static CLICKBAIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(CLICKBAIT_PATTERN).unwrap());
static TEMPORAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(TEMPORAL_PATTERN).unwrap());

/// Direction of a factor's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// A human-readable explanation attached to a credibility score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredibilityFactor {
    #[serde(rename = "type")]
    pub kind: FactorKind,
    pub text: String,
}

impl CredibilityFactor {
    pub fn new(kind: FactorKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

/// Score in `0..=100` and the factors behind it, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredibilityResult {
    pub score: u8,
    pub factors: Vec<CredibilityFactor>,
}

impl CredibilityResult {
    pub fn rating(&self) -> CredibilityRating {
        CredibilityRating::from_score(self.score)
    }
}

/// Coarse band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityRating {
    /// Below 40.
    Low,
    /// 40 to 69.
    Medium,
    /// 70 and above.
    High,
}

impl CredibilityRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..40 => Self::Low,
            40..70 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Credibility",
            Self::Medium => "Medium Credibility",
            Self::High => "High Credibility",
        }
    }
}

/// Factors split by kind. Order within each group is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactorPartition {
    pub positive: Vec<CredibilityFactor>,
    pub negative: Vec<CredibilityFactor>,
    pub neutral: Vec<CredibilityFactor>,
}

impl FactorPartition {
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.neutral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate the groups back into a single list (positive, negative, neutral).
    pub fn into_factors(self) -> Vec<CredibilityFactor> {
        let mut factors = self.positive;
        factors.extend(self.negative);
        factors.extend(self.neutral);
        factors
    }
}

/// Split a factor list by kind.
pub fn partition_factors(factors: &[CredibilityFactor]) -> FactorPartition {
    let mut partition = FactorPartition::default();
    for factor in factors {
        let group = match factor.kind {
            FactorKind::Positive => &mut partition.positive,
            FactorKind::Negative => &mut partition.negative,
            FactorKind::Neutral => &mut partition.neutral,
        };
        group.push(factor.clone());
    }
    partition
}

/// Measurements shared by all checks, computed once per text.
#[derive(Debug, Clone)]
pub struct Signals<'a> {
    /// The text as given.
    pub text: &'a str,
    /// Lowercased text; every pattern is matched against this.
    pub lowered: String,
    /// Length of the original text in characters.
    pub length: usize,
    /// Number of non-empty sentences.
    pub sentence_count: usize,
}

impl<'a> Signals<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lowered: text.to_lowercase(),
            length: text.chars().count(),
            sentence_count: split_sentences(text).len(),
        }
    }

    /// Average characters per sentence, treating a sentence-less text as one.
    pub fn average_sentence_length(&self) -> f64 {
        self.length as f64 / self.sentence_count.max(1) as f64
    }

    /// The first [`CLICKBAIT_WINDOW`] characters of the lowercased text.
    pub fn opening(&self) -> &str {
        match self.lowered.char_indices().nth(CLICKBAIT_WINDOW) {
            Some((end, _)) => &self.lowered[..end],
            None => &self.lowered,
        }
    }
}

/// One heuristic: when `predicate` holds, add `delta` and report `message`.
pub struct Check {
    pub name: &'static str,
    pub delta: i32,
    pub kind: FactorKind,
    pub message: &'static str,
    pub predicate: fn(&Signals<'_>) -> bool,
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("delta", &self.delta)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Check {
    pub fn fires(&self, signals: &Signals<'_>) -> bool {
        (self.predicate)(signals)
    }

    pub fn factor(&self) -> CredibilityFactor {
        CredibilityFactor::new(self.kind, self.message)
    }
}

/// Every check, in the order factors are reported.
pub static CHECKS: [Check; 13] = [
    Check {
        name: "long_article",
        delta: 5,
        kind: FactorKind::Positive,
        message: "Article length indicates depth of coverage",
        predicate: |s| s.length > LONG_ARTICLE_CHARS,
    },
    Check {
        name: "brief_article",
        delta: -5,
        kind: FactorKind::Negative,
        message: "Brief article may lack comprehensive details",
        predicate: |s| s.length < BRIEF_ARTICLE_CHARS,
    },
    Check {
        name: "statistics",
        delta: 7,
        kind: FactorKind::Positive,
        message: "Contains statistical information",
        predicate: |s| STATISTICS.is_match(&s.lowered),
    },
    Check {
        name: "quotes",
        delta: 8,
        kind: FactorKind::Positive,
        message: "Contains direct quotes from sources",
        predicate: |s| QUOTE.is_match(&s.lowered),
    },
    Check {
        name: "citations",
        delta: 10,
        kind: FactorKind::Positive,
        message: "References external sources or studies",
        predicate: |s| CITATION.is_match(&s.lowered),
    },
    Check {
        name: "sensationalism",
        delta: -15,
        kind: FactorKind::Negative,
        message: "Contains sensationalist language",
        predicate: |s| SENSATIONAL.is_match(&s.lowered),
    },
    Check {
        name: "balance",
        delta: 8,
        kind: FactorKind::Positive,
        message: "Presents multiple perspectives",
        predicate: |s| BALANCE.is_match(&s.lowered),
    },
    Check {
        name: "hedging",
        delta: 5,
        kind: FactorKind::Positive,
        message: "Uses appropriately cautious language",
        predicate: |s| HEDGING.is_match(&s.lowered),
    },
    Check {
        name: "certainty",
        delta: -8,
        kind: FactorKind::Negative,
        message: "Makes claims of absolute certainty",
        predicate: |s| CERTAINTY.is_match(&s.lowered),
    },
    Check {
        name: "sentence_complexity",
        delta: -5,
        kind: FactorKind::Negative,
        message: "Complex sentence structure may obscure meaning",
        predicate: |s| s.average_sentence_length() > MAX_AVERAGE_SENTENCE_CHARS,
    },
    Check {
        name: "academic_language",
        delta: 7,
        kind: FactorKind::Positive,
        message: "Uses technical or academic language",
        predicate: |s| ACADEMIC.is_match(&s.lowered),
    },
    Check {
        name: "clickbait",
        delta: -12,
        kind: FactorKind::Negative,
        message: "Contains clickbait-style patterns",
        predicate: |s| CLICKBAIT.is_match(s.opening()),
    },
    Check {
        name: "temporal_references",
        delta: 5,
        kind: FactorKind::Positive,
        message: "Includes temporal references for context",
        predicate: |s| TEMPORAL.is_match(&s.lowered),
    },
];

/// Look up a check by name.
pub fn check(name: &str) -> Option<&'static Check> {
    CHECKS.iter().find(|check| check.name == name)
}

/// Checks that fire for `text`, in table order.
pub fn fired_checks(text: &str) -> Vec<&'static Check> {
    let signals = Signals::new(text);
    CHECKS.iter().filter(|check| check.fires(&signals)).collect()
}

/// Score the credibility of `text`.
pub fn score_credibility(text: &str) -> CredibilityResult {
    let signals = Signals::new(text);
    let mut score = BASELINE_SCORE;
    let mut factors = Vec::new();

    for check in CHECKS.iter().filter(|check| check.fires(&signals)) {
        score += check.delta;
        factors.push(check.factor());
    }

    factors.push(CredibilityFactor::new(FactorKind::Neutral, NEUTRAL_FACTOR));

    CredibilityResult { score: score.clamp(0, 100) as u8, factors }
}
