//! Main analysis API.
//!
//! The entry points are [`analyze`] for one-off calls and [`Analyzer`] when
//! the same configuration is reused. Summarization and credibility scoring
//! are independent passes over the same input; neither fails.
//!
//! # Example
//!
//! ```rust
//! use credence_core::{AnalysisConfig, Analyzer, SummaryStrategy, analyze};
//!
//! let result = analyze("Officials said the bridge will reopen in May. Traffic is light.");
//! assert!(result.credibility_score <= 100);
//!
//! let analyzer = Analyzer::with_config(
//!     AnalysisConfig::builder().strategy(SummaryStrategy::Lead).lead_sentences(1).build(),
//! );
//! assert_eq!(analyzer.summarize("First. Second."), "First.");
//! ```

use crate::analysis::AnalysisResult;
use crate::credibility::{CredibilityResult, score_credibility};
use crate::summarize::{SummaryStrategy, summarize_with_config};
use crate::{CredenceError, Result};

#[cfg(feature = "fetch")]
use crate::extract::extract_article;
#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};

/// Configuration for summarization.
///
/// The defaults select a quarter of the sentences, at least three and at
/// most seven, ranked by word frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Sentence selection strategy (default: frequency).
    pub strategy: SummaryStrategy,

    /// Share of sentences kept by the frequency strategy (default: 0.25).
    pub ratio: f64,

    /// Lower bound on selected sentences (default: 3).
    pub min_sentences: usize,

    /// Upper bound on selected sentences (default: 7).
    pub max_sentences: usize,

    /// Sentences kept by the lead strategy (default: 5).
    pub lead_sentences: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { strategy: SummaryStrategy::Frequency, ratio: 0.25, min_sentences: 3, max_sentences: 7, lead_sentences: 5 }
    }
}

impl AnalysisConfig {
    /// Creates a new builder for AnalysisConfig.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Checks that the bounds are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(CredenceError::ConfigError(format!(
                "ratio must be in (0, 1], got {}",
                self.ratio
            )));
        }
        if self.min_sentences == 0 || self.max_sentences == 0 || self.lead_sentences == 0 {
            return Err(CredenceError::ConfigError(
                "sentence counts must be at least 1".to_string(),
            ));
        }
        if self.min_sentences > self.max_sentences {
            return Err(CredenceError::ConfigError(format!(
                "min_sentences ({}) exceeds max_sentences ({})",
                self.min_sentences, self.max_sentences
            )));
        }
        Ok(())
    }
}

/// Builder for AnalysisConfig.
///
/// # Example
///
/// ```rust
/// use credence_core::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .ratio(0.5)
///     .min_sentences(2)
///     .max_sentences(10)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalysisConfig::default() }
    }

    /// Sets the summarization strategy.
    pub fn strategy(mut self, value: SummaryStrategy) -> Self {
        self.config.strategy = value;
        self
    }

    /// Sets the share of sentences to keep.
    pub fn ratio(mut self, value: f64) -> Self {
        self.config.ratio = value;
        self
    }

    /// Sets the minimum number of selected sentences.
    pub fn min_sentences(mut self, value: usize) -> Self {
        self.config.min_sentences = value;
        self
    }

    /// Sets the maximum number of selected sentences.
    pub fn max_sentences(mut self, value: usize) -> Self {
        self.config.max_sentences = value;
        self
    }

    /// Sets the number of sentences the lead strategy keeps.
    pub fn lead_sentences(mut self, value: usize) -> Self {
        self.config.lead_sentences = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalysisConfig {
        self.config
    }
}

impl Default for AnalysisConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reusable analyzer holding a configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with a custom configuration.
    ///
    /// The config is not validated here; a config that selects no sentences
    /// yields [`FALLBACK_SUMMARY`](crate::FALLBACK_SUMMARY). Call
    /// [`AnalysisConfig::validate`] first to reject it instead.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Summarizes and scores `text`.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        AnalysisResult::new(self.summarize(text), self.score_credibility(text))
    }

    pub fn summarize(&self, text: &str) -> String {
        summarize_with_config(text, &self.config)
    }

    pub fn score_credibility(&self, text: &str) -> CredibilityResult {
        score_credibility(text)
    }

    /// Fetches a page, extracts its article and analyzes it.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_analyze(&self, url: &str, fetch_config: &FetchConfig) -> Result<AnalysisResult> {
        let html = fetch_url(url, fetch_config).await?;
        let article = extract_article(&html)?;
        Ok(self.analyze(&article.analysis_text()))
    }
}

/// Analyzes `text` with the default configuration.
///
/// Never fails: empty input yields the fallback summary and a score computed
/// from the length checks alone.
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::new().analyze(text)
}

/// Analyzes `text` with a custom configuration.
pub fn analyze_with_config(text: &str, config: &AnalysisConfig) -> AnalysisResult {
    AnalysisResult::new(summarize_with_config(text, config), score_credibility(text))
}

/// Fetches, extracts and analyzes an article in one step.
#[cfg(feature = "fetch")]
pub async fn fetch_and_analyze(
    url: &str, fetch_config: &FetchConfig, config: &AnalysisConfig,
) -> Result<AnalysisResult> {
    Analyzer::with_config(config.clone()).fetch_and_analyze(url, fetch_config).await
}
