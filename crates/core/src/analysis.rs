//! The combined analysis output.
//!
//! [`AnalysisResult`] is the contract shared by every summarization strategy:
//! a summary, a credibility score and the factors behind that score. It
//! serializes with the field names front ends expect (`summary`,
//! `credibilityScore`, `credibilityFactors`).

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::credibility::{
    CredibilityFactor, CredibilityRating, CredibilityResult, FactorKind, FactorPartition, partition_factors,
};
use crate::formatters::{JsonConfig, TextConfig, convert_to_json, convert_to_markdown, convert_to_text};

/// Summary plus credibility assessment for one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Extractive summary, or the fallback message when the text had no sentences.
    pub summary: String,

    /// Credibility score in `0..=100`.
    pub credibility_score: u8,

    /// Factors in check order; deserializes to an empty list when absent.
    #[serde(default)]
    pub credibility_factors: Vec<CredibilityFactor>,
}

impl AnalysisResult {
    pub fn new(summary: String, credibility: CredibilityResult) -> Self {
        Self { summary, credibility_score: credibility.score, credibility_factors: credibility.factors }
    }

    /// Factors of one kind, in their original order.
    pub fn factors_of(&self, kind: FactorKind) -> impl Iterator<Item = &CredibilityFactor> {
        self.credibility_factors.iter().filter(move |factor| factor.kind == kind)
    }

    pub fn positive_factors(&self) -> Vec<&CredibilityFactor> {
        self.factors_of(FactorKind::Positive).collect()
    }

    pub fn negative_factors(&self) -> Vec<&CredibilityFactor> {
        self.factors_of(FactorKind::Negative).collect()
    }

    pub fn neutral_factors(&self) -> Vec<&CredibilityFactor> {
        self.factors_of(FactorKind::Neutral).collect()
    }

    /// All factors grouped by kind.
    pub fn partition(&self) -> FactorPartition {
        partition_factors(&self.credibility_factors)
    }

    pub fn rating(&self) -> CredibilityRating {
        CredibilityRating::from_score(self.credibility_score)
    }

    /// The credibility half of the result.
    pub fn credibility(&self) -> CredibilityResult {
        CredibilityResult { score: self.credibility_score, factors: self.credibility_factors.clone() }
    }

    /// Gets the result as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Gets the result as a JSON string.
    pub fn to_json_string(&self, config: &JsonConfig) -> Result<String> {
        convert_to_json(self, None, config)
    }

    /// Gets the result as a Markdown report.
    pub fn to_markdown(&self) -> String {
        convert_to_markdown(self)
    }

    /// Gets the result as plain text.
    pub fn to_text(&self) -> String {
        convert_to_text(self, &TextConfig::default())
    }
}
