use crate::Result;
use crate::analysis::AnalysisResult;
use crate::credibility::CredibilityResult;
use serde::Serialize;

/// Complete JSON output structure
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonOutput<'a> {
    /// Summary, score and factors
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
    /// The analyzed text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<&'a str>,
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Include the analyzed text as `originalText`
    pub include_source: bool,
    /// Pretty print JSON output
    pub pretty: bool,
}

fn to_json_string<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty { Ok(serde_json::to_string_pretty(value)?) } else { Ok(serde_json::to_string(value)?) }
}

/// Convert an analysis result to JSON
///
/// `source` is only emitted when [`JsonConfig::include_source`] is set.
pub fn convert_to_json(result: &AnalysisResult, source: Option<&str>, config: &JsonConfig) -> Result<String> {
    let output = JsonOutput { result, original_text: if config.include_source { source } else { None } };
    to_json_string(&output, config.pretty)
}

/// Convert a credibility result alone to JSON (for --credibility-only)
pub fn credibility_to_json(credibility: &CredibilityResult, pretty: bool) -> Result<String> {
    to_json_string(credibility, pretty)
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, result: &AnalysisResult, source: Option<&str>) -> Result<String> {
        convert_to_json(result, source, &self.config)
    }

    pub fn credibility_only(&self, credibility: &CredibilityResult) -> Result<String> {
        credibility_to_json(credibility, self.config.pretty)
    }
}
