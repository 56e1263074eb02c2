use crate::analysis::AnalysisResult;
use crate::credibility::{CredibilityFactor, CredibilityResult};

/// Convert an analysis result to TOML
///
/// Manual TOML serialization to avoid adding the toml crate dependency
pub fn result_to_toml(result: &AnalysisResult) -> String {
    let mut toml = String::new();

    toml.push_str(&format!("summary = {}\n", toml_escape_string(&result.summary)));
    toml.push_str(&format!("credibility_score = {}\n", result.credibility_score));
    toml.push_str(&format!("credibility_rating = {}\n", toml_escape_string(result.rating().label())));
    push_factors(&mut toml, "credibility_factors", &result.credibility_factors);

    toml
}

/// Convert a bare summary to TOML (for --summary-only flag)
pub fn summary_to_toml(summary: &str) -> String {
    format!("summary = {}\n", toml_escape_string(summary))
}

/// Convert a credibility result to TOML (for --credibility-only flag)
pub fn credibility_to_toml(credibility: &CredibilityResult) -> String {
    let mut toml = String::new();

    toml.push_str(&format!("score = {}\n", credibility.score));
    toml.push_str(&format!("rating = {}\n", toml_escape_string(credibility.rating().label())));
    push_factors(&mut toml, "factors", &credibility.factors);

    toml
}

fn push_factors(toml: &mut String, table: &str, factors: &[CredibilityFactor]) {
    for factor in factors {
        toml.push_str(&format!("\n[[{}]]\n", table));
        toml.push_str(&format!("type = {}\n", toml_escape_string(&factor.kind.to_string())));
        toml.push_str(&format!("text = {}\n", toml_escape_string(&factor.text)));
    }
}

/// Escape a string for TOML format
fn toml_escape_string(s: &str) -> String {
    let needs_escape = s.contains(['"', '\\', '\n', '\t', '\r']);
    if needs_escape {
        format!(
            "\"{}\"",
            s.replace('\\', "\\\\")
                .replace('\"', "\\\"")
                .replace('\n', "\\n")
                .replace('\r', "\\r")
                .replace('\t', "\\t")
        )
    } else {
        format!("\"{}\"", s)
    }
}

/// TOML formatter for analysis output
pub struct TomlFormatter;

impl TomlFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_result(&self, result: &AnalysisResult) -> String {
        result_to_toml(result)
    }

    pub fn format_credibility(&self, credibility: &CredibilityResult) -> String {
        credibility_to_toml(credibility)
    }
}

impl Default for TomlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credibility::FactorKind;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            summary: "The council voted.".to_string(),
            credibility_score: 72,
            credibility_factors: vec![
                CredibilityFactor::new(FactorKind::Positive, "Includes specific data or statistics"),
                CredibilityFactor::new(FactorKind::Neutral, "Analysis uses text patterns to estimate credibility"),
            ],
        }
    }

    #[test]
    fn test_result_to_toml_basic() {
        let toml = result_to_toml(&sample());
        assert!(toml.starts_with("summary = \"The council voted.\"\n"));
        assert!(toml.contains("credibility_score = 72\n"));
        assert!(toml.contains("credibility_rating = \"High Credibility\"\n"));
    }

    #[test]
    fn test_result_to_toml_factor_tables() {
        let toml = result_to_toml(&sample());
        assert_eq!(toml.matches("[[credibility_factors]]").count(), 2);
        assert!(toml.contains("type = \"positive\"\ntext = \"Includes specific data or statistics\"\n"));
        assert!(toml.find("positive").unwrap() < toml.find("neutral").unwrap());
    }

    #[test]
    fn test_result_to_toml_no_factors() {
        let result = AnalysisResult { credibility_factors: Vec::new(), ..sample() };
        assert!(!result_to_toml(&result).contains("[["));
    }

    #[test]
    fn test_credibility_to_toml() {
        let toml = credibility_to_toml(&sample().credibility());
        assert!(toml.starts_with("score = 72\nrating = \"High Credibility\"\n"));
        assert_eq!(toml.matches("[[factors]]").count(), 2);
    }

    #[test]
    fn test_summary_to_toml() {
        assert_eq!(summary_to_toml("One. Two."), "summary = \"One. Two.\"\n");
    }

    #[test]
    fn test_toml_escape_with_quotes() {
        let escaped = toml_escape_string("He said \"this is true\".");
        assert_eq!(escaped, r#""He said \"this is true\".""#);
    }

    #[test]
    fn test_toml_escape_with_newlines_and_tabs() {
        assert_eq!(toml_escape_string("Line 1\nLine 2"), r#""Line 1\nLine 2""#);
        assert_eq!(toml_escape_string("a\tb"), r#""a\tb""#);
    }

    #[test]
    fn test_toml_escape_with_backslashes() {
        let escaped = toml_escape_string(r#"C:\data\file"#);
        assert_eq!(escaped, r#""C:\\data\\file""#);
    }

    #[test]
    fn test_toml_formatter() {
        let formatter = TomlFormatter::default();
        let result = sample();
        assert_eq!(formatter.format_result(&result), result_to_toml(&result));
        assert!(formatter.format_credibility(&result.credibility()).contains("score = 72"));
    }
}
