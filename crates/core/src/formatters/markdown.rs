use crate::analysis::AnalysisResult;
use crate::credibility::{CredibilityFactor, CredibilityResult, partition_factors};

/// Convert an analysis result to a Markdown report
pub fn convert_to_markdown(result: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str("## Summary\n\n");
    output.push_str(&escape_markdown(&result.summary));
    output.push_str("\n\n");
    output.push_str(&credibility_to_markdown(&result.credibility()));

    output
}

/// Render only the credibility section (for --credibility-only flag)
pub fn credibility_to_markdown(credibility: &CredibilityResult) -> String {
    let mut output = String::from("## Credibility\n\n");
    output.push_str(&format!("**Score:** {}/100 ({})\n", credibility.score, credibility.rating().label()));

    let partition = partition_factors(&credibility.factors);
    push_section(&mut output, "Positive Factors", &partition.positive);
    push_section(&mut output, "Negative Factors", &partition.negative);
    push_section(&mut output, "Notes", &partition.neutral);

    output
}

fn push_section(output: &mut String, heading: &str, factors: &[CredibilityFactor]) {
    if factors.is_empty() {
        return;
    }

    output.push_str(&format!("\n### {}\n\n", heading));
    for factor in factors {
        output.push_str(&format!("- {}\n", escape_markdown(&factor.text)));
    }
}

/// Escape characters that would otherwise start Markdown formatting
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '#') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
