use crate::analysis::AnalysisResult;
use crate::credibility::{CredibilityFactor, CredibilityResult};

/// Configuration for plain text output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Wrap the summary at specified width (0 = no wrapping)
    pub line_width: usize,

    /// List credibility factors under the score
    pub include_factors: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { line_width: 0, include_factors: true }
    }
}

/// Plain text formatter for terminal-friendly reports
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, result: &AnalysisResult) -> String {
        convert_to_text(result, &self.config)
    }
}

/// Convert an analysis result to a plain text report
pub fn convert_to_text(result: &AnalysisResult, config: &TextConfig) -> String {
    let mut output = String::new();

    output.push_str(&underlined("Summary"));
    output.push_str(&wrap_text(&result.summary, config.line_width));
    output.push_str("\n\n");
    output.push_str(&credibility_to_text(&result.credibility(), config));

    output.trim_end().to_string()
}

/// Render only the credibility half (for --credibility-only flag)
pub fn credibility_to_text(credibility: &CredibilityResult, config: &TextConfig) -> String {
    let mut output = format!("Credibility: {}/100 ({})\n", credibility.score, credibility.rating().label());

    if config.include_factors {
        let partition = crate::credibility::partition_factors(&credibility.factors);
        push_group(&mut output, "Positive factors", '+', &partition.positive);
        push_group(&mut output, "Negative factors", '-', &partition.negative);
        push_group(&mut output, "Notes", '~', &partition.neutral);
    }

    output.trim_end().to_string()
}

fn underlined(title: &str) -> String {
    format!("{}\n{}\n\n", title, "=".repeat(title.chars().count()))
}

fn push_group(output: &mut String, heading: &str, marker: char, factors: &[CredibilityFactor]) {
    if factors.is_empty() {
        return;
    }

    output.push('\n');
    output.push_str(heading);
    output.push_str(":\n");
    for factor in factors {
        output.push_str(&format!("  {} {}\n", marker, factor.text));
    }
}

/// Wrap text to specified line width
fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    text.split("\n\n")
        .map(|p| {
            let words: Vec<&str> = p.split_whitespace().collect();
            if words.is_empty() { String::new() } else { wrap_words(&words, width) }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Wrap a slice of words to specified width
fn wrap_words(words: &[&str], width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for &word in words {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
