use owo_colors::OwoColorize;

use credence_core::{AnalysisResult, CredibilityRating, ExtractedArticle};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Credence".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Summarize articles and estimate their credibility\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    let label = format!("{}:", label);

    if ms < 50.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "fast".dimmed());
    } else if ms < 100.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "moderate".bright_yellow());
    } else {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "slow".bright_red());
    }
}

/// Print extraction details for HTML input
pub fn print_extraction_details(article: &ExtractedArticle) {
    if let Some(title) = &article.title {
        eprintln!("  {} {}", "Title:".dimmed(), title.bright_white());
    }
    eprintln!(
        "  {} {}",
        "Method:".dimmed(),
        format!("{:?}", article.method).bright_white()
    );
    eprintln!(
        "  {} {}\n",
        "Text:".dimmed(),
        format_size(article.text.len()).bright_white()
    );
}

/// Print the score with a color matching its rating
pub fn print_analysis_details(result: &AnalysisResult) {
    let score = format!("{}/100", result.credibility_score);
    let score = match result.rating() {
        CredibilityRating::High => score.bright_green().to_string(),
        CredibilityRating::Medium => score.bright_yellow().to_string(),
        CredibilityRating::Low => score.bright_red().to_string(),
    };

    eprintln!("  {} {} ({})", "Score:".dimmed(), score, result.rating().label().dimmed());
    eprintln!(
        "  {} {} positive, {} negative\n",
        "Factors:".dimmed(),
        result.positive_factors().len().to_string().bright_white(),
        result.negative_factors().len().to_string().bright_white()
    );
}

/// Print timing summary
pub fn print_timing_summary(total: std::time::Duration, timings: &[(String, std::time::Duration)]) {
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Timing Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());

    for (label, duration) in timings {
        print_timing(label, *duration);
    }

    eprintln!(
        "  {} {:>8.2}ms\n",
        format!("{}:", "Total").bold().dimmed(),
        total.as_secs_f64() * 1000.0
    );
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
