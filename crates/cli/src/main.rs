mod echo;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use credence_core::formatters::{
    credibility_to_json, credibility_to_markdown, credibility_to_text, credibility_to_toml, summary_to_toml,
};
use credence_core::{
    AnalysisConfig, AnalysisResult, Analyzer, FetchConfig, JsonConfig, SummaryStrategy, TextConfig, convert_to_json,
    convert_to_markdown, convert_to_text, extract_article, fetch_file, fetch_stdin, fetch_url, is_valid_url,
    result_to_toml,
};
use owo_colors::OwoColorize;

use echo::{
    format_size, print_analysis_details, print_banner, print_extraction_details, print_info, print_step,
    print_success, print_timing_summary, print_warning,
};

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
    Toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "toml" => Ok(Self::Toml),
            _ => Err(format!("Invalid format: {}. Valid options: text, json, markdown, toml", s)),
        }
    }
}

/// Summarize an article and estimate its credibility
#[derive(Parser, Debug)]
#[command(name = "credence")]
#[command(author = "Credence Contributors")]
#[command(version)]
#[command(about = "Summarize articles and estimate their credibility", long_about = None)]
struct Args {
    /// URL to fetch, HTML or text file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json, markdown, toml)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Treat file or stdin input as HTML and extract the article first
    #[arg(long)]
    html: bool,

    /// Only output the summary
    #[arg(long, conflicts_with = "credibility_only")]
    summary_only: bool,

    /// Only output the credibility score and factors
    #[arg(long)]
    credibility_only: bool,

    /// Summarization strategy (frequency, lead)
    #[arg(long, default_value = "frequency", value_name = "STRATEGY")]
    strategy: SummaryStrategy,

    /// Share of sentences kept by the frequency strategy
    #[arg(long, default_value = "0.25", value_name = "RATIO")]
    ratio: f64,

    /// Minimum number of summary sentences
    #[arg(long, default_value = "3", value_name = "NUM")]
    min_sentences: usize,

    /// Maximum number of summary sentences
    #[arg(long, default_value = "7", value_name = "NUM")]
    max_sentences: usize,

    /// Sentences kept by the lead strategy
    #[arg(long, default_value = "5", value_name = "NUM")]
    lead_sentences: usize,

    /// Wrap text output at this width (0 = no wrapping)
    #[arg(long, default_value = "0", value_name = "COLS")]
    width: usize,

    /// Include the analyzed text in JSON output
    #[arg(long)]
    include_source: bool,

    /// Compact JSON output
    #[arg(long)]
    compact: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Show progress and timing on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::builder()
            .strategy(self.strategy)
            .ratio(self.ratio)
            .min_sentences(self.min_sentences)
            .max_sentences(self.max_sentences)
            .lead_sentences(self.lead_sentences)
            .build()
    }

    fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig { timeout: self.timeout, ..Default::default() };
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}

/// Raw input and whether it needs article extraction.
struct Input {
    content: String,
    is_html: bool,
}

fn looks_like_html_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

async fn read_input(input: &str, args: &Args) -> anyhow::Result<Input> {
    if input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        let content = fetch_stdin().context("Failed to read from stdin")?;
        Ok(Input { content, is_html: args.html })
    } else if is_valid_url(input) {
        if args.verbose {
            print_step(1, 3, &format!("Fetching from {}", input.bright_white().underline()));
        }
        let content = fetch_url(input, &args.fetch_config()).await.context("Failed to fetch URL")?;
        Ok(Input { content, is_html: true })
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        let content = fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?;
        Ok(Input { content, is_html: args.html || looks_like_html_file(input) })
    }
}

fn render(args: &Args, result: &AnalysisResult, source: &str) -> anyhow::Result<String> {
    let pretty = !args.compact;

    let output = if args.summary_only {
        match args.format {
            OutputFormat::Text => format!("{}\n", result.summary),
            OutputFormat::Json => {
                let value = serde_json::json!({ "summary": result.summary });
                let json = if pretty { serde_json::to_string_pretty(&value)? } else { value.to_string() };
                format!("{}\n", json)
            }
            OutputFormat::Markdown => format!("## Summary\n\n{}\n", result.summary),
            OutputFormat::Toml => summary_to_toml(&result.summary),
        }
    } else if args.credibility_only {
        let credibility = result.credibility();
        let text_config = TextConfig { line_width: args.width, include_factors: true };
        match args.format {
            OutputFormat::Text => format!("{}\n", credibility_to_text(&credibility, &text_config)),
            OutputFormat::Json => format!(
                "{}\n",
                credibility_to_json(&credibility, pretty).context("Failed to serialize credibility")?
            ),
            OutputFormat::Markdown => credibility_to_markdown(&credibility),
            OutputFormat::Toml => credibility_to_toml(&credibility),
        }
    } else {
        match args.format {
            OutputFormat::Text => {
                let config = TextConfig { line_width: args.width, include_factors: true };
                format!("{}\n", convert_to_text(result, &config))
            }
            OutputFormat::Json => {
                let config = JsonConfig { pretty, include_source: args.include_source };
                let json = convert_to_json(result, Some(source), &config).context("Failed to serialize result")?;
                format!("{}\n", json)
            }
            OutputFormat::Markdown => convert_to_markdown(result),
            OutputFormat::Toml => result_to_toml(result),
        }
    };

    Ok(output)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "credence", &mut std::io::stdout());
        return Ok(());
    }

    let Some(input) = args.input.as_deref() else {
        anyhow::bail!("No input provided");
    };

    let config = args.analysis_config();
    config.validate().context("Invalid analysis options")?;

    if args.verbose {
        print_banner();
        print_info(&format!("Strategy: {}", config.strategy));
        eprintln!();
    }

    let total_start = Instant::now();
    let mut timings = Vec::new();

    let start = Instant::now();
    let raw = read_input(input, &args).await?;
    timings.push(("Read".to_string(), start.elapsed()));

    if args.verbose {
        eprintln!("  {} {}\n", "Size:".dimmed(), format_size(raw.content.len()).bright_white());
    }

    let start = Instant::now();
    let text = if raw.is_html {
        if args.verbose {
            print_step(2, 3, "Extracting article text");
        }
        let article = extract_article(&raw.content).context("Failed to extract article")?;
        if args.verbose {
            print_extraction_details(&article);
        }
        article.analysis_text()
    } else {
        if args.verbose {
            print_step(2, 3, "Using input as plain text");
            eprintln!();
        }
        raw.content
    };
    timings.push(("Extract".to_string(), start.elapsed()));

    if args.verbose && text.trim().is_empty() {
        print_warning("Input is empty, the summary will be the fallback message");
    }

    if args.verbose {
        print_step(3, 3, "Analyzing");
    }

    let start = Instant::now();
    let result = Analyzer::with_config(config).analyze(&text);
    timings.push(("Analyze".to_string(), start.elapsed()));

    if args.verbose {
        print_analysis_details(&result);
        print_timing_summary(total_start.elapsed(), &timings);
    }

    let output = render(&args, &result, &text)?;

    match &args.output {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("TOML".parse::<OutputFormat>().unwrap(), OutputFormat::Toml);
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_looks_like_html_file() {
        assert!(looks_like_html_file("page.html"));
        assert!(looks_like_html_file("PAGE.HTM"));
        assert!(!looks_like_html_file("notes.txt"));
        assert!(!looks_like_html_file("html"));
    }

    #[test]
    fn test_args_build_analysis_config() {
        let args = Args::parse_from(["credence", "--strategy", "lead", "--lead-sentences", "2", "in.txt"]);
        let config = args.analysis_config();
        assert_eq!(config.strategy, SummaryStrategy::Lead);
        assert_eq!(config.lead_sentences, 2);
        assert_eq!(config.ratio, 0.25);
    }

    #[test]
    fn test_args_fetch_config() {
        let args = Args::parse_from(["credence", "--timeout", "3", "--user-agent", "probe/1.0", "in.txt"]);
        let config = args.fetch_config();
        assert_eq!(config.timeout, 3);
        assert_eq!(config.user_agent, "probe/1.0");
    }

    #[test]
    fn test_args_verify() {
        Args::command().debug_assert();
    }
}
