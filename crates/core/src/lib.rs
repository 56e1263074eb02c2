pub mod analysis;
pub mod analyzer;
pub mod credibility;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
pub mod summarize;
pub mod tokenize;

pub use analysis::AnalysisResult;
pub use analyzer::{AnalysisConfig, AnalysisConfigBuilder, Analyzer, analyze, analyze_with_config};
#[cfg(feature = "fetch")]
pub use analyzer::fetch_and_analyze;
pub use credibility::{
    CredibilityFactor, CredibilityRating, CredibilityResult, FactorKind, FactorPartition, partition_factors,
    score_credibility,
};
#[doc(hidden)]
pub use credibility::{CHECKS, Check, Signals, check, fired_checks};
pub use error::{CredenceError, Result};
pub use extract::{ExtractConfig, ExtractedArticle, ExtractionMethod, extract_article, extract_article_with_config};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, fetch_url, is_valid_url, parse_url};
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter, TomlFormatter};
pub use formatters::{convert_to_json, convert_to_markdown, convert_to_text, result_to_toml};
pub use summarize::{FALLBACK_SUMMARY, Sentence, SummaryStrategy, summarize, summarize_with_config};
#[doc(hidden)]
pub use tokenize::{WordFrequencies, split_sentences, tokenize};
