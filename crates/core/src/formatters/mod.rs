pub mod json;
pub mod markdown;
pub mod text;
pub mod toml;

pub use json::{JsonConfig, JsonFormatter, convert_to_json, credibility_to_json};
pub use markdown::{convert_to_markdown, credibility_to_markdown};
pub use text::{TextConfig, TextFormatter, convert_to_text, credibility_to_text};
pub use toml::{TomlFormatter, credibility_to_toml, result_to_toml, summary_to_toml};
