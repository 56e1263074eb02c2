//! Content fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving article input from
//! HTTP/HTTPS URLs, local files, and standard input.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{CredenceError, Result};

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

/// Parses `input` and checks it is an http(s) URL with a host.
pub fn parse_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim()).map_err(|e| CredenceError::InvalidUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CredenceError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http or https",
            url.scheme()
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(CredenceError::InvalidUrl("URL has no host".to_string()));
    }

    Ok(url)
}

/// Whether `input` is an http(s) URL with a host.
pub fn is_valid_url(input: &str) -> bool {
    parse_url(input).is_ok()
}

/// Fetches page content from a URL.
///
/// Follows redirects and respects the configured timeout. Any non-success
/// status is reported as [`CredenceError::HttpStatus`].
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = parse_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(CredenceError::HttpError)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching article");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                CredenceError::Timeout { timeout: config.timeout }
            } else {
                CredenceError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "fetch returned non-success status");
        return Err(CredenceError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;
    tracing::debug!(bytes = content.len(), "fetched article");

    Ok(content)
}

/// Reads content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(CredenceError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(CredenceError::from)
    }
}

/// Reads all of standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(CredenceError::from)?;

    Ok(buffer)
}
