//! Article text extraction from HTML.
//!
//! Locates the main content container of a page and collects its paragraph
//! and heading text. Text inside `script`, `style`, `header`, `footer` and
//! `nav` elements is ignored everywhere.
//!
//! Container lookup tries, in order, the first `article`, the first `main`,
//! the first `[role=main]`, the first element whose class and the first whose
//! id mention content/article/post/entry, keeping the first one with enough
//! text. When none qualifies the whole `body` is used.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::{CredenceError, Result};

const EXCLUDED_TAGS: [&str; 5] = ["script", "style", "header", "footer", "nav"];

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());
static ANY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("*").unwrap());
static TEXT_BLOCKS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p, h1, h2, h3, h4, h5, h6").unwrap());
static CONTAINER_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    ["article", "main", r#"[role="main"]"#]
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});
static CONTAINER_HINT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(content|article|post|entry)").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Thresholds for container and paragraph selection.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// A container needs more than this many characters of text (default: 300).
    pub min_container_chars: usize,
    /// Paragraphs and headings need more than this many characters (default: 20).
    pub min_block_chars: usize,
    /// Below this many characters of block text, the whole container text is used (default: 200).
    pub min_text_chars: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { min_container_chars: 300, min_block_chars: 20, min_text_chars: 200 }
    }
}

/// How the article text was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Joined paragraph and heading blocks.
    Paragraphs,
    /// All text of the container.
    FullText,
}

/// Article text pulled out of an HTML page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedArticle {
    /// Trimmed `<title>` text, if any.
    pub title: Option<String>,
    /// Whitespace-normalized article text.
    pub text: String,
    pub method: ExtractionMethod,
}

impl ExtractedArticle {
    /// Text to feed the analyzer: the title, a blank line, then the body.
    pub fn analysis_text(&self) -> String {
        match &self.title {
            Some(title) => format!("{}\n\n{}", title, self.text),
            None => self.text.clone(),
        }
    }
}

/// Extract article text with the default thresholds.
pub fn extract_article(html: &str) -> Result<ExtractedArticle> {
    extract_article_with_config(html, &ExtractConfig::default())
}

/// Extract article text with custom thresholds.
pub fn extract_article_with_config(html: &str, config: &ExtractConfig) -> Result<ExtractedArticle> {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let container = match find_container(&document, config) {
        Some(container) => container,
        None => {
            tracing::warn!("no specific content container found, using body");
            document
                .select(&BODY)
                .next()
                .ok_or_else(|| CredenceError::ExtractionFailed("Could not locate article content".to_string()))?
        }
    };

    let blocks: Vec<String> = container
        .select(&TEXT_BLOCKS)
        .filter(|el| !is_excluded(*el))
        .map(|el| visible_text(el).trim().to_string())
        .filter(|text| text.chars().count() > config.min_block_chars)
        .collect();
    let joined = blocks.join("\n\n");

    let (raw, method) = if joined.chars().count() < config.min_text_chars {
        tracing::debug!("paragraph extraction yielded insufficient content, using all text");
        (visible_text(container), ExtractionMethod::FullText)
    } else {
        (joined, ExtractionMethod::Paragraphs)
    };

    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(CredenceError::ExtractionFailed("no article text found".to_string()));
    }

    Ok(ExtractedArticle { title, text, method })
}

/// Collapse every whitespace run to a single space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

fn find_container<'a>(document: &'a Html, config: &ExtractConfig) -> Option<ElementRef<'a>> {
    let by_tag = CONTAINER_SELECTORS
        .iter()
        .map(|selector| document.select(selector).find(|el| !is_excluded(*el)));

    let by_class = document.select(&ANY).find(|el| {
        !is_excluded(*el)
            && el
                .value()
                .attr("class")
                .is_some_and(|class| class.split_whitespace().any(|c| CONTAINER_HINT.is_match(c)))
    });

    let by_id = document.select(&ANY).find(|el| {
        !is_excluded(*el) && el.value().attr("id").is_some_and(|id| CONTAINER_HINT.is_match(id))
    });

    by_tag
        .chain([by_class, by_id])
        .flatten()
        .find(|el| text_weight(*el) > config.min_container_chars)
}

/// Non-whitespace characters of visible text.
fn text_weight(element: ElementRef<'_>) -> usize {
    visible_text(element).chars().filter(|c| !c.is_whitespace()).count()
}

/// Whether the element is, or sits inside, an ignored element.
fn is_excluded(element: ElementRef<'_>) -> bool {
    EXCLUDED_TAGS.contains(&element.value().name())
        || element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| EXCLUDED_TAGS.contains(&ancestor.value().name()))
}

/// Text of an element, skipping ignored descendants. Text nodes are
/// separated by a space.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child) = ElementRef::wrap(child) {
            if !EXCLUDED_TAGS.contains(&child.value().name()) {
                collect_text(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(seed: &str) -> String {
        format!(
            "<p>{} is discussed at length in this paragraph of the article body, with enough detail to matter.</p>",
            seed
        )
    }

    fn page(body: &str) -> String {
        format!("<html><head><title> Test Page </title></head><body>{}</body></html>", body)
    }

    #[test]
    fn test_extracts_title_and_article_paragraphs() {
        let article: String = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"].iter().map(|s| paragraph(s)).collect();
        let html = page(&format!(
            "<nav>Home About Contact</nav><article>{}</article><footer>Copyright notice text here</footer>",
            article
        ));

        let extracted = extract_article(&html).unwrap();
        assert_eq!(extracted.title.as_deref(), Some("Test Page"));
        assert_eq!(extracted.method, ExtractionMethod::Paragraphs);
        assert!(extracted.text.starts_with("Alpha is discussed"));
        assert!(extracted.text.contains("Epsilon is discussed"));
        assert!(!extracted.text.contains("Home About"));
        assert!(!extracted.text.contains("Copyright"));
        assert!(!extracted.text.contains('\n'));
    }

    #[test]
    fn test_short_paragraphs_are_skipped() {
        let article: String = ["One", "Two", "Three", "Four", "Five"].iter().map(|s| paragraph(s)).collect();
        let html = page(&format!("<main><p>Too short.</p>{}</main>", article));

        let extracted = extract_article(&html).unwrap();
        assert!(!extracted.text.contains("Too short"));
    }

    #[test]
    fn test_class_hint_container() {
        let article: String = ["Red", "Green", "Blue", "Cyan", "Magenta"].iter().map(|s| paragraph(s)).collect();
        let html = page(&format!(
            "<div class=\"sidebar\">{}</div><div class=\"main-content\">{}</div>",
            paragraph("Sidebar"),
            article
        ));

        let extracted = extract_article(&html).unwrap();
        assert!(extracted.text.starts_with("Red is discussed"));
        assert!(!extracted.text.contains("Sidebar"));
    }

    #[test]
    fn test_falls_back_to_body() {
        let html = page(&format!("<div>{}{}</div>", paragraph("Lonely"), paragraph("Second")));
        let extracted = extract_article(&html).unwrap();
        assert!(extracted.text.contains("Lonely is discussed"));
        assert!(extracted.text.contains("Second is discussed"));
    }

    #[test]
    fn test_full_text_when_blocks_are_sparse() {
        let html = page("<div>Plain text without any paragraph markup at all, just words.</div>");
        let extracted = extract_article(&html).unwrap();
        assert_eq!(extracted.method, ExtractionMethod::FullText);
        assert_eq!(extracted.text, "Plain text without any paragraph markup at all, just words.");
    }

    #[test]
    fn test_scripts_and_styles_ignored() {
        let html = page("<script>var x = 1;</script><style>p { color: red }</style><div>Visible words only.</div>");
        let extracted = extract_article(&html).unwrap();
        assert_eq!(extracted.text, "Visible words only.");
    }

    #[test]
    fn test_empty_page_fails() {
        let result = extract_article("<html><body><script>1</script></body></html>");
        assert!(matches!(result, Err(CredenceError::ExtractionFailed(_))));
    }

    #[test]
    fn test_analysis_text_prefixes_title() {
        let article = ExtractedArticle {
            title: Some("Headline".to_string()),
            text: "Body text.".to_string(),
            method: ExtractionMethod::Paragraphs,
        };
        assert_eq!(article.analysis_text(), "Headline\n\nBody text.");

        let untitled = ExtractedArticle { title: None, ..article };
        assert_eq!(untitled.analysis_text(), "Body text.");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a\n\n b\t c  "), "a b c");
    }
}
