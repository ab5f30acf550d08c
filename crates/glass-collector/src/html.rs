//! Fetched HTML page source
//!
//! Turns a raw HTML document into a header element (title and description)
//! followed by readable paragraphs. Used when a page is fetched server-side
//! instead of being read from a live DOM.

use crate::config::CollectorConfig;
use glass_domain::traits::TextSource;
use glass_domain::SourceElement;
use lazy_static::lazy_static;
use regex::Regex;
use std::convert::Infallible;

lazy_static! {
    static ref SCRIPT_OR_STYLE: Regex =
        Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>").unwrap();
    static ref TITLE: Regex = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap();
    static ref OG_TITLE: Regex =
        Regex::new(r#"(?i)<meta[^>]+property=["']og:title["'][^>]*content=["']([^"']+)["'][^>]*>"#).unwrap();
    static ref DESCRIPTION: Regex =
        Regex::new(r#"(?i)<meta[^>]+name=["']description["'][^>]*content=["']([^"']+)["'][^>]*>"#).unwrap();
    static ref OG_DESCRIPTION: Regex =
        Regex::new(r#"(?i)<meta[^>]+property=["']og:description["'][^>]*content=["']([^"']+)["'][^>]*>"#).unwrap();
    static ref TWITTER_DESCRIPTION: Regex =
        Regex::new(r#"(?i)<meta[^>]+name=["']twitter:description["'][^>]*content=["']([^"']+)["'][^>]*>"#).unwrap();
    static ref ARTICLE: Regex = Regex::new(r"(?is)<article\b[^>]*>(.*?)</article>").unwrap();
    static ref PARAGRAPH: Regex = Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// A fetched HTML document
#[derive(Debug, Clone)]
pub struct HtmlSource {
    html: String,
    max_paragraphs: usize,
    min_paragraph_len: usize,
}

impl HtmlSource {
    /// Create a source with the default paragraph limits
    pub fn new(html: impl Into<String>) -> Self {
        Self::with_config(html, &CollectorConfig::default())
    }

    /// Create a source with the paragraph limits from `config`
    pub fn with_config(html: impl Into<String>, config: &CollectorConfig) -> Self {
        Self {
            html: html.into(),
            max_paragraphs: config.html_max_paragraphs,
            min_paragraph_len: config.html_min_paragraph_len,
        }
    }

    /// Title and description joined with an em dash, if either exists
    fn header(clean: &str) -> Option<String> {
        let title = first_capture(&TITLE, clean).or_else(|| first_capture(&OG_TITLE, clean));
        let description = first_capture(&DESCRIPTION, clean)
            .or_else(|| first_capture(&OG_DESCRIPTION, clean))
            .or_else(|| first_capture(&TWITTER_DESCRIPTION, clean));

        let parts: Vec<String> = [title, description].into_iter().flatten().collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" — "))
        }
    }

    /// Readable paragraphs, preferring the first `<article>` when present
    fn paragraphs(&self, clean: &str) -> Vec<String> {
        let content = ARTICLE
            .captures(clean)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .unwrap_or(clean);

        PARAGRAPH
            .captures_iter(content)
            .filter_map(|c| c.get(1))
            .map(|m| normalize(&TAG.replace_all(m.as_str(), " ")))
            .filter(|p| p.chars().count() >= self.min_paragraph_len)
            .take(self.max_paragraphs)
            .collect()
    }
}

impl TextSource for HtmlSource {
    type Error = Infallible;

    fn enumerate(&self) -> Result<Vec<SourceElement>, Self::Error> {
        let clean = SCRIPT_OR_STYLE.replace_all(&self.html, " ");

        let mut elements = Vec::new();
        if let Some(header) = Self::header(&clean) {
            elements.push(SourceElement::visible(header));
        }
        elements.extend(self.paragraphs(&clean).into_iter().map(SourceElement::visible));

        Ok(elements)
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| normalize(m.as_str()))
        .filter(|s| !s.is_empty())
}

/// Decode the common entities and collapse whitespace
fn normalize(text: &str) -> String {
    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    WHITESPACE.replace_all(&decoded, " ").trim().to_string()
}
