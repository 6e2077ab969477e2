//! Article retrieval.
//!
//! Fetches a page and extracts its main body text. Failures are reported
//! as strings with an `"Error"` prefix; callers must treat any such value
//! as "no text available", never as article content.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants;
use crate::logic::source_check::parse_host;

/// Extracted content below this length counts as a failed extraction.
const MIN_CONTENT_LEN: usize = 100;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

static SCRIPT_BLOCK: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").ok());
static STYLE_BLOCK: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").ok());
static PARAGRAPH: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").ok());
static TAG: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").ok());

/// Fetch and extract the main text of an article URL.
///
/// On any failure the returned string starts with `"Error"`.
pub fn fetch_article_text(url: &str) -> String {
    if parse_host(url).is_none() {
        return "Error: Invalid URL format. Please enter a complete URL (e.g., https://example.com)"
            .to_string();
    }

    let response = ureq::get(url)
        .timeout(Duration::from_secs(constants::FETCH_TIMEOUT_SECS))
        .set("User-Agent", USER_AGENT)
        .set(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .call();

    let html = match response {
        Ok(resp) => match resp.into_string() {
            Ok(body) => body,
            Err(e) => return format!("Error: {}", e),
        },
        Err(e) => return format!("Error: {}", e),
    };

    match extract_paragraphs(&html) {
        Some(text) => text,
        None => {
            "Error: Could not extract meaningful content. Please paste the article text directly."
                .to_string()
        }
    }
}

/// True if a fetch result is an error marker rather than article text.
pub fn is_fetch_error(text: &str) -> bool {
    text.starts_with("Error")
}

/// Collect paragraph text from raw HTML, or None when too little remains.
fn extract_paragraphs(html: &str) -> Option<String> {
    let script = SCRIPT_BLOCK.as_ref()?;
    let style = STYLE_BLOCK.as_ref()?;
    let paragraph = PARAGRAPH.as_ref()?;
    let tag = TAG.as_ref()?;

    let stripped = script.replace_all(html, " ");
    let stripped = style.replace_all(&stripped, " ");

    let mut paragraphs = Vec::new();
    for captures in paragraph.captures_iter(&stripped) {
        let inner = tag.replace_all(&captures[1], " ");
        let text = collapse_whitespace(&decode_entities(&inner));
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }

    let text = paragraphs.join("\n");
    if text.trim().len() > MIN_CONTENT_LEN {
        Some(text)
    } else {
        None
    }
}

/// Minimal entity decoding for the handful of entities common in body text.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_error_marker() {
        let result = fetch_article_text("not a url");
        assert!(is_fetch_error(&result));
        assert!(result.contains("Invalid URL format"));
    }

    #[test]
    fn test_extract_paragraphs() {
        let html = format!(
            "<html><head><style>p {{ color: red }}</style></head><body>\
             <script>var x = '<p>not content</p>';</script>\
             <p>First paragraph with <b>markup</b> &amp; entities.</p>\
             <p>{}</p></body></html>",
            "Second paragraph long enough to pass the content floor. ".repeat(3)
        );

        let text = extract_paragraphs(&html).unwrap();
        assert!(text.starts_with("First paragraph with markup & entities."));
        assert!(!text.contains("not content"));
        assert!(!text.contains("color: red"));
    }

    #[test]
    fn test_short_content_rejected() {
        let html = "<html><body><p>Too short.</p></body></html>";
        assert!(extract_paragraphs(html).is_none());
    }

    #[test]
    fn test_is_fetch_error() {
        assert!(is_fetch_error("Error: something broke"));
        assert!(!is_fetch_error("A normal article body"));
    }
}
