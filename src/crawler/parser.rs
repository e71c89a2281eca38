//! HTML parser for extracting outbound links
//!
//! Every `href` of every `<a>` element is resolved against the page URL.
//! Nothing is filtered here: non-web schemes such as `mailto:` pass through
//! unchanged so the validity filter can reject and record them. Duplicates
//! are kept.

use crate::crawler::FetchResult;
use crate::url::{parse_base, resolve_link};
use scraper::{Html, Selector};

/// Extracts the absolute outbound links of a fetched page
///
/// # Link Extraction Rules
///
/// **Empty result when:**
/// - the source URL is empty or has no host
/// - the page has no content
///
/// **Otherwise:**
/// - content is decoded as UTF-8, replacing invalid sequences
/// - each `<a href>` is joined against the source URL
/// - hrefs that cannot be joined are skipped
///
/// # Arguments
///
/// * `result` - The fetch result to extract links from
///
/// # Returns
///
/// The resolved links, in document order
///
/// # Example
///
/// ```
/// use corpus_crawler::crawler::extract_links;
/// use corpus_crawler::FetchResult;
///
/// let page = FetchResult {
///     url: "https://example.ics.uci.edu/index.html".to_string(),
///     content: Some(br#"<a href="/about">About</a>"#.to_vec()),
///     size: 26,
/// };
/// assert_eq!(extract_links(&page), vec!["https://example.ics.uci.edu/about"]);
/// ```
pub fn extract_links(result: &FetchResult) -> Vec<String> {
    let content = match &result.content {
        Some(content) => content,
        None => return Vec::new(),
    };

    let base = match parse_base(&result.url) {
        Ok(base) => base,
        Err(e) => {
            tracing::debug!("Skipping link extraction for {:?}: {}", result.url, e);
            return Vec::new();
        }
    };

    let html = String::from_utf8_lossy(content);
    let document = Html::parse_document(&html);

    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, &base))
        .collect()
}
