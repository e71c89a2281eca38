use crate::{UrlError, UrlResult};
use url::Url;

/// Parses a base URL that relative references will be resolved against
///
/// The base must be absolute and carry a host; anything else cannot anchor
/// path-relative or scheme-relative references.
pub fn parse_base(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::NotAbsolute(url_str.to_string())),
    }
}

/// Resolves a raw `href` value against a base URL
///
/// Follows RFC 3986 reference resolution: absolute references pass through,
/// scheme-relative (`//host/path`) and path-relative references take the
/// missing parts from the base. Leading and trailing whitespace is dropped.
///
/// Returns `None` only when the reference cannot be joined at all; references
/// with non-web schemes (`mailto:`, `javascript:`) come back unchanged so the
/// validity filter can see and record them.
///
/// # Examples
///
/// ```
/// use corpus_crawler::url::{parse_base, resolve_link};
///
/// let base = parse_base("https://example.ics.uci.edu/index.html").unwrap();
/// assert_eq!(
///     resolve_link("/about", &base).as_deref(),
///     Some("https://example.ics.uci.edu/about")
/// );
/// ```
pub fn resolve_link(href: &str, base: &Url) -> Option<String> {
    base.join(href.trim()).ok().map(String::from)
}

/// Serializes a URL the same way [`resolve_link`] does
///
/// `http://www.ics.uci.edu` becomes `http://www.ics.uci.edu/` and spaces are
/// percent-encoded. Input that does not parse comes back trimmed.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    Url::parse(url).map_or_else(|_| url.to_string(), String::from)
}
