use url::Url;

/// Extracts the host from a URL string, lowercased
///
/// Returns `None` when the string does not parse or carries no host, which is
/// how relative references and schemes like `mailto:` present themselves.
///
/// # Examples
///
/// ```
/// use corpus_crawler::url::extract_domain;
///
/// assert_eq!(
///     extract_domain("http://Vision.ICS.uci.edu/papers"),
///     Some("vision.ics.uci.edu".to_string())
/// );
/// assert_eq!(extract_domain("/relative/path"), None);
/// assert_eq!(extract_domain("mailto:someone@uci.edu"), None);
/// ```
pub fn extract_domain(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()?
        .host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_lowercase())
}
