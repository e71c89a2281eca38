/// Checks whether a host falls inside the crawl scope
///
/// The scope is a plain substring such as `.ics.uci.edu`: any host containing
/// it is in scope, so `www.ics.uci.edu` and `vision.ics.uci.edu` both match
/// while the bare `ics.uci.edu` (no leading dot) does not.
///
/// Both sides are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use corpus_crawler::url::matches_scope;
///
/// assert!(matches_scope(".ics.uci.edu", "www.ics.uci.edu"));
/// assert!(!matches_scope(".ics.uci.edu", "ics.uci.edu"));
/// assert!(!matches_scope(".ics.uci.edu", "www.cs.ucla.edu"));
/// ```
pub fn matches_scope(scope: &str, host: &str) -> bool {
    if scope.is_empty() || host.is_empty() {
        return false;
    }
    host.to_lowercase().contains(&scope.to_lowercase())
}
