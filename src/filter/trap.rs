//! Crawler-trap heuristics
//!
//! Two independent checks run over the raw URL text:
//!
//! - **Suspicious query keys**: the query string, split on `=`, `&` and `|`,
//!   contains an action word such as `login` or `download`.
//! - **Repetition / calendar**: the lower-cased URL, split on
//!   `/ = $ # & + ? % |`, repeats a token more often than the threshold, or
//!   contains one of the calendar tokens `day`, `month`, `year`.
//!
//! The repetition check counts every token, path segments included, and
//! counts empty tokens between adjacent separators as well. A site with
//! genuinely repeated directory names will be flagged.

use std::collections::HashMap;
use std::fmt;

/// Query tokens that mark session or action endpoints
pub const SUSPICIOUS_QUERY_TOKENS: &[&str] = &["login", "mailto", "edit", "download"];

/// Tokens that mark calendar-style paging
pub const CALENDAR_TOKENS: &[&str] = &["day", "month", "year"];

/// Default number of times a token may repeat before the URL counts as a trap
pub const DEFAULT_REPETITION_THRESHOLD: usize = 3;

const QUERY_SEPARATORS: &[char] = &['=', '&', '|'];
const URL_SEPARATORS: &[char] = &['/', '=', '$', '#', '&', '+', '?', '%', '|'];

/// Which heuristic flagged a URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrapKind {
    /// Query string carries an action word
    SuspiciousQuery(String),

    /// A token repeats more often than the threshold allows
    RepeatedToken { token: String, count: usize },

    /// A calendar paging token is present
    Calendar(String),
}

impl fmt::Display for TrapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuspiciousQuery(token) => write!(f, "suspicious query token '{}'", token),
            Self::RepeatedToken { token, count } => {
                write!(f, "token '{}' repeated {} times", token, count)
            }
            Self::Calendar(token) => write!(f, "calendar token '{}'", token),
        }
    }
}

/// Returns true if the URL matches either trap heuristic
///
/// Uses the default repetition threshold of 3.
///
/// # Examples
///
/// ```
/// use corpus_crawler::looks_like_trap;
///
/// assert!(looks_like_trap("http://www.ics.uci.edu/wiki?do=edit"));
/// assert!(looks_like_trap("http://www.ics.uci.edu/events?year=2019"));
/// assert!(!looks_like_trap("http://www.ics.uci.edu/about/index.html"));
/// ```
pub fn looks_like_trap(url: &str) -> bool {
    detect_trap(url, DEFAULT_REPETITION_THRESHOLD).is_some()
}

/// Runs both heuristics and reports the first one that fires
///
/// The query check runs first; the repetition/calendar check second.
pub fn detect_trap(url: &str, repetition_threshold: usize) -> Option<TrapKind> {
    suspicious_query(url).or_else(|| repeated_or_calendar(url, repetition_threshold))
}

fn suspicious_query(url: &str) -> Option<TrapKind> {
    query_string(url)
        .split(QUERY_SEPARATORS)
        .find(|token| SUSPICIOUS_QUERY_TOKENS.contains(token))
        .map(|token| TrapKind::SuspiciousQuery(token.to_string()))
}

fn repeated_or_calendar(url: &str, repetition_threshold: usize) -> Option<TrapKind> {
    let lowered = url.to_lowercase();

    // Vec keeps first-seen order so the reported token is deterministic.
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in lowered.split(URL_SEPARATORS) {
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    order.into_iter().find_map(|token| {
        let count = counts[token];
        if count > repetition_threshold {
            Some(TrapKind::RepeatedToken {
                token: token.to_string(),
                count,
            })
        } else if CALENDAR_TOKENS.contains(&token) {
            Some(TrapKind::Calendar(token.to_string()))
        } else {
            None
        }
    })
}

/// Raw query component: text after the first `?` and before any `#`
fn query_string(url: &str) -> &str {
    let without_fragment = url.split('#').next().unwrap_or_default();
    without_fragment
        .split_once('?')
        .map(|(_, query)| query)
        .unwrap_or_default()
}
