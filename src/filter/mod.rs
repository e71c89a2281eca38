//! Link validity filtering
//!
//! Decides whether a discovered link is worth crawling. Checks run in a fixed
//! order and the first failing check decides the rejection reason:
//!
//! 1. scheme is `http` or `https`
//! 2. host is present
//! 3. URL length is within the limit
//! 4. no crawler-trap pattern (see [`trap`])
//! 5. host is inside the crawl scope
//! 6. path does not end in a blocked file extension
//!
//! URLs that do not parse at all are rejected as malformed. Every rejection
//! is appended to the filter's [`TrapLog`].

mod extension;
mod trap;

pub use extension::{blocked_extension, BLOCKED_EXTENSIONS};
pub use trap::{
    detect_trap, looks_like_trap, TrapKind, CALENDAR_TOKENS, DEFAULT_REPETITION_THRESHOLD,
    SUSPICIOUS_QUERY_TOKENS,
};

use crate::config::FilterConfig;
use crate::state::TrapLog;
use crate::url::matches_scope;
use std::fmt;
use url::Url;

/// Why a link was rejected
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Scheme other than http or https
    Scheme,

    /// No host component
    MissingHost,

    /// Longer than the configured maximum
    TooLong { length: usize },

    /// Matched a crawler-trap heuristic
    Trap(TrapKind),

    /// Host outside the crawl scope
    OutOfScope,

    /// Path ends in a non-HTML file extension
    BlockedExtension(&'static str),

    /// Could not be parsed as a URL
    Malformed,
}

impl RejectReason {
    /// Short stable label, used to group rejections in summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::MissingHost => "missing-host",
            Self::TooLong { .. } => "too-long",
            Self::Trap(_) => "trap",
            Self::OutOfScope => "out-of-scope",
            Self::BlockedExtension(_) => "blocked-extension",
            Self::Malformed => "malformed",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { length } => write!(f, "too-long ({} chars)", length),
            Self::Trap(kind) => write!(f, "trap ({})", kind),
            Self::BlockedExtension(extension) => write!(f, "blocked-extension (.{})", extension),
            other => f.write_str(other.label()),
        }
    }
}

/// Outcome of classifying a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Classifies links and records the ones it rejects
///
/// # Example
///
/// ```
/// use corpus_crawler::config::FilterConfig;
/// use corpus_crawler::ValidityFilter;
///
/// let mut filter = ValidityFilter::new(FilterConfig::default());
/// assert!(filter.is_valid("http://www.ics.uci.edu/about/index.html"));
/// assert!(!filter.is_valid("mailto:staff@ics.uci.edu"));
/// assert_eq!(filter.trap_log().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ValidityFilter {
    config: FilterConfig,
    trap_log: TrapLog,
}

impl ValidityFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            trap_log: TrapLog::new(),
        }
    }

    /// Returns true if the link should be crawled
    ///
    /// A rejected link is appended to the trap log, once per call.
    pub fn is_valid(&mut self, url: &str) -> bool {
        match self.classify(url) {
            Verdict::Accepted => true,
            Verdict::Rejected(reason) => {
                tracing::debug!("Rejected {}: {}", url, reason);
                self.trap_log.record(url, reason);
                false
            }
        }
    }

    /// Runs every check without recording anything
    pub fn classify(&self, url: &str) -> Verdict {
        match self.check(url) {
            Ok(()) => Verdict::Accepted,
            Err(reason) => Verdict::Rejected(reason),
        }
    }

    fn check(&self, url: &str) -> Result<(), RejectReason> {
        let parsed = Url::parse(url).map_err(|_| RejectReason::Malformed)?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(RejectReason::Scheme);
        }

        let host = match parsed.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => return Err(RejectReason::MissingHost),
        };

        let length = url.chars().count();
        if length > self.config.max_url_length {
            return Err(RejectReason::TooLong { length });
        }

        if let Some(kind) = detect_trap(url, self.config.repetition_threshold) {
            return Err(RejectReason::Trap(kind));
        }

        if !matches_scope(&self.config.domain_scope, host) {
            return Err(RejectReason::OutOfScope);
        }

        if let Some(extension) = blocked_extension(parsed.path()) {
            return Err(RejectReason::BlockedExtension(extension));
        }

        Ok(())
    }

    pub fn trap_log(&self) -> &TrapLog {
        &self.trap_log
    }

    /// Consumes the filter, handing back everything it rejected
    pub fn into_trap_log(self) -> TrapLog {
        self.trap_log
    }
}
