use crate::state::{DownloadLog, InboundLinkCounter, SubdomainCounter, TrapLog};
use chrono::{DateTime, Utc};

/// Everything a finished crawl run produced
///
/// Built by the coordinator once the frontier is exhausted. The output layer
/// reads it to write the analytics files and the summary.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Pages fetched per host
    pub subdomains: SubdomainCounter,

    /// Accepted outbound references per target URL
    pub inbound_links: InboundLinkCounter,

    /// URLs fetched, in fetch order
    pub downloads: DownloadLog,

    /// Links the validity filter rejected, in rejection order
    pub traps: TrapLog,
}

impl CrawlReport {
    /// Wall-clock run time in whole seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// The most referenced accepted URL, if any link was accepted
    pub fn most_referenced(&self) -> Option<(&str, u64)> {
        self.inbound_links.most_referenced()
    }
}
