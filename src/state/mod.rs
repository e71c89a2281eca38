//! State module for tracking crawl progress
//!
//! The accumulators a crawl run fills while it drains the frontier.
//!
//! # Components
//!
//! - `SubdomainCounter`: pages fetched per host, in first-seen order
//! - `InboundLinkCounter`: accepted references per target URL
//! - `DownloadLog`: fetched URLs in fetch order
//! - `TrapLog`: rejected links in rejection order, with the reason
//! - `CrawlReport`: the four accumulators of a finished run plus its timestamps

mod counters;
mod logs;
mod report;

// Re-export main types
pub use counters::{InboundLinkCounter, SubdomainCounter};
pub use logs::{DownloadLog, TrapEntry, TrapLog};
pub use report::CrawlReport;
