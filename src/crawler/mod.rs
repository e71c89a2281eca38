//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - Fetching page content from a content store
//! - HTML parsing and link extraction
//! - Frontier queueing and deduplication
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{fetch_url, FetchResult};
pub use frontier::{Frontier, MemoryFrontier};
pub use parser::extract_links;

use crate::config::{validate, Config};
use crate::state::CrawlReport;
use crate::CrawlerError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration
/// 2. Open the local corpus and load its bookkeeping index
/// 3. Seed the frontier
/// 4. Fetch pages and follow accepted links until the frontier is empty
/// 5. Return the run's analytics
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed successfully
/// * `Err(CrawlerError)` - Crawl failed
pub fn crawl(config: &Config) -> Result<CrawlReport, CrawlerError> {
    validate(config)?;
    run_crawl(config)
}
