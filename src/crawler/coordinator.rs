//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties the pieces together:
//! - Draining the frontier
//! - Fetching each page from the content store
//! - Extracting and filtering outbound links
//! - Filling the run's analytics accumulators

use crate::config::{Config, FilterConfig};
use crate::crawler::{extract_links, fetch_url, Frontier, MemoryFrontier};
use crate::filter::ValidityFilter;
use crate::state::{CrawlReport, DownloadLog, InboundLinkCounter, SubdomainCounter};
use crate::store::{open_corpus, ContentStore};
use crate::url::extract_domain;
use crate::Result;
use chrono::{DateTime, Utc};

/// Main crawler coordinator structure
///
/// Owns the frontier, the validity filter and the accumulators for a single
/// run. The content store is only read.
pub struct Coordinator<S, F> {
    store: S,
    frontier: F,
    filter: ValidityFilter,
    max_pages: usize,
    started_at: DateTime<Utc>,
    subdomains: SubdomainCounter,
    inbound_links: InboundLinkCounter,
    downloads: DownloadLog,
}

impl<S: ContentStore, F: Frontier> Coordinator<S, F> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `store` - Where pages are fetched from
    /// * `frontier` - The frontier, usually pre-loaded with seeds
    /// * `filter` - Validity filter settings
    pub fn new(store: S, frontier: F, filter: FilterConfig) -> Self {
        Self {
            store,
            frontier,
            filter: ValidityFilter::new(filter),
            max_pages: 0,
            started_at: Utc::now(),
            subdomains: SubdomainCounter::new(),
            inbound_links: InboundLinkCounter::new(),
            downloads: DownloadLog::new(),
        }
    }

    /// Stops the run after `max_pages` fetches; 0 means unbounded
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Runs the crawl loop until the frontier is empty
    ///
    /// A store failure aborts the run and nothing is reported.
    pub fn run(mut self) -> Result<CrawlReport> {
        tracing::info!(
            "Starting crawl with {} URLs in frontier",
            self.frontier.pending_count()
        );

        while self.frontier.has_next() {
            if self.limit_reached() {
                tracing::info!(
                    "Reached page limit of {}, {} URLs left in frontier",
                    self.max_pages,
                    self.frontier.pending_count()
                );
                break;
            }
            self.step()?;
        }

        let report = self.into_report();
        tracing::info!(
            "Crawl completed: {} pages fetched, {} links accepted, {} traps in {}s",
            report.downloads.len(),
            report.inbound_links.total(),
            report.traps.len(),
            report.duration_seconds()
        );

        Ok(report)
    }

    /// Processes the next URL in the frontier
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A URL was processed
    /// * `Ok(false)` - The frontier was empty
    /// * `Err(CrawlerError)` - The content store failed
    pub fn step(&mut self) -> Result<bool> {
        let url = match self.frontier.next_url() {
            Some(url) => url,
            None => return Ok(false),
        };

        tracing::info!(
            "Fetching URL {} ... Fetched: {}, Queue size: {}",
            url,
            self.frontier.fetched_count(),
            self.frontier.pending_count()
        );

        let result = fetch_url(&self.store, &url)?;

        if let Some(host) = extract_domain(&url) {
            self.subdomains.record(&host);
        }
        self.downloads.record(&url);

        let links = extract_links(&result);
        let mut accepted = 0;
        for link in &links {
            if !self.store.contains(link)? {
                continue;
            }
            if self.filter.is_valid(link) {
                self.frontier.add_url(link);
                self.inbound_links.record(link);
                accepted += 1;
            }
        }

        tracing::debug!(
            "{}: {} bytes, {} links, {} accepted",
            url,
            result.size,
            links.len(),
            accepted
        );

        Ok(true)
    }

    fn limit_reached(&self) -> bool {
        self.max_pages > 0 && self.frontier.fetched_count() >= self.max_pages
    }

    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    pub fn filter(&self) -> &ValidityFilter {
        &self.filter
    }

    pub fn subdomains(&self) -> &SubdomainCounter {
        &self.subdomains
    }

    pub fn inbound_links(&self) -> &InboundLinkCounter {
        &self.inbound_links
    }

    pub fn downloads(&self) -> &DownloadLog {
        &self.downloads
    }

    /// Stops the run and hands back what it collected
    pub fn into_report(self) -> CrawlReport {
        CrawlReport {
            started_at: self.started_at,
            finished_at: Utc::now(),
            subdomains: self.subdomains,
            inbound_links: self.inbound_links,
            downloads: self.downloads,
            traps: self.filter.into_trap_log(),
        }
    }
}

/// Runs a complete crawl over the configured local corpus
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed
/// * `Err(CrawlerError)` - The corpus could not be opened or read
pub fn run_crawl(config: &Config) -> Result<CrawlReport> {
    let corpus = open_corpus(&config.corpus)?;
    let frontier = MemoryFrontier::with_seeds(&config.crawler.seeds);

    Coordinator::new(corpus, frontier, config.filter.clone())
        .with_max_pages(config.crawler.max_pages)
        .run()
}
