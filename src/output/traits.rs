//! Output handler traits and types
//!
//! This module defines the trait interface for report writers and the
//! summary structure derived from a finished crawl.

use crate::state::CrawlReport;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Number of entries shown in "top N" listings
pub const TOP_LIMIT: usize = 20;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Summary statistics for a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlSummary {
    // Run metadata
    pub started_at: String,
    pub finished_at: String,
    pub duration_seconds: i64,
    pub config_hash: Option<String>,

    // Overall statistics
    pub pages_fetched: u64,
    pub unique_subdomains: u64,
    pub links_accepted: u64,
    pub unique_links_accepted: u64,
    pub traps_total: u64,

    // Most referenced accepted URL and its count
    pub most_referenced: Option<(String, u64)>,

    // Busiest subdomains, most pages first
    pub top_subdomains: Vec<(String, u64)>,

    // Most referenced URLs, most references first
    pub top_referenced: Vec<(String, u64)>,

    // Rejections grouped by reason label
    pub traps_by_reason: BTreeMap<String, u64>,
}

impl CrawlSummary {
    /// Creates a new empty crawl summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Condenses a crawl report
    ///
    /// # Arguments
    ///
    /// * `report` - The finished crawl
    /// * `config_hash` - Hash of the configuration file, if the run had one
    pub fn from_report(report: &CrawlReport, config_hash: Option<&str>) -> Self {
        let mut top_subdomains: Vec<(String, u64)> = report
            .subdomains
            .iter()
            .map(|(host, count)| (host.to_string(), count))
            .collect();
        top_subdomains.sort_by(|a, b| b.1.cmp(&a.1));
        top_subdomains.truncate(TOP_LIMIT);

        Self {
            started_at: report.started_at.to_rfc3339(),
            finished_at: report.finished_at.to_rfc3339(),
            duration_seconds: report.duration_seconds(),
            config_hash: config_hash.map(str::to_string),
            pages_fetched: report.downloads.len() as u64,
            unique_subdomains: report.subdomains.len() as u64,
            links_accepted: report.inbound_links.total(),
            unique_links_accepted: report.inbound_links.len() as u64,
            traps_total: report.traps.len() as u64,
            most_referenced: report
                .most_referenced()
                .map(|(url, count)| (url.to_string(), count)),
            top_subdomains,
            top_referenced: report
                .inbound_links
                .top(TOP_LIMIT)
                .into_iter()
                .map(|(url, count)| (url.to_string(), count))
                .collect(),
            traps_by_reason: report
                .traps
                .counts_by_reason()
                .into_iter()
                .map(|(label, count)| (label.to_string(), count))
                .collect(),
        }
    }

    /// Share of evaluated links that were rejected, as a percentage
    pub fn trap_rate(&self) -> f64 {
        let evaluated = self.links_accepted + self.traps_total;
        if evaluated == 0 {
            return 0.0;
        }
        (self.traps_total as f64 / evaluated as f64) * 100.0
    }
}

/// Trait for report writers
///
/// A writer turns a finished crawl into some persistent form.
pub trait ReportWriter {
    /// Writes the report
    ///
    /// # Returns
    ///
    /// The paths of every file written
    fn write_report(&self, report: &CrawlReport) -> OutputResult<Vec<PathBuf>>;
}
