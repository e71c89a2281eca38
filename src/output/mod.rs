//! Output module for writing crawl results
//!
//! This module handles:
//! - Writing the four plain-text analytics files
//! - Generating markdown summaries of crawl results
//! - Printing crawl statistics

mod analytics;
mod markdown;
pub mod stats;
mod traits;

pub use analytics::{
    format_downloads, format_most_referenced, format_subdomains, format_traps, AnalyticsWriter,
    DOWNLOADS_FILE, MOST_REFERENCED_FILE, SUBDOMAINS_FILE, TRAPS_FILE,
};
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::print_statistics;
pub use traits::{CrawlSummary, OutputError, OutputResult, ReportWriter, TOP_LIMIT};

use crate::state::CrawlReport;
use std::path::{Path, PathBuf};

/// Writes the analytics files for a finished crawl
///
/// # Arguments
///
/// * `report` - The finished crawl
/// * `directory` - Directory to write into, created if missing
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the files written
/// * `Err(OutputError)` - Failed to create the directory or write a file
pub fn write_analytics(report: &CrawlReport, directory: &Path) -> OutputResult<Vec<PathBuf>> {
    let written = AnalyticsWriter::new(directory).write_report(report)?;
    tracing::info!(
        "Wrote {} analytics files to {}",
        written.len(),
        directory.display()
    );
    Ok(written)
}
