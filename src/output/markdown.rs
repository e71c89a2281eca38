//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a crawl run,
//! including totals, the busiest subdomains, and rejection counts.

use crate::output::analytics::write_file;
use crate::output::traits::{CrawlSummary, OutputResult};
use std::path::Path;

/// Generates a markdown summary file
///
/// # Arguments
///
/// * `summary` - The crawl summary data
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(OutputError)` - Failed to write summary
pub fn generate_markdown_summary(summary: &CrawlSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);
    write_file(output_path, &markdown)
}

/// Formats a crawl summary as markdown
pub fn format_markdown_summary(summary: &CrawlSummary) -> String {
    let mut md = String::new();

    md.push_str("# Corpus Crawl Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", summary.started_at));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at));
    md.push_str(&format!(
        "- **Duration**: {} seconds ({:.2} minutes)\n",
        summary.duration_seconds,
        summary.duration_seconds as f64 / 60.0
    ));
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Pages Fetched**: {}\n", summary.pages_fetched));
    md.push_str(&format!(
        "- **Unique Subdomains**: {}\n",
        summary.unique_subdomains
    ));
    md.push_str(&format!(
        "- **Links Accepted**: {} ({} unique)\n",
        summary.links_accepted, summary.unique_links_accepted
    ));
    md.push_str(&format!("- **Links Rejected**: {}\n", summary.traps_total));
    md.push_str(&format!("- **Trap Rate**: {:.2}%\n", summary.trap_rate()));
    match &summary.most_referenced {
        Some((url, count)) => md.push_str(&format!(
            "- **Most Referenced**: {} ({} references)\n\n",
            url, count
        )),
        None => md.push_str("- **Most Referenced**: none\n\n"),
    }

    if !summary.top_subdomains.is_empty() {
        md.push_str(&format!(
            "## Top {} Subdomains\n\n",
            summary.top_subdomains.len()
        ));
        md.push_str("| Subdomain | Pages |\n");
        md.push_str("|-----------|-------|\n");
        for (host, count) in &summary.top_subdomains {
            md.push_str(&format!("| {} | {} |\n", host, count));
        }
        md.push('\n');
    }

    if !summary.top_referenced.is_empty() {
        md.push_str(&format!(
            "## Top {} Referenced URLs\n\n",
            summary.top_referenced.len()
        ));
        md.push_str("| URL | References |\n");
        md.push_str("|-----|------------|\n");
        for (url, count) in &summary.top_referenced {
            md.push_str(&format!("| {} | {} |\n", url, count));
        }
        md.push('\n');
    }

    if !summary.traps_by_reason.is_empty() {
        md.push_str("## Rejections by Reason\n\n");
        md.push_str("| Reason | Count |\n");
        md.push_str("|--------|-------|\n");
        for (reason, count) in &summary.traps_by_reason {
            md.push_str(&format!("| {} | {} |\n", reason, count));
        }
        md.push('\n');
    }

    md
}
