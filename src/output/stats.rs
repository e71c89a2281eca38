//! Statistics display
//!
//! Prints the outcome of a crawl run to stdout.

use crate::output::traits::CrawlSummary;

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `summary` - The summary to display
pub fn print_statistics(summary: &CrawlSummary) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages fetched: {}", summary.pages_fetched);
    println!("  Unique subdomains: {}", summary.unique_subdomains);
    println!(
        "  Links accepted: {} ({} unique)",
        summary.links_accepted, summary.unique_links_accepted
    );
    println!("  Links rejected: {}", summary.traps_total);
    println!("  Duration: {}s", summary.duration_seconds);
    println!();

    if !summary.top_subdomains.is_empty() {
        println!("Top Subdomains:");
        for (host, count) in summary.top_subdomains.iter().take(10) {
            println!("  {:30} {}", host, count);
        }
        println!();
    }

    if !summary.traps_by_reason.is_empty() {
        println!("Rejections by Reason:");
        let mut reason_counts: Vec<_> = summary.traps_by_reason.iter().collect();
        reason_counts.sort_by(|a, b| b.1.cmp(a.1));

        for (reason, count) in reason_counts {
            let percentage = if summary.traps_total > 0 {
                (*count as f64 / summary.traps_total as f64) * 100.0
            } else {
                0.0
            };
            println!("  {}: {} ({:.1}%)", reason, count, percentage);
        }
        println!();
    }

    match &summary.most_referenced {
        Some((url, count)) => println!("Most referenced: {} ({} references)", url, count),
        None => println!("Most referenced: none"),
    }

    println!(
        "Trap Rate: {:.1}% ({} of {} evaluated links rejected)",
        summary.trap_rate(),
        summary.traps_total,
        summary.links_accepted + summary.traps_total
    );
}
