//! Analytics artifacts
//!
//! Four plain-text files written at the end of a run:
//!
//! | File | Contents |
//! |------|----------|
//! | `analytic_1.txt` | pages fetched per subdomain, first-seen order |
//! | `analytic_2.txt` | the most referenced accepted URL and its count |
//! | `analytic_3_part_A.txt` | fetched URLs, fetch order |
//! | `analytic_3_part_B.txt` | rejected URLs, rejection order |

use crate::output::traits::{OutputError, OutputResult, ReportWriter};
use crate::state::CrawlReport;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub const SUBDOMAINS_FILE: &str = "analytic_1.txt";
pub const MOST_REFERENCED_FILE: &str = "analytic_2.txt";
pub const DOWNLOADS_FILE: &str = "analytic_3_part_A.txt";
pub const TRAPS_FILE: &str = "analytic_3_part_B.txt";

/// One line per subdomain: host padded to 30 columns, a space, the count
pub fn format_subdomains(report: &CrawlReport) -> String {
    let mut out = String::new();
    for (host, count) in report.subdomains.iter() {
        let _ = writeln!(out, "{:30} {}", host, count);
    }
    out
}

/// `<url>  <count>`, or `none  0` when no link was accepted
pub fn format_most_referenced(report: &CrawlReport) -> String {
    let (url, count) = report.most_referenced().unwrap_or(("none", 0));
    format!("{}  {}\n", url, count)
}

pub fn format_downloads(report: &CrawlReport) -> String {
    lines(report.downloads.urls().iter().map(String::as_str))
}

pub fn format_traps(report: &CrawlReport) -> String {
    lines(report.traps.urls())
}

fn lines<'a>(urls: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for url in urls {
        out.push_str(url);
        out.push('\n');
    }
    out
}

/// Writes the four analytics files into a directory
#[derive(Debug, Clone)]
pub struct AnalyticsWriter {
    directory: PathBuf,
}

impl AnalyticsWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ReportWriter for AnalyticsWriter {
    fn write_report(&self, report: &CrawlReport) -> OutputResult<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.directory).map_err(|source| OutputError::CreateDir {
            path: self.directory.clone(),
            source,
        })?;

        let artifacts = [
            (SUBDOMAINS_FILE, format_subdomains(report)),
            (MOST_REFERENCED_FILE, format_most_referenced(report)),
            (DOWNLOADS_FILE, format_downloads(report)),
            (TRAPS_FILE, format_traps(report)),
        ];

        let mut written = Vec::with_capacity(artifacts.len());
        for (name, contents) in artifacts {
            let path = self.directory.join(name);
            write_file(&path, &contents)?;
            tracing::debug!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

pub(crate) fn write_file(path: &Path, contents: &str) -> OutputResult<()> {
    std::fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures::sample_report;
    use crate::state::InboundLinkCounter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_subdomains() {
        let text = format_subdomains(&sample_report());
        assert_eq!(
            text,
            format!(
                "{:30} 1\n{:30} 2\n",
                "www.ics.uci.edu", "vision.ics.uci.edu"
            )
        );
        assert!(text.starts_with("www.ics.uci.edu                1\n"));
    }

    #[test]
    fn test_long_subdomain_is_not_truncated() {
        let mut report = sample_report();
        let host = "a-very-long-research-group-name.ics.uci.edu";
        report.subdomains.record(host);

        let text = format_subdomains(&report);
        assert!(text.ends_with(&format!("{} 1\n", host)));
    }

    #[test]
    fn test_format_most_referenced() {
        assert_eq!(
            format_most_referenced(&sample_report()),
            "http://vision.ics.uci.edu/  2\n"
        );
    }

    #[test]
    fn test_format_most_referenced_empty() {
        let mut report = sample_report();
        report.inbound_links = InboundLinkCounter::new();
        assert_eq!(format_most_referenced(&report), "none  0\n");
    }

    #[test]
    fn test_format_logs() {
        let report = sample_report();
        assert_eq!(
            format_downloads(&report),
            "http://www.ics.uci.edu\nhttp://vision.ics.uci.edu/\nhttp://vision.ics.uci.edu/people\n"
        );
        assert_eq!(format_traps(&report), "mailto:staff@ics.uci.edu\n");
    }

    #[test]
    fn test_write_report() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("analytics");
        let writer = AnalyticsWriter::new(&out);

        let written = writer.write_report(&sample_report()).unwrap();

        assert_eq!(written.len(), 4);
        assert_eq!(written[0], out.join(SUBDOMAINS_FILE));
        assert_eq!(
            fs::read_to_string(out.join(TRAPS_FILE)).unwrap(),
            "mailto:staff@ics.uci.edu\n"
        );
        assert_eq!(
            fs::read_to_string(out.join(MOST_REFERENCED_FILE)).unwrap(),
            "http://vision.ics.uci.edu/  2\n"
        );
    }

    #[test]
    fn test_write_report_into_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let writer = AnalyticsWriter::new(file.path());

        assert!(matches!(
            writer.write_report(&sample_report()),
            Err(OutputError::CreateDir { .. })
        ));
    }
}
