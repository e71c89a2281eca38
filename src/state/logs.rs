use crate::filter::RejectReason;
use std::collections::BTreeMap;

/// URLs fetched this run, in fetch order
#[derive(Debug, Clone, Default)]
pub struct DownloadLog {
    urls: Vec<String>,
}

impl DownloadLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, url: &str) {
        self.urls.push(url.to_string());
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// A single rejected link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapEntry {
    pub url: String,
    pub reason: RejectReason,
}

/// Links rejected by the validity filter, in rejection order
///
/// The same URL is recorded again each time it is rejected.
#[derive(Debug, Clone, Default)]
pub struct TrapLog {
    entries: Vec<TrapEntry>,
}

impl TrapLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, url: &str, reason: RejectReason) {
        self.entries.push(TrapEntry {
            url: url.to_string(),
            reason,
        });
    }

    pub fn entries(&self) -> &[TrapEntry] {
        &self.entries
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.url.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rejection counts grouped by reason label, sorted by label
    pub fn counts_by_reason(&self) -> BTreeMap<&'static str, u64> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.reason.label()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TrapKind;

    #[test]
    fn test_download_log_keeps_order() {
        let mut log = DownloadLog::new();
        log.record("http://b.ics.uci.edu/");
        log.record("http://a.ics.uci.edu/");

        assert_eq!(
            log.urls(),
            ["http://b.ics.uci.edu/", "http://a.ics.uci.edu/"]
        );
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_trap_log_keeps_duplicates() {
        let mut log = TrapLog::new();
        log.record("mailto:staff@ics.uci.edu", RejectReason::Scheme);
        log.record("mailto:staff@ics.uci.edu", RejectReason::Scheme);

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.urls().collect::<Vec<_>>(),
            vec!["mailto:staff@ics.uci.edu", "mailto:staff@ics.uci.edu"]
        );
    }

    #[test]
    fn test_counts_by_reason() {
        let mut log = TrapLog::new();
        log.record("mailto:a@uci.edu", RejectReason::Scheme);
        log.record("ftp://ics.uci.edu/", RejectReason::Scheme);
        log.record(
            "http://www.ics.uci.edu/?year=2020",
            RejectReason::Trap(TrapKind::Calendar("year".to_string())),
        );

        let counts = log.counts_by_reason();
        assert_eq!(counts.get("scheme"), Some(&2));
        assert_eq!(counts.get("trap"), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
