use std::collections::HashMap;

/// A counter that remembers the order keys were first seen in
#[derive(Debug, Clone, Default)]
struct OrderedCounter {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl OrderedCounter {
    fn increment(&mut self, key: &str) -> u64 {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.entries.push((key.to_string(), 0));
                self.index.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[slot];
        entry.1 += 1;
        entry.1
    }

    fn get(&self, key: &str) -> u64 {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

/// Pages visited per host
///
/// Iteration yields hosts in the order they were first visited.
#[derive(Debug, Clone, Default)]
pub struct SubdomainCounter {
    counts: OrderedCounter,
}

impl SubdomainCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one visit and returns the new count for the host
    pub fn record(&mut self, host: &str) -> u64 {
        self.counts.increment(host)
    }

    pub fn count(&self, host: &str) -> u64 {
        self.counts.get(host)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter()
    }

    /// Number of distinct hosts
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.len() == 0
    }

    /// Total visits across all hosts
    pub fn total(&self) -> u64 {
        self.counts.total()
    }
}

/// How often each URL was accepted as an outbound link
#[derive(Debug, Clone, Default)]
pub struct InboundLinkCounter {
    counts: OrderedCounter,
}

impl InboundLinkCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one accepted reference and returns the new count for the URL
    pub fn record(&mut self, url: &str) -> u64 {
        self.counts.increment(url)
    }

    pub fn count(&self, url: &str) -> u64 {
        self.counts.get(url)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.len() == 0
    }

    /// Total accepted references across all URLs
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// The URL with the most inbound references
    ///
    /// Returns `None` when no link was ever accepted. Among URLs sharing the
    /// highest count, the one discovered first wins.
    pub fn most_referenced(&self) -> Option<(&str, u64)> {
        self.iter().fold(None, |best, (url, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((url, count)),
        })
    }

    /// The `limit` most referenced URLs, highest count first, ties in discovery order
    pub fn top(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        // sort_by is stable, so equal counts keep discovery order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}
