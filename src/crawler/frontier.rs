//! Crawl frontier
//!
//! The frontier owns ordering and deduplication of URLs awaiting a fetch.
//! A URL that was ever added is never queued again, even after it has been
//! fetched.

use crate::url::normalize_url;
use std::collections::{HashSet, VecDeque};

/// Queue of URLs awaiting crawl
pub trait Frontier {
    /// Returns true if at least one URL is waiting
    fn has_next(&self) -> bool;

    /// Dequeues the next URL and counts it as fetched
    fn next_url(&mut self) -> Option<String>;

    /// Queues a URL unless it has been seen before
    ///
    /// Returns true if the URL was newly queued.
    fn add_url(&mut self, url: &str) -> bool;

    /// Number of URLs handed out by `next_url`
    fn fetched_count(&self) -> usize;

    /// Number of URLs still waiting
    fn pending_count(&self) -> usize;
}

/// In-memory FIFO frontier with set-based deduplication
///
/// URLs are queued in normalized form, so `http://www.ics.uci.edu` and
/// `http://www.ics.uci.edu/` are the same entry. Strings that do not parse
/// as URLs are compared as given.
///
/// # Example
///
/// ```
/// use corpus_crawler::{Frontier, MemoryFrontier};
///
/// let mut frontier = MemoryFrontier::with_seeds(["http://www.ics.uci.edu/"]);
/// assert!(!frontier.add_url("http://www.ics.uci.edu/"));
/// assert_eq!(frontier.next_url().as_deref(), Some("http://www.ics.uci.edu/"));
/// assert!(!frontier.has_next());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFrontier {
    queue: VecDeque<String>,
    seen: HashSet<String>,
    fetched: usize,
}

impl MemoryFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier pre-loaded with seed URLs, in order
    pub fn with_seeds<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frontier = Self::new();
        for seed in seeds {
            frontier.add_url(seed.as_ref());
        }
        frontier
    }

    /// Returns true if the URL was ever queued
    pub fn has_seen(&self, url: &str) -> bool {
        self.seen.contains(&normalize_url(url))
    }

    /// URLs still waiting, in dequeue order
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }
}

impl Frontier for MemoryFrontier {
    fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    fn next_url(&mut self) -> Option<String> {
        let url = self.queue.pop_front()?;
        self.fetched += 1;
        Some(url)
    }

    fn add_url(&mut self, url: &str) -> bool {
        let url = normalize_url(url);
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    fn fetched_count(&self) -> usize {
        self.fetched
    }

    fn pending_count(&self) -> usize {
        self.queue.len()
    }
}
