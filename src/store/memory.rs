use crate::store::traits::{ContentStore, StoreResult};
use std::collections::HashMap;

/// In-memory content store keyed by exact URL
///
/// Useful for embedding the crawler over pages that are already in memory,
/// and for tests.
///
/// # Example
///
/// ```
/// use corpus_crawler::{ContentStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.insert("http://www.ics.uci.edu/", "<a href=\"/about\">About</a>");
/// assert!(store.contains("http://www.ics.uci.edu/").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pages: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a page
    pub fn insert(&mut self, url: &str, content: impl Into<Vec<u8>>) {
        self.pages.insert(url.trim().to_string(), content.into());
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with_page(mut self, url: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert(url, content);
        self
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl ContentStore for MemoryStore {
    type Locator = String;

    fn resolve(&self, url: &str) -> StoreResult<Option<String>> {
        let key = url.trim();
        Ok(self.pages.contains_key(key).then(|| key.to_string()))
    }

    fn read(&self, locator: &String) -> StoreResult<(Vec<u8>, u64)> {
        let content = self.pages.get(locator).cloned().unwrap_or_default();
        let size = content.len() as u64;
        Ok((content, size))
    }
}
