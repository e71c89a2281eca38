//! Page fetcher
//!
//! Retrieves raw page content from a content store. There are no retries and
//! no timeouts: a URL the store cannot resolve is an empty result, and any
//! other store failure is returned to the caller.

use crate::store::{ContentStore, StoreResult};

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// The URL that was requested
    pub url: String,

    /// Raw page bytes, or `None` when the store has no such page
    pub content: Option<Vec<u8>>,

    /// Exact byte length of `content`, 0 when absent
    pub size: u64,
}

impl FetchResult {
    /// A result for a URL the store could not resolve
    pub fn not_found(url: &str) -> Self {
        Self {
            url: url.to_string(),
            content: None,
            size: 0,
        }
    }

    /// Returns true if the page was retrieved
    pub fn is_found(&self) -> bool {
        self.content.is_some()
    }
}

/// Fetches a URL from a content store
///
/// # Arguments
///
/// * `store` - The content store to read from
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchResult)` - Page content, or an empty result if the store has no
///   mapping for the URL
/// * `Err(StoreError)` - The store resolved the URL but could not read it
///
/// # Example
///
/// ```
/// use corpus_crawler::crawler::fetch_url;
/// use corpus_crawler::MemoryStore;
///
/// let store = MemoryStore::new().with_page("http://www.ics.uci.edu/", "<html></html>");
///
/// let found = fetch_url(&store, "http://www.ics.uci.edu/").unwrap();
/// assert_eq!(found.size, 13);
///
/// let missing = fetch_url(&store, "http://www.ics.uci.edu/missing").unwrap();
/// assert!(missing.content.is_none());
/// ```
pub fn fetch_url<S: ContentStore>(store: &S, url: &str) -> StoreResult<FetchResult> {
    let locator = match store.resolve(url)? {
        Some(locator) => locator,
        None => {
            tracing::debug!("No stored page for {}", url);
            return Ok(FetchResult::not_found(url));
        }
    };

    let (content, size) = store.read(&locator)?;
    Ok(FetchResult {
        url: url.to_string(),
        content: Some(content),
        size,
    })
}
