//! On-disk page corpus
//!
//! A corpus is a directory of raw page dumps plus a JSON bookkeeping index
//! mapping each dump to the URL it was downloaded from:
//!
//! ```json
//! {
//!     "0/0": "www.ics.uci.edu",
//!     "0/1": "www.ics.uci.edu/about/index.html"
//! }
//! ```
//!
//! Keys are `<directory>/<file>` paths relative to the corpus root; values
//! are URLs with the scheme and `://` removed, as they were written when the
//! page was saved. Each value is indexed both verbatim and in the normalized
//! form the `url` crate produces for resolved links (`www.ics.uci.edu` also
//! answers to `www.ics.uci.edu/`, and `my page.html` to `my%20page.html`).

use crate::store::traits::{ContentStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use url::Url;

/// Content store backed by a local corpus directory
#[derive(Debug, Clone)]
pub struct LocalCorpus {
    root: PathBuf,
    pages: usize,

    /// Scheme-less URL, verbatim and normalized -> page file
    url_file_map: HashMap<String, PathBuf>,
}

impl LocalCorpus {
    /// Opens a corpus rooted at `root`, loading its bookkeeping index
    ///
    /// # Arguments
    ///
    /// * `root` - Directory holding the page dumps
    /// * `bookkeeping` - Index file path, relative to `root`
    ///
    /// # Returns
    ///
    /// * `Ok(LocalCorpus)` - Index loaded
    /// * `Err(StoreError)` - Index missing, unreadable, or malformed
    pub fn open(root: &Path, bookkeeping: &str) -> StoreResult<Self> {
        let index_path = root.join(bookkeeping);
        let raw = std::fs::read_to_string(&index_path).map_err(|source| StoreError::Index {
            path: index_path.clone(),
            source,
        })?;
        let index: HashMap<String, String> = serde_json::from_str(&raw)?;

        let pages = index.len();
        let mut url_file_map = HashMap::with_capacity(pages * 2);
        for (locator, url) in index {
            let (dir, file) = locator
                .split_once('/')
                .filter(|(dir, file)| !dir.is_empty() && !file.is_empty())
                .ok_or_else(|| StoreError::InvalidLocator(locator.clone()))?;
            let path = root.join(dir).join(file);
            let key = url.trim();

            // A verbatim key always beats another entry's normalized form.
            if let Some(normalized) = normalized_key(key) {
                url_file_map.entry(normalized).or_insert_with(|| path.clone());
            }
            url_file_map.insert(key.to_string(), path);
        }

        tracing::info!(
            "Loaded corpus index {} ({} pages)",
            index_path.display(),
            pages
        );

        Ok(Self {
            root: root.to_path_buf(),
            pages,
            url_file_map,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of pages in the index
    pub fn len(&self) -> usize {
        self.pages
    }

    pub fn is_empty(&self) -> bool {
        self.pages == 0
    }
}

/// Strips surrounding whitespace and the `scheme://` prefix from a URL
fn index_key(url: &str) -> &str {
    let url = url.trim();
    url.split_once("://").map_or(url, |(_, rest)| rest)
}

/// Scheme-less key as the `url` crate would serialize it
fn normalized_key(key: &str) -> Option<String> {
    let url = Url::parse(&format!("http://{}", key)).ok()?;
    String::from(url)
        .strip_prefix("http://")
        .map(str::to_string)
}

impl ContentStore for LocalCorpus {
    type Locator = PathBuf;

    fn resolve(&self, url: &str) -> StoreResult<Option<PathBuf>> {
        let key = index_key(url);
        let path = match self.url_file_map.get(key) {
            Some(path) => Some(path),
            None => normalized_key(key).and_then(|key| self.url_file_map.get(&key)),
        };
        Ok(path.cloned())
    }

    fn read(&self, locator: &PathBuf) -> StoreResult<(Vec<u8>, u64)> {
        let content = std::fs::read(locator).map_err(|source| StoreError::Read {
            path: locator.clone(),
            source,
        })?;
        let size = content.len() as u64;
        Ok((content, size))
    }
}
