//! Content store traits and error types
//!
//! This module defines the trait interface for content backends and
//! associated error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading from a content store
///
/// A URL the store has no mapping for is not an error; `resolve` returns
/// `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read page {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read bookkeeping index {path}: {source}")]
    Index {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed bookkeeping index: {0}")]
    Bookkeeping(#[from] serde_json::Error),

    #[error("Invalid locator in bookkeeping index: {0}")]
    InvalidLocator(String),

    #[error("Content store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for content store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A source of page content keyed by URL
///
/// Stands in for live HTTP: `resolve` answers "does this page exist" and
/// `read` returns its bytes. Both must be free of side effects, so repeated
/// lookups of the same URL give the same answer.
pub trait ContentStore {
    /// Where a resolved page lives inside the store
    type Locator;

    /// Maps a URL to its locator, or `None` when the store has no such page
    fn resolve(&self, url: &str) -> StoreResult<Option<Self::Locator>>;

    /// Reads a resolved page, returning its bytes and byte count
    fn read(&self, locator: &Self::Locator) -> StoreResult<(Vec<u8>, u64)>;

    /// Returns true if the store can serve the URL
    fn contains(&self, url: &str) -> StoreResult<bool> {
        Ok(self.resolve(url)?.is_some())
    }
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    type Locator = S::Locator;

    fn resolve(&self, url: &str) -> StoreResult<Option<Self::Locator>> {
        (**self).resolve(url)
    }

    fn read(&self, locator: &Self::Locator) -> StoreResult<(Vec<u8>, u64)> {
        (**self).read(locator)
    }
}
