//! Content store module
//!
//! This module provides the page sources the crawler fetches from:
//! - The `ContentStore` trait and its error type
//! - `LocalCorpus`, a directory of page dumps with a JSON bookkeeping index
//! - `MemoryStore`, an in-memory map of URL to content

mod corpus;
mod memory;
mod traits;

pub use corpus::LocalCorpus;
pub use memory::MemoryStore;
pub use traits::{ContentStore, StoreError, StoreResult};

use crate::config::CorpusConfig;
use std::path::Path;

/// Opens the local corpus named in the configuration
///
/// # Arguments
///
/// * `config` - The corpus section of the crawler configuration
///
/// # Returns
///
/// * `Ok(LocalCorpus)` - Corpus index loaded
/// * `Err(StoreError)` - Failed to load the bookkeeping index
pub fn open_corpus(config: &CorpusConfig) -> StoreResult<LocalCorpus> {
    LocalCorpus::open(Path::new(&config.root), &config.bookkeeping)
}
