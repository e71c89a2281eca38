//! Corpus-Crawler: a trap-aware crawl core over a fixed local corpus
//!
//! This crate drains a frontier of URLs, fetches each page from a content
//! store, extracts outbound links, filters them for validity and crawler
//! traps, and reports per-run analytics.

pub mod config;
pub mod crawler;
pub mod filter;
pub mod output;
pub mod state;
pub mod store;
pub mod url;

use thiserror::Error;

/// Main error type for crawler operations
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Content store error: {0}")]
    Store(#[from] store::StoreError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("URL is not absolute: {0}")]
    NotAbsolute(String),
}

/// Result type alias for crawler operations
pub type Result<T> = std::result::Result<T, CrawlerError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, FetchResult, Frontier, MemoryFrontier};
pub use filter::{looks_like_trap, RejectReason, TrapKind, ValidityFilter, Verdict};
pub use state::CrawlReport;
pub use store::{ContentStore, LocalCorpus, MemoryStore};
