//! URL handling module
//!
//! This module provides host extraction, crawl-scope matching,
//! relative-reference resolution and URL normalization.

mod domain;
mod matcher;
mod resolve;

// Re-export main functions
pub use domain::extract_domain;
pub use matcher::matches_scope;
pub use resolve::{normalize_url, parse_base, resolve_link};
