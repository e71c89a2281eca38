//! Configuration module for the crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use corpus_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawl starts from {} seeds", config.crawler.seeds.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CorpusConfig, CrawlerConfig, FilterConfig, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
