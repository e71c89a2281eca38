use serde::Deserialize;

/// Main configuration structure for the crawler
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Location of the local page corpus
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// Directory holding the raw pages
    pub root: String,

    /// Bookkeeping index file, relative to `root`
    #[serde(default = "default_bookkeeping")]
    pub bookkeeping: String,
}

/// Crawl loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URLs the frontier starts with
    pub seeds: Vec<String>,

    /// Stop after this many fetched pages (0 = run until the frontier drains)
    #[serde(rename = "max-pages", default)]
    pub max_pages: usize,
}

/// Link validity thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Substring a host must contain to be in scope
    #[serde(rename = "domain-scope", default = "default_domain_scope")]
    pub domain_scope: String,

    /// Longest URL, in characters, that is still crawlable
    #[serde(rename = "max-url-length", default = "default_max_url_length")]
    pub max_url_length: usize,

    /// A URL token seen more often than this marks a trap
    #[serde(
        rename = "repetition-threshold",
        default = "default_repetition_threshold"
    )]
    pub repetition_threshold: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            domain_scope: default_domain_scope(),
            max_url_length: default_max_url_length(),
            repetition_threshold: default_repetition_threshold(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the analytics files are written into
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Path to the markdown summary file (skipped when unset)
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            summary_path: None,
        }
    }
}

fn default_bookkeeping() -> String {
    "bookkeeping.json".to_string()
}

fn default_domain_scope() -> String {
    ".ics.uci.edu".to_string()
}

fn default_max_url_length() -> usize {
    110
}

fn default_repetition_threshold() -> usize {
    3
}

fn default_output_directory() -> String {
    ".".to_string()
}
