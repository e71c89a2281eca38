use crate::config::types::{Config, CorpusConfig, CrawlerConfig, FilterConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_corpus_config(&config.corpus)?;
    validate_crawler_config(&config.crawler)?;
    validate_filter_config(&config.filter)?;
    validate_output_config(&config.output)?;
    Ok(())
}

fn validate_corpus_config(config: &CorpusConfig) -> Result<(), ConfigError> {
    if config.root.trim().is_empty() {
        return Err(ConfigError::Validation(
            "corpus root cannot be empty".to_string(),
        ));
    }

    if config.bookkeeping.trim().is_empty() {
        return Err(ConfigError::Validation(
            "corpus bookkeeping file cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed URL is required".to_string(),
        ));
    }

    for seed in &config.seeds {
        validate_seed(seed)?;
    }

    Ok(())
}

/// A seed must be an absolute http(s) URL
fn validate_seed(seed: &str) -> Result<(), ConfigError> {
    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Seed URL '{}' must use the http or https scheme",
            seed
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(())
}

fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    if config.domain_scope.is_empty() {
        return Err(ConfigError::Validation(
            "domain_scope cannot be empty".to_string(),
        ));
    }

    if config.max_url_length < 1 {
        return Err(ConfigError::Validation(format!(
            "max_url_length must be >= 1, got {}",
            config.max_url_length
        )));
    }

    if config.repetition_threshold < 1 {
        return Err(ConfigError::Validation(format!(
            "repetition_threshold must be >= 1, got {}",
            config.repetition_threshold
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if matches!(&config.summary_path, Some(path) if path.is_empty()) {
        return Err(ConfigError::Validation(
            "summary_path cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}
