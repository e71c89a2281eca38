//! Corpus-Crawler main entry point
//!
//! This is the command-line interface for the corpus crawler.

use anyhow::{Context, Result};
use clap::Parser;
use corpus_crawler::config::{load_config_with_hash, validate, Config};
use corpus_crawler::crawler::crawl;
use corpus_crawler::output::{
    generate_markdown_summary, print_statistics, write_analytics, CrawlSummary,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Corpus-Crawler: a trap-aware crawler over a local page corpus
///
/// Starting from the configured seeds, fetches pages from the corpus,
/// follows in-scope links while rejecting crawler traps, and writes
/// per-run analytics.
#[derive(Parser, Debug)]
#[command(name = "corpus-crawler")]
#[command(version = "1.0.0")]
#[command(about = "A trap-aware crawler over a local page corpus", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,

    /// Seed URL to start from instead of the configured seeds (repeatable)
    #[arg(long = "seed", value_name = "URL")]
    seeds: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if !cli.seeds.is_empty() {
        tracing::info!("Overriding configured seeds with {} from the command line", cli.seeds.len());
        config.crawler.seeds = cli.seeds;
        validate(&config).context("Invalid --seed URL")?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config, &config_hash, cli.quiet)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("corpus_crawler=info,warn"),
            1 => EnvFilter::new("corpus_crawler=debug,info"),
            2 => EnvFilter::new("corpus_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Corpus-Crawler Dry Run ===\n");

    println!("Corpus:");
    println!("  Root: {}", config.corpus.root);
    println!("  Bookkeeping: {}", config.corpus.bookkeeping);

    println!("\nCrawler Configuration:");
    if config.crawler.max_pages == 0 {
        println!("  Max pages: unbounded");
    } else {
        println!("  Max pages: {}", config.crawler.max_pages);
    }

    println!("\nFilter:");
    println!("  Domain scope: {}", config.filter.domain_scope);
    println!("  Max URL length: {}", config.filter.max_url_length);
    println!(
        "  Repetition threshold: {}",
        config.filter.repetition_threshold
    );

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    match &config.output.summary_path {
        Some(path) => println!("  Summary: {}", path),
        None => println!("  Summary: (none)"),
    }

    println!("\nSeeds ({}):", config.crawler.seeds.len());
    for seed in &config.crawler.seeds {
        println!("  * {}", seed);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would start crawling with {} seed URLs",
        config.crawler.seeds.len()
    );
}

/// Handles the main crawl operation
fn handle_crawl(config: &Config, config_hash: &str, quiet: bool) -> Result<()> {
    tracing::info!(
        "Crawling corpus {} from {} seed URLs",
        config.corpus.root,
        config.crawler.seeds.len()
    );

    let report = crawl(config).context("Crawl failed")?;

    let directory = Path::new(&config.output.directory);
    write_analytics(&report, directory)
        .with_context(|| format!("Failed to write analytics to {}", directory.display()))?;

    let summary = CrawlSummary::from_report(&report, Some(config_hash));
    if let Some(path) = &config.output.summary_path {
        generate_markdown_summary(&summary, Path::new(path))
            .with_context(|| format!("Failed to write summary to {}", path))?;
        tracing::info!("Summary written to {}", path);
    }

    if !quiet {
        print_statistics(&summary);
    }

    Ok(())
}
