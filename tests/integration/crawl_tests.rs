//! Integration tests for the crawler
//!
//! These tests build small page corpora in temporary directories and run
//! the full crawl cycle end-to-end.

use corpus_crawler::config::{load_config, FilterConfig};
use corpus_crawler::crawler::{crawl, extract_links, fetch_url};
use corpus_crawler::output::{
    write_analytics, DOWNLOADS_FILE, MOST_REFERENCED_FILE, SUBDOMAINS_FILE, TRAPS_FILE,
};
use corpus_crawler::{Coordinator, Frontier, LocalCorpus, MemoryFrontier, RejectReason};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Writes a corpus: one file per page plus the bookkeeping index
///
/// `pages` holds scheme-less URLs and their HTML.
fn create_corpus(root: &Path, pages: &[(&str, &str)]) {
    let mut index = serde_json::Map::new();
    for (i, (url, html)) in pages.iter().enumerate() {
        let dir = (i / 10).to_string();
        let file = (i % 10).to_string();
        fs::create_dir_all(root.join(&dir)).unwrap();
        fs::write(root.join(&dir).join(&file), html).unwrap();
        index.insert(format!("{}/{}", dir, file), (*url).into());
    }
    fs::write(
        root.join("bookkeeping.json"),
        serde_json::to_string_pretty(&index).unwrap(),
    )
    .unwrap();
}

fn write_config(dir: &Path, corpus: &Path, output: &Path, summary: Option<&Path>) -> PathBuf {
    let summary_line = summary
        .map(|path| format!("summary-path = {:?}\n", path.display().to_string()))
        .unwrap_or_default();
    let contents = format!(
        r#"
[corpus]
root = {:?}

[crawler]
seeds = ["http://www.ics.uci.edu/"]

[output]
directory = {:?}
{}"#,
        corpus.display().to_string(),
        output.display().to_string(),
        summary_line
    );
    let path = dir.join("crawler.toml");
    fs::write(&path, contents).unwrap();
    path
}

fn site_pages() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "www.ics.uci.edu/",
            r#"<html><body>
            <a href="/about/">About</a>
            <a href="http://vision.ics.uci.edu/">Vision</a>
            <a href="/pub/paper.pdf">Paper</a>
            <a href="mailto:staff@ics.uci.edu">Contact</a>
            <a href="/not-in-corpus">Gone</a>
            </body></html>"#,
        ),
        (
            "www.ics.uci.edu/about/",
            r#"<a href="/">Home</a><a href="http://vision.ics.uci.edu/">Vision</a>"#,
        ),
        (
            "vision.ics.uci.edu/",
            r#"<a href="http://vision.ics.uci.edu/events?year=2019">Events</a>
            <a href="http://www.ics.uci.edu/about/">About ICS</a>"#,
        ),
        ("vision.ics.uci.edu/events?year=2019", "<p>calendar</p>"),
        ("www.ics.uci.edu/pub/paper.pdf", "%PDF-1.4"),
    ]
}

#[test]
fn test_seed_page_partitions_links() {
    let dir = TempDir::new().unwrap();
    create_corpus(dir.path(), &site_pages());
    let corpus = LocalCorpus::open(dir.path(), "bookkeeping.json").unwrap();

    let mut coordinator = Coordinator::new(
        corpus,
        MemoryFrontier::with_seeds(["http://www.ics.uci.edu/"]),
        FilterConfig::default(),
    );
    assert!(coordinator.step().unwrap());

    // The two in-corpus pages are queued and the in-corpus pdf is the only
    // trap. Links the corpus cannot resolve are dropped without a trace.
    assert_eq!(
        coordinator.frontier().pending().collect::<Vec<_>>(),
        ["http://www.ics.uci.edu/about/", "http://vision.ics.uci.edu/"]
    );
    assert_eq!(coordinator.frontier().fetched_count(), 1);
    assert_eq!(
        coordinator.filter().trap_log().urls().collect::<Vec<_>>(),
        ["http://www.ics.uci.edu/pub/paper.pdf"]
    );
    assert_eq!(coordinator.downloads().urls(), ["http://www.ics.uci.edu/"]);
}

#[test]
fn test_full_crawl_over_corpus() {
    let dir = TempDir::new().unwrap();
    let corpus_dir = dir.path().join("corpus");
    create_corpus(&corpus_dir, &site_pages());
    let config_path = write_config(dir.path(), &corpus_dir, &dir.path().join("out"), None);

    let config = load_config(&config_path).unwrap();
    let report = crawl(&config).unwrap();

    assert_eq!(
        report.downloads.urls(),
        [
            "http://www.ics.uci.edu/",
            "http://www.ics.uci.edu/about/",
            "http://vision.ics.uci.edu/",
        ]
    );
    assert_eq!(
        report.subdomains.iter().collect::<Vec<_>>(),
        [("www.ics.uci.edu", 2), ("vision.ics.uci.edu", 1)]
    );

    // about/ is referenced by the seed and by vision; vision by the seed and
    // by about/. about/ was discovered first.
    assert_eq!(
        report.most_referenced(),
        Some(("http://www.ics.uci.edu/about/", 2))
    );

    let traps: Vec<_> = report.traps.entries().iter().collect();
    assert_eq!(traps.len(), 2);
    assert_eq!(traps[0].reason, RejectReason::BlockedExtension("pdf"));
    assert_eq!(traps[1].url, "http://vision.ics.uci.edu/events?year=2019");
    assert!(matches!(traps[1].reason, RejectReason::Trap(_)));
}

#[test]
fn test_trap_linked_four_times() {
    let trap = "http://www.ics.uci.edu/a/a/a/a/page";
    let anchor = format!(r#"<a href="{}">loop</a>"#, trap);
    let seed_html = anchor.repeat(4);

    let dir = TempDir::new().unwrap();
    create_corpus(
        dir.path(),
        &[
            ("www.ics.uci.edu/", seed_html.as_str()),
            ("www.ics.uci.edu/a/a/a/a/page", "<p>deep</p>"),
        ],
    );
    let corpus = LocalCorpus::open(dir.path(), "bookkeeping.json").unwrap();

    let report = Coordinator::new(
        corpus,
        MemoryFrontier::with_seeds(["http://www.ics.uci.edu/"]),
        FilterConfig::default(),
    )
    .run()
    .unwrap();

    assert_eq!(report.traps.len(), 4);
    assert!(report.traps.urls().all(|url| url == trap));
    assert_eq!(report.downloads.len(), 1);
    assert!(report.inbound_links.is_empty());
}

#[test]
fn test_corpus_keys_match_resolved_links() {
    let dir = TempDir::new().unwrap();
    create_corpus(
        dir.path(),
        &[
            (
                "www.ics.uci.edu",
                r#"<a href="/about/index.html">About</a><a href="/my page.html">Mine</a>"#,
            ),
            (
                "www.ics.uci.edu/about/index.html",
                r#"<a href="http://www.ics.uci.edu">Home</a>"#,
            ),
            ("www.ics.uci.edu/my page.html", "<p>mine</p>"),
        ],
    );
    let corpus = LocalCorpus::open(dir.path(), "bookkeeping.json").unwrap();

    let report = Coordinator::new(
        corpus,
        MemoryFrontier::with_seeds(["http://www.ics.uci.edu"]),
        FilterConfig::default(),
    )
    .run()
    .unwrap();

    assert_eq!(
        report.downloads.urls(),
        [
            "http://www.ics.uci.edu/",
            "http://www.ics.uci.edu/about/index.html",
            "http://www.ics.uci.edu/my%20page.html",
        ]
    );
    assert_eq!(report.inbound_links.count("http://www.ics.uci.edu/"), 1);
    assert_eq!(
        report.inbound_links.count("http://www.ics.uci.edu/my%20page.html"),
        1
    );
    assert!(report.traps.is_empty());
}

#[test]
fn test_fetch_absent_url() {
    let dir = TempDir::new().unwrap();
    create_corpus(dir.path(), &site_pages());
    let corpus = LocalCorpus::open(dir.path(), "bookkeeping.json").unwrap();

    let result = fetch_url(&corpus, "http://www.ics.uci.edu/not-in-corpus").unwrap();
    assert!(result.content.is_none());
    assert_eq!(result.size, 0);
    assert!(extract_links(&result).is_empty());
}

#[test]
fn test_missing_page_file_aborts_crawl() {
    let dir = TempDir::new().unwrap();
    let corpus_dir = dir.path().join("corpus");
    create_corpus(&corpus_dir, &site_pages());
    // Index entry for about/ points at a file that no longer exists
    fs::remove_file(corpus_dir.join("0").join("1")).unwrap();
    let config_path = write_config(dir.path(), &corpus_dir, &dir.path().join("out"), None);

    let config = load_config(&config_path).unwrap();
    assert!(matches!(
        crawl(&config),
        Err(corpus_crawler::CrawlerError::Store(_))
    ));
}

#[test]
fn test_crawl_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let corpus_dir = dir.path().join("corpus");
    create_corpus(&corpus_dir, &site_pages());
    let config_path = write_config(dir.path(), &corpus_dir, &dir.path().join("out"), None);

    let mut config = load_config(&config_path).unwrap();
    config.crawler.seeds.clear();
    assert!(matches!(
        crawl(&config),
        Err(corpus_crawler::CrawlerError::Config(_))
    ));
}

#[test]
fn test_analytics_artifacts() {
    let dir = TempDir::new().unwrap();
    let corpus_dir = dir.path().join("corpus");
    let out = dir.path().join("out");
    create_corpus(&corpus_dir, &site_pages());
    let config_path = write_config(dir.path(), &corpus_dir, &out, None);

    let report = crawl(&load_config(&config_path).unwrap()).unwrap();
    write_analytics(&report, &out).unwrap();

    assert_eq!(
        fs::read_to_string(out.join(SUBDOMAINS_FILE)).unwrap(),
        format!("{:30} 2\n{:30} 1\n", "www.ics.uci.edu", "vision.ics.uci.edu")
    );
    assert_eq!(
        fs::read_to_string(out.join(MOST_REFERENCED_FILE)).unwrap(),
        "http://www.ics.uci.edu/about/  2\n"
    );
    assert_eq!(
        fs::read_to_string(out.join(DOWNLOADS_FILE)).unwrap(),
        "http://www.ics.uci.edu/\nhttp://www.ics.uci.edu/about/\nhttp://vision.ics.uci.edu/\n"
    );
    assert_eq!(
        fs::read_to_string(out.join(TRAPS_FILE)).unwrap(),
        "http://www.ics.uci.edu/pub/paper.pdf\nhttp://vision.ics.uci.edu/events?year=2019\n"
    );
}

#[test]
fn test_cli_end_to_end() {
    let dir = TempDir::new().unwrap();
    let corpus_dir = dir.path().join("corpus");
    let out = dir.path().join("out");
    let summary = dir.path().join("summary.md");
    create_corpus(&corpus_dir, &site_pages());
    let config_path = write_config(dir.path(), &corpus_dir, &out, Some(&summary));

    let status = Command::new(env!("CARGO_BIN_EXE_corpus-crawler"))
        .arg(&config_path)
        .arg("--quiet")
        .status()
        .unwrap();
    assert!(status.success());

    for name in [SUBDOMAINS_FILE, MOST_REFERENCED_FILE, DOWNLOADS_FILE, TRAPS_FILE] {
        assert!(out.join(name).is_file(), "{} missing", name);
    }
    let markdown = fs::read_to_string(&summary).unwrap();
    assert!(markdown.contains("Pages Fetched**: 3"));
}

#[test]
fn test_cli_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let corpus_dir = dir.path().join("corpus");
    let out = dir.path().join("out");
    create_corpus(&corpus_dir, &site_pages());
    let config_path = write_config(dir.path(), &corpus_dir, &out, None);

    let output = Command::new(env!("CARGO_BIN_EXE_corpus-crawler"))
        .arg(&config_path)
        .arg("--dry-run")
        .arg("--seed")
        .arg("http://vision.ics.uci.edu/")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("* http://vision.ics.uci.edu/"));
    assert!(!stdout.contains("* http://www.ics.uci.edu/"));
    assert!(!out.exists());
}

#[test]
fn test_cli_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("crawler.toml");
    fs::write(&config_path, "[corpus]\nroot = \"x\"\n\n[crawler]\nseeds = []\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_corpus-crawler"))
        .arg(&config_path)
        .arg("--quiet")
        .status()
        .unwrap();
    assert!(!status.success());
}
