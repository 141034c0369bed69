//! FAQ Harvest main entry point
//!
//! This is the command-line interface for the FAQ Harvest crawler.

use anyhow::{bail, Context};
use clap::Parser;
use faq_harvest::config::{load_config_with_hash, validate, Config};
use faq_harvest::crawler::crawl;
use faq_harvest::output::{
    generate_markdown_summary, print_corpus_statistics, print_statistics, CorpusStatistics,
};
use faq_harvest::storage::{open_storage, Storage};
use faq_harvest::url::UrlFilter;
use faq_harvest::normalize_url;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// FAQ Harvest: a same-domain FAQ crawler
///
/// Crawls a website breadth-first from a seed URL, extracts question/answer
/// pairs from every page it visits and keeps them in a deduplicated JSON file
/// that later runs extend.
#[derive(Parser, Debug)]
#[command(name = "faq-harvest")]
#[command(version)]
#[command(about = "A same-domain FAQ crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG", required_unless_present = "seed")]
    config: Option<PathBuf>,

    /// Seed URL; overrides the configuration file
    #[arg(long, value_name = "URL")]
    seed: Option<String>,

    /// Corpus JSON path; overrides the configuration file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum number of pages to fetch
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Delay between pages in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with_all = ["stats", "export_summary"])]
    dry_run: bool,

    /// Show statistics for the existing corpus and exit
    #[arg(long, conflicts_with_all = ["dry_run", "export_summary"])]
    stats: bool,

    /// Generate markdown summary from the existing corpus and exit
    #[arg(long, conflicts_with_all = ["dry_run", "stats"])]
    export_summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else if cli.stats {
        handle_stats(&config)?;
    } else if cli.export_summary {
        handle_export_summary(&config)?;
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("faq_harvest=info,warn"),
            1 => EnvFilter::new("faq_harvest=debug,info"),
            2 => EnvFilter::new("faq_harvest=trace,debug"),
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

/// Loads the config file (if given) and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (mut config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            if let Some(seed) = &cli.seed {
                config.crawler.seed_url = seed.clone();
            }
            config
        }
        None => match &cli.seed {
            Some(seed) => Config::from_seed(seed),
            None => bail!("either a configuration file or --seed is required"),
        },
    };

    if let Some(output) = &cli.output {
        config.output.corpus_path = output.to_string_lossy().into_owned();
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.crawler.politeness_delay_ms = delay_ms;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let seed = normalize_url(&config.crawler.seed_url)?;
    let filter = UrlFilter::new(seed.as_url(), &config.filter.exclude_patterns)?;

    println!("=== FAQ Harvest Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed: {}", seed);
    println!("  Crawl scope: {}", filter.authority());
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Politeness delay: {}ms", config.crawler.politeness_delay_ms);
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.value);
    println!("  Accept-Language: {}", config.user_agent.accept_language);

    println!("\nOutput:");
    println!("  Corpus: {}", config.output.corpus_path);
    println!("  Summary: {}", config.output.summary_path);

    println!(
        "\nExclusion Patterns ({}):",
        config.filter.exclude_patterns.len()
    );
    for pattern in &config.filter.exclude_patterns {
        println!("  - {}", pattern);
    }

    println!("\nExtraction Strategies:");
    for (i, strategy) in config.extraction.strategies.iter().enumerate() {
        println!("  {}. {}", i + 1, strategy);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl up to {} pages starting at {}",
        config.crawler.max_pages, seed
    );

    Ok(())
}

/// Handles the --stats mode: summarizes the existing corpus file
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Corpus: {}\n", config.output.corpus_path);

    let storage = open_storage(Path::new(&config.output.corpus_path));
    let records = storage
        .load()
        .with_context(|| format!("Failed to read {}", config.output.corpus_path))?;

    print_corpus_statistics(&CorpusStatistics::from_records(&records));
    Ok(())
}

/// Handles the --export-summary mode: renders the corpus as markdown
fn handle_export_summary(config: &Config) -> anyhow::Result<()> {
    println!("=== Exporting FAQ Summary ===\n");
    println!("Corpus: {}", config.output.corpus_path);
    println!("Output: {}", config.output.summary_path);
    println!();

    let storage = open_storage(Path::new(&config.output.corpus_path));
    let records = storage
        .load()
        .with_context(|| format!("Failed to read {}", config.output.corpus_path))?;

    generate_markdown_summary(&records, Path::new(&config.output.summary_path))
        .context("Failed to write markdown summary")?;

    println!("✓ Summary exported to: {}", config.output.summary_path);
    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Target: {}, output: {}, max pages: {}",
        config.crawler.seed_url,
        config.output.corpus_path,
        config.crawler.max_pages
    );

    let stats = crawl(config).await.context("Crawl failed")?;

    println!();
    print_statistics(&stats);
    Ok(())
}
