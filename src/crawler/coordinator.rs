//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties the other components together:
//! - Loading the existing corpus and seeding the frontier
//! - Fetching one page at a time, in breadth-first order
//! - Running the extraction chain and merging new records
//! - Persisting the corpus whenever it grows
//! - Queuing newly discovered links
//!
//! A single page's failure never ends the crawl. Only an empty frontier or a
//! spent page budget does.

use crate::config::{validate, Config};
use crate::corpus::Corpus;
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::extract_title;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::extract::{ChainOutcome, ExtractionChain};
use crate::output::CrawlStatistics;
use crate::state::{CrawlState, FetchFailure, PageOutcome};
use crate::storage::{open_storage, JsonStorage, Storage};
use crate::url::{normalize_url, CanonicalUrl, UrlFilter};
use crate::FaqError;
use reqwest::Client;
use scraper::Html;
use std::path::Path;
use std::time::{Duration, Instant};

/// Main crawler coordinator structure
///
/// Owns the frontier, the visited set and the corpus for the lifetime of one run.
pub struct Coordinator {
    config: Config,
    client: Client,
    seed: CanonicalUrl,
    frontier: Frontier,
    corpus: Corpus,
    storage: JsonStorage,
    chain: ExtractionChain,
    state: CrawlState,
    stats: CrawlStatistics,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Loads the corpus file if one exists. An unreadable or corrupt corpus is
    /// logged and the crawl starts from an empty corpus; the file is replaced on
    /// the first save.
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run, with the seed queued
    /// * `Err(FaqError)` - Invalid configuration or HTTP client failure
    pub fn new(config: Config) -> crate::Result<Self> {
        validate(&config)?;

        let seed = normalize_url(&config.crawler.seed_url)?;
        let filter = UrlFilter::new(seed.as_url(), &config.filter.exclude_patterns)?;
        tracing::info!("Crawl confined to {}", filter.authority());

        let mut frontier = Frontier::new(filter);
        frontier.enqueue_seed(seed.as_str())?;

        let storage = open_storage(Path::new(&config.output.corpus_path));
        let corpus = match storage.load() {
            Ok(records) => Corpus::from_records(records),
            Err(e) => {
                tracing::warn!(
                    "Could not load existing FAQs from {}: {}; starting empty",
                    storage.path().display(),
                    e
                );
                Corpus::new()
            }
        };

        let client = build_http_client(&config.crawler, &config.user_agent)?;
        let chain = ExtractionChain::new(config.extraction.strategies.clone());

        Ok(Self {
            config,
            client,
            seed,
            frontier,
            corpus,
            storage,
            chain,
            state: CrawlState::Idle,
            stats: CrawlStatistics::default(),
        })
    }

    /// Runs the main crawl loop
    ///
    /// Each iteration dequeues a URL, skips it if already visited, then fetches,
    /// extracts, merges and discovers links. The politeness delay follows every
    /// fetch attempt when another page will be fetched.
    pub async fn run(&mut self) -> crate::Result<CrawlStatistics> {
        self.transition(CrawlState::Running)?;

        let max_pages = self.config.crawler.max_pages;
        let delay = Duration::from_millis(self.config.crawler.politeness_delay_ms);
        let start_time = Instant::now();

        tracing::info!(
            "Starting crawl from {} (max {} pages, {} existing FAQs)",
            self.seed,
            max_pages,
            self.corpus.len()
        );

        let mut pages_processed: u32 = 0;
        while pages_processed < max_pages {
            let url = match self.frontier.dequeue() {
                Some(url) => url,
                None => {
                    tracing::info!("Frontier is empty, crawl complete");
                    break;
                }
            };

            if !self.frontier.mark_visited(&url) {
                tracing::trace!("Already visited {}", url);
                self.stats.record(&PageOutcome::AlreadyVisited);
                continue;
            }

            pages_processed += 1;
            tracing::info!("Crawling page {}/{}: {}", pages_processed, max_pages, url);

            let outcome = self.process_url(&url).await;
            self.stats.record(&outcome);

            if pages_processed < max_pages && self.frontier.has_pending() && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        if pages_processed >= max_pages {
            tracing::info!("Page budget of {} reached", max_pages);
        }

        self.persist();

        self.stats.corpus_size = self.corpus.len();
        self.stats.elapsed = start_time.elapsed();
        self.transition(CrawlState::Completed)?;

        tracing::info!(
            "Crawl completed: {} pages in {:.1}s, {} new FAQs, {} total",
            pages_processed,
            self.stats.elapsed.as_secs_f64(),
            self.stats.records_added,
            self.corpus.len()
        );

        Ok(self.stats.clone())
    }

    /// Fetches one URL and classifies the result
    async fn process_url(&mut self, url: &CanonicalUrl) -> PageOutcome {
        match fetch_url(&self.client, url.as_str()).await {
            FetchResult::Success {
                final_url, body, ..
            } => self.process_document(url, &final_url, &body),

            FetchResult::ContentMismatch { content_type } => {
                tracing::warn!("Skipping {}: expected HTML, got '{}'", url, content_type);
                PageOutcome::FetchFailed(FetchFailure::ContentMismatch)
            }

            FetchResult::HttpError { status_code } => {
                tracing::warn!("Error fetching {}: HTTP {}", url, status_code);
                PageOutcome::FetchFailed(FetchFailure::HttpStatus(status_code))
            }

            FetchResult::NetworkError { error, timed_out } => {
                tracing::warn!("Error fetching {}: {}", url, error);
                if timed_out {
                    PageOutcome::FetchFailed(FetchFailure::Timeout)
                } else {
                    PageOutcome::FetchFailed(FetchFailure::Network)
                }
            }
        }
    }

    /// Extracts, merges and discovers links for a fetched page
    ///
    /// Kept synchronous so the parsed document never lives across an await.
    fn process_document(
        &mut self,
        requested: &CanonicalUrl,
        final_url: &str,
        body: &str,
    ) -> PageOutcome {
        let page_url = match self.resolve_final_url(requested, final_url) {
            Ok(page_url) => page_url,
            Err(outcome) => return outcome,
        };

        let document = Html::parse_document(body);
        if let Some(title) = extract_title(&document) {
            tracing::debug!("Page title: {}", title);
        }

        let ChainOutcome { strategy, records } = self.chain.extract(&document, &page_url);
        let found = records.len();
        let added = self.corpus.merge(records);
        if added > 0 {
            self.persist();
        }

        let links = self.frontier.discover_links(&document, page_url.as_url());
        let discovered = links.len();
        let queued_links = self.frontier.enqueue_all(links);
        tracing::info!(
            "Found {} crawlable links on {}, queued {}",
            discovered,
            page_url,
            queued_links
        );

        PageOutcome::Processed {
            strategy,
            found,
            added,
            queued_links,
        }
    }

    /// Returns the canonical URL a page is known by after redirects
    ///
    /// An in-scope final URL is marked visited as well. The error carries the
    /// outcome to report when the page must not be processed: the redirect
    /// left the crawl domain, landed on an excluded URL, or landed on a page
    /// this run has already visited.
    fn resolve_final_url(
        &mut self,
        requested: &CanonicalUrl,
        final_url: &str,
    ) -> Result<CanonicalUrl, PageOutcome> {
        let off_domain = PageOutcome::FetchFailed(FetchFailure::RedirectOffDomain);

        let canonical = match normalize_url(final_url) {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::warn!(
                    "Redirect from {} to unusable URL {}: {}",
                    requested,
                    final_url,
                    e
                );
                return Err(off_domain);
            }
        };

        if canonical == *requested {
            return Ok(canonical);
        }

        if !self.frontier.filter().is_valid(canonical.as_str()) {
            tracing::warn!(
                "Redirect from {} left the crawl scope: {}",
                requested,
                canonical
            );
            return Err(off_domain);
        }

        if !self.frontier.mark_visited(&canonical) {
            tracing::info!(
                "Redirect from {} landed on already visited {}, skipping",
                requested,
                canonical
            );
            return Err(PageOutcome::RedirectedToVisited);
        }

        tracing::debug!("Redirected from {} to {}", requested, canonical);
        Ok(canonical)
    }

    /// Writes the full corpus snapshot; failures are logged, not propagated
    fn persist(&self) {
        if let Err(e) = self.storage.save(self.corpus.records()) {
            tracing::error!(
                "Failed to save FAQs to {}: {}",
                self.storage.path().display(),
                e
            );
        }
    }

    fn transition(&mut self, next: CrawlState) -> crate::Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(FaqError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::debug!("Crawl state: {} -> {}", self.state, next);
        self.state = next;
        Ok(())
    }

    /// The corpus as it currently stands
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The canonical seed URL
    pub fn seed(&self) -> &CanonicalUrl {
        &self.seed
    }

    /// Current lifecycle state
    pub fn state(&self) -> CrawlState {
        self.state
    }

    /// Frontier and visited set
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// The configuration this run was built from
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Runs the main crawl operation
///
/// # Example
///
/// ```no_run
/// use faq_harvest::config::load_config;
/// use faq_harvest::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let stats = run_crawl(config).await?;
/// println!("{} new FAQs", stats.records_added);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> crate::Result<CrawlStatistics> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
