//! Crawl and corpus statistics
//!
//! `CrawlStatistics` is filled in by the coordinator as pages are processed.
//! `CorpusStatistics` is computed from a loaded corpus for the `--stats` mode.

use crate::corpus::FaqRecord;
use crate::extract::StrategyKind;
use crate::state::{FetchFailure, PageOutcome};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;

/// Counters for one crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlStatistics {
    /// Pages a request was sent for
    pub pages_fetched: u64,

    /// Pages that reached extraction
    pub pages_processed: u64,

    /// Frontier entries skipped, or redirects discarded, because the URL was
    /// already visited
    pub duplicates_skipped: u64,

    /// Failed fetches, grouped by kind
    pub failures: HashMap<&'static str, u64>,

    /// Candidate records returned by the extraction chain
    pub candidates_found: u64,

    /// Records that were new to the corpus
    pub records_added: u64,

    /// New records per producing strategy
    pub records_by_strategy: HashMap<StrategyKind, u64>,

    /// Links appended to the frontier
    pub links_queued: u64,

    /// Corpus size when the run finished
    pub corpus_size: usize,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl CrawlStatistics {
    /// Folds one page outcome into the counters
    pub fn record(&mut self, outcome: &PageOutcome) {
        if outcome.was_fetched() {
            self.pages_fetched += 1;
        }
        if outcome.is_duplicate() {
            self.duplicates_skipped += 1;
        }
        if outcome.is_success() {
            self.pages_processed += 1;
        }

        match outcome {
            PageOutcome::FetchFailed(failure) => {
                *self.failures.entry(failure.label()).or_insert(0) += 1;
            }
            PageOutcome::Processed {
                strategy,
                found,
                queued_links,
                ..
            } => {
                let added = outcome.added() as u64;
                self.candidates_found += *found as u64;
                self.records_added += added;
                self.links_queued += *queued_links as u64;
                if let Some(strategy) = strategy {
                    if added > 0 {
                        *self.records_by_strategy.entry(*strategy).or_insert(0) += added;
                    }
                }
            }
            PageOutcome::AlreadyVisited | PageOutcome::RedirectedToVisited => {}
        }
    }

    /// Total failed fetches
    pub fn total_failures(&self) -> u64 {
        self.failures.values().sum()
    }

    /// Failed fetches of the same kind as `failure`
    ///
    /// HTTP failures are counted together regardless of status code.
    pub fn failures_of(&self, failure: FetchFailure) -> u64 {
        self.failures.get(failure.label()).copied().unwrap_or(0)
    }
}

/// Prints run statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Pages:");
    println!("  Fetched: {}", stats.pages_fetched);
    println!("  Processed: {}", stats.pages_processed);
    println!("  Duplicate entries skipped: {}", stats.duplicates_skipped);
    println!("  Links queued: {}", stats.links_queued);
    println!();

    if !stats.failures.is_empty() {
        println!("Failures:");
        let mut failure_counts: Vec<_> = stats.failures.iter().collect();
        failure_counts.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (kind, count) in failure_counts {
            println!("  {}: {}", kind, count);
        }
        println!();
    }

    println!("FAQs:");
    println!("  Candidates found: {}", stats.candidates_found);
    println!("  New records: {}", stats.records_added);
    let mut by_strategy: Vec<_> = stats.records_by_strategy.iter().collect();
    by_strategy.sort_by(|a, b| b.1.cmp(a.1).then(a.0.as_str().cmp(b.0.as_str())));
    for (strategy, count) in by_strategy {
        println!("    {}: {}", strategy, count);
    }
    println!("  Corpus size: {}", stats.corpus_size);
    println!();

    println!("Elapsed: {:.1}s", stats.elapsed.as_secs_f64());
}

/// Summary of a corpus file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStatistics {
    /// Number of records
    pub total_records: usize,

    /// Number of distinct source pages
    pub source_pages: usize,

    /// Records per extraction method; `unknown` for records without one
    pub by_method: BTreeMap<String, usize>,
}

impl CorpusStatistics {
    /// Computes statistics over a set of records
    pub fn from_records(records: &[FaqRecord]) -> Self {
        let source_pages = records
            .iter()
            .map(|r| r.source_url.as_str())
            .collect::<HashSet<_>>()
            .len();

        let mut by_method = BTreeMap::new();
        for record in records {
            let method = record.extraction_method.as_deref().unwrap_or("unknown");
            *by_method.entry(method.to_string()).or_insert(0) += 1;
        }

        Self {
            total_records: records.len(),
            source_pages,
            by_method,
        }
    }
}

/// Prints corpus statistics to stdout
pub fn print_corpus_statistics(stats: &CorpusStatistics) {
    println!("=== Corpus Statistics ===\n");
    println!("  Total FAQs: {}", stats.total_records);
    println!("  Source pages: {}", stats.source_pages);

    if !stats.by_method.is_empty() {
        println!();
        println!("By extraction method:");
        for (method, count) in &stats.by_method {
            let percentage = if stats.total_records > 0 {
                (*count as f64 / stats.total_records as f64) * 100.0
            } else {
                0.0
            };
            println!("  {}: {} ({:.1}%)", method, count, percentage);
        }
    }
}
