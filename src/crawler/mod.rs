//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with browser-like headers
//! - Hyperlink extraction from parsed pages
//! - The breadth-first frontier and visited set
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use frontier::Frontier;
pub use parser::{extract_hrefs, extract_title};

use crate::config::Config;
use crate::output::CrawlStatistics;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Load the existing corpus, if any
/// 2. Build the HTTP client
/// 3. Crawl breadth-first from the seed until the frontier or page budget runs out
/// 4. Save the corpus after every page that added records, and once at the end
///
/// # Returns
///
/// * `Ok(CrawlStatistics)` - Crawl completed
/// * `Err(FaqError)` - The crawler could not be constructed
pub async fn crawl(config: Config) -> Result<CrawlStatistics> {
    run_crawl(config).await
}
