//! Output module for run reports and corpus exports
//!
//! This module handles:
//! - Recording statistics for a crawl run
//! - Summarizing an existing corpus file
//! - Exporting the corpus as a markdown document

mod markdown;
pub mod stats;

pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::{
    print_corpus_statistics, print_statistics, CorpusStatistics, CrawlStatistics,
};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
