//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: Lifecycle of one crawl run (idle, running, completed)
//! - `PageOutcome`: What happened to a single dequeued URL
//! - `FetchFailure`: Why a page never reached extraction

mod crawl_state;
mod page_outcome;

// Re-export main types
pub use crawl_state::CrawlState;
pub use page_outcome::{FetchFailure, PageOutcome};
