//! URL handling module for FAQ Harvest
//!
//! This module provides URL canonicalization, crawl-scope extraction and the
//! filter that decides which discovered links are worth fetching.

mod domain;
mod filter;
mod normalize;

// Re-export main functions
pub use domain::{extract_authority, extract_domain};
pub use filter::{UrlFilter, DEFAULT_EXCLUDE_PATTERNS};
pub use normalize::{normalize_url, resolve_url, CanonicalUrl};
