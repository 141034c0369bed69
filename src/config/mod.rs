//! Configuration module for FAQ Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Everything except the seed URL has a default, so a minimal file is:
//!
//! ```toml
//! [crawler]
//! seed-url = "https://example.com"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use faq_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will visit at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, ExtractionConfig, FilterConfig, OutputConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
