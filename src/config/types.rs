use crate::extract::StrategyKind;
use crate::url::DEFAULT_EXCLUDE_PATTERNS;
use serde::Deserialize;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Main configuration structure for FAQ Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl Config {
    /// Builds an all-defaults configuration around a seed URL
    ///
    /// The seed is not checked here; run [`crate::config::validate`] on the result.
    pub fn from_seed(seed_url: &str) -> Self {
        Self {
            crawler: CrawlerConfig::new(seed_url),
            user_agent: UserAgentConfig::default(),
            output: OutputConfig::default(),
            filter: FilterConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Absolute http(s) URL the crawl starts from; it also fixes the crawl domain
    pub seed_url: String,

    /// Maximum number of pages fetched in one run
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Fixed sleep between pages (milliseconds)
    #[serde(default = "default_politeness_delay_ms")]
    pub politeness_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl CrawlerConfig {
    fn new(seed_url: &str) -> Self {
        Self {
            seed_url: seed_url.to_string(),
            max_pages: default_max_pages(),
            politeness_delay_ms: default_politeness_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_max_pages() -> u32 {
    50
}

fn default_politeness_delay_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    15
}

/// Request identification headers
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct UserAgentConfig {
    /// `User-Agent` header value
    pub value: String,

    /// `Accept-Language` header value
    pub accept_language: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OutputConfig {
    /// Path to the JSON corpus file
    pub corpus_path: String,

    /// Path to the markdown summary file
    pub summary_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            corpus_path: "faqs.json".to_string(),
            summary_path: "faq_summary.md".to_string(),
        }
    }
}

/// Link exclusion rules
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FilterConfig {
    /// Case-insensitive regular expressions; a matching URL is never queued
    pub exclude_patterns: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Extraction chain configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ExtractionConfig {
    /// Strategies in the order they are tried
    pub strategies: Vec<StrategyKind>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyKind::ALL.to_vec(),
        }
    }
}
