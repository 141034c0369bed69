//! FAQ extraction from parsed HTML
//!
//! Extraction is a fallback cascade of heuristics. Each strategy is a pure
//! function of (document, source URL); the chain runs them in priority order and
//! stops at the first one that yields at least one record, since the earlier
//! strategies encode more specific structural assumptions.
//!
//! | Strategy | Looks for |
//! |----------|-----------|
//! | `structured` | `div.faq-item` with header/answer panels |
//! | `toggle` | items inside a `data-controller="faq-toggle"` wrapper |
//! | `accordion` | collapsible-looking containers with a question and an answer |
//! | `text-pattern` | `Q:`/`A:` blocks or a question line followed by a statement |
//! | `heading-adjacency` | a question heading and the block right after it |

mod accordion;
mod headings;
mod structured;
mod text;
mod text_pattern;
mod toggle;

use crate::corpus::FaqRecord;
use crate::url::CanonicalUrl;
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors a strategy can hit on malformed input
///
/// These never abort a page: the chain logs them and moves to the next strategy.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// The available extraction strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Explicit FAQ item containers
    Structured,
    /// Items nested in a toggle-controller wrapper
    Toggle,
    /// Collapsible UI containers
    Accordion,
    /// Prefixed or question-shaped text blocks
    TextPattern,
    /// Question headings followed by a content block
    HeadingAdjacency,
}

impl StrategyKind {
    /// All strategies in default priority order
    pub const ALL: [StrategyKind; 5] = [
        Self::Structured,
        Self::Toggle,
        Self::Accordion,
        Self::TextPattern,
        Self::HeadingAdjacency,
    ];

    /// The name recorded as `extraction_method`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Toggle => "toggle",
            Self::Accordion => "accordion",
            Self::TextPattern => "text-pattern",
            Self::HeadingAdjacency => "heading-adjacency",
        }
    }

    /// Runs this strategy against a document
    pub fn extract(
        &self,
        document: &Html,
        source: &CanonicalUrl,
    ) -> Result<Vec<FaqRecord>, ExtractError> {
        match self {
            Self::Structured => structured::extract(document, source),
            Self::Toggle => toggle::extract(document, source),
            Self::Accordion => accordion::extract(document, source),
            Self::TextPattern => text_pattern::extract(document, source),
            Self::HeadingAdjacency => headings::extract(document, source),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running the chain on one page
#[derive(Debug, Clone, Default)]
pub struct ChainOutcome {
    /// The strategy that produced the records, if any did
    pub strategy: Option<StrategyKind>,

    /// Candidate records in document order
    pub records: Vec<FaqRecord>,
}

/// Ordered fallback chain of extraction strategies
#[derive(Debug, Clone)]
pub struct ExtractionChain {
    strategies: Vec<StrategyKind>,
}

impl Default for ExtractionChain {
    fn default() -> Self {
        Self::new(StrategyKind::ALL.to_vec())
    }
}

impl ExtractionChain {
    /// Creates a chain that tries the given strategies in order
    pub fn new(strategies: Vec<StrategyKind>) -> Self {
        Self { strategies }
    }

    /// Runs the strategies in order, returning the first non-empty result
    ///
    /// A strategy that fails is logged and treated as having found nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use faq_harvest::extract::{ExtractionChain, StrategyKind};
    /// use faq_harvest::url::normalize_url;
    /// use scraper::Html;
    ///
    /// let html = Html::parse_document(
    ///     "<h2>Can I get a refund?</h2><p>Refunds take 5 to 7 days.</p>",
    /// );
    /// let source = normalize_url("https://example.com/faq").unwrap();
    ///
    /// let outcome = ExtractionChain::default().extract(&html, &source);
    /// assert_eq!(outcome.strategy, Some(StrategyKind::HeadingAdjacency));
    /// assert_eq!(outcome.records.len(), 1);
    /// ```
    pub fn extract(&self, document: &Html, source: &CanonicalUrl) -> ChainOutcome {
        self.first_match(source, |strategy| strategy.extract(document, source))
    }

    fn first_match<F>(&self, source: &CanonicalUrl, mut run: F) -> ChainOutcome
    where
        F: FnMut(StrategyKind) -> Result<Vec<FaqRecord>, ExtractError>,
    {
        for &strategy in &self.strategies {
            match run(strategy) {
                Ok(records) if !records.is_empty() => {
                    tracing::info!(
                        "Found {} FAQ items using {} strategy",
                        records.len(),
                        strategy
                    );
                    return ChainOutcome {
                        strategy: Some(strategy),
                        records,
                    };
                }
                Ok(_) => {
                    tracing::trace!("{} strategy found nothing on {}", strategy, source);
                }
                Err(e) => {
                    tracing::warn!("{} strategy failed on {}: {}", strategy, source, e);
                }
            }
        }

        ChainOutcome::default()
    }

    /// Parses raw HTML and runs the chain on it
    pub fn extract_html(&self, html: &str, source: &CanonicalUrl) -> ChainOutcome {
        let document = Html::parse_document(html);
        self.extract(&document, source)
    }
}
