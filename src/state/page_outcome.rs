use crate::extract::StrategyKind;
use std::fmt;

/// Why a fetched URL produced no document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchFailure {
    /// Connection, DNS, TLS or body read failure
    Network,

    /// The request exceeded the fetch timeout
    Timeout,

    /// Non-2xx HTTP status
    HttpStatus(u16),

    /// Response was not `text/html`
    ContentMismatch,

    /// Redirects ended outside the crawl domain or on an excluded URL
    RedirectOffDomain,
}

impl FetchFailure {
    /// Short name used for grouping failures in statistics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::HttpStatus(_) => "http_status",
            Self::ContentMismatch => "content_mismatch",
            Self::RedirectOffDomain => "redirect_off_domain",
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(code) => write!(f, "HTTP {}", code),
            other => f.write_str(other.label()),
        }
    }
}

/// What happened to one dequeued URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The URL was visited earlier in this run; nothing was fetched
    AlreadyVisited,

    /// Redirects ended on a page already visited in this run; the response
    /// was discarded without extraction
    RedirectedToVisited,

    /// The fetch failed; the URL stays consumed
    FetchFailed(FetchFailure),

    /// The page was extracted and its links queued
    Processed {
        /// Strategy that produced records, if any
        strategy: Option<StrategyKind>,
        /// Candidate records returned by the chain
        found: usize,
        /// Records that were new to the corpus
        added: usize,
        /// Links appended to the frontier
        queued_links: usize,
    },
}

impl PageOutcome {
    /// Returns true if a request went out for this URL
    pub fn was_fetched(&self) -> bool {
        !matches!(self, Self::AlreadyVisited)
    }

    /// Returns true if the page reached extraction
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Processed { .. })
    }

    /// Returns true if the page was not fetched or not used because its URL
    /// had already been visited
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::AlreadyVisited | Self::RedirectedToVisited)
    }

    /// Number of records this page added to the corpus
    pub fn added(&self) -> usize {
        match self {
            Self::Processed { added, .. } => *added,
            _ => 0,
        }
    }
}
