use crate::url::domain::extract_authority;
use crate::{ConfigError, ConfigResult};
use regex::{RegexSet, RegexSetBuilder};
use url::Url;

/// URL patterns that never lead to FAQ content
///
/// Binary and document extensions, admin/auth paths, fragment anchors and
/// non-navigational schemes. Matched case-insensitively anywhere in the URL.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    r"\.pdf$",
    r"\.jpg$",
    r"\.jpeg$",
    r"\.png$",
    r"\.gif$",
    r"\.css$",
    r"\.js$",
    r"\.zip$",
    r"\.exe$",
    r"\.doc$",
    r"\.docx$",
    r"\.xml$",
    r"\.rss$",
    r"/wp-admin/",
    r"/admin/",
    r"/login",
    r"/register",
    r"/logout",
    r"#",
    r"javascript:",
    r"mailto:",
    r"tel:",
    r"ftp:",
];

/// Decides whether a URL belongs to the crawl
///
/// A URL is crawlable when it is http/https, has the same authority
/// (host and explicit port) as the seed, and matches none of the exclusion
/// patterns. The filter is fixed at construction and has no side effects.
#[derive(Debug, Clone)]
pub struct UrlFilter {
    authority: String,
    patterns: RegexSet,
}

impl UrlFilter {
    /// Builds a filter scoped to the seed URL's authority
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed URL; its host and port define the crawl domain
    /// * `exclude_patterns` - Regular expressions rejecting URLs they match
    ///
    /// # Returns
    ///
    /// * `Ok(UrlFilter)` - The filter
    /// * `Err(ConfigError)` - The seed has no host or a pattern does not compile
    pub fn new<S: AsRef<str>>(seed: &Url, exclude_patterns: &[S]) -> ConfigResult<Self> {
        let authority = extract_authority(seed).ok_or_else(|| {
            ConfigError::InvalidUrl(format!("Seed URL '{}' has no host", seed))
        })?;

        let patterns = RegexSetBuilder::new(exclude_patterns.iter().map(AsRef::as_ref))
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            authority,
            patterns,
        })
    }

    /// Builds a filter with the default exclusion list
    pub fn with_default_patterns(seed: &Url) -> ConfigResult<Self> {
        Self::new(seed, DEFAULT_EXCLUDE_PATTERNS)
    }

    /// The authority (host plus explicit port) the crawl is confined to
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Returns true if the URL should be crawled
    ///
    /// # Examples
    ///
    /// ```
    /// use faq_harvest::url::UrlFilter;
    /// use url::Url;
    ///
    /// let seed = Url::parse("https://example.com").unwrap();
    /// let filter = UrlFilter::with_default_patterns(&seed).unwrap();
    ///
    /// assert!(filter.is_valid("https://example.com/help"));
    /// assert!(!filter.is_valid("https://other.com/help"));
    /// assert!(!filter.is_valid("https://example.com/brochure.PDF"));
    /// ```
    pub fn is_valid(&self, url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return false;
        }

        if extract_authority(&parsed).as_deref() != Some(self.authority.as_str()) {
            return false;
        }

        if self.patterns.is_match(url) {
            tracing::trace!("Excluded by pattern: {}", url);
            return false;
        }

        true
    }
}
