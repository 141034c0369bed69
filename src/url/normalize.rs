use crate::{UrlError, UrlResult};
use std::fmt;
use url::Url;

/// A URL reduced to the single form the frontier and visited set operate on
///
/// Two URLs that differ only by fragment or by a trailing slash on a non-root
/// path map to the same `CanonicalUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalUrl(Url);

impl CanonicalUrl {
    /// Returns the canonical URL as a string slice
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying parsed URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Normalizes an absolute URL into its canonical form
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject anything that is not `http` or `https`
/// 3. Reject URLs without a host
/// 4. Remove fragment (everything after #)
/// 5. Remove trailing slashes from non-root paths
/// 6. Remove an empty query string (trailing ?)
///
/// Scheme, host, port and query are otherwise preserved. Host lowercasing and
/// dot-segment removal come from the URL parser itself.
///
/// # Examples
///
/// ```
/// use faq_harvest::url::normalize_url;
///
/// let url = normalize_url("https://EXAMPLE.com/help/#top").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/help");
/// ```
pub fn normalize_url(url_str: &str) -> UrlResult<CanonicalUrl> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;
    canonicalize(url)
}

/// Resolves a (possibly relative) link against the page it was found on and
/// normalizes the result
///
/// # Examples
///
/// ```
/// use faq_harvest::url::resolve_url;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/help/cards").unwrap();
/// let url = resolve_url("../faq/", &base).unwrap();
/// assert_eq!(url.as_str(), "https://example.com/faq");
/// ```
pub fn resolve_url(href: &str, base: &Url) -> UrlResult<CanonicalUrl> {
    let url = base
        .join(href.trim())
        .map_err(|e| UrlError::Parse(e.to_string()))?;
    canonicalize(url)
}

fn canonicalize(mut url: Url) -> UrlResult<CanonicalUrl> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);

    let path = url.path();
    if path != "/" && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed }.to_string();
        url.set_path(&trimmed);
    }

    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(CanonicalUrl(url))
}
