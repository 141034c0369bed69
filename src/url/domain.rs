use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host, it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use faq_harvest::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Extracts the crawl authority of a URL: the lowercase host plus an explicit port
///
/// Default ports are omitted by the URL parser, so `http://example.com` and
/// `https://example.com` share the authority `example.com`, while a server on
/// `127.0.0.1:8080` is its own crawl scope.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use faq_harvest::url::extract_authority;
///
/// let url = Url::parse("http://127.0.0.1:8080/faq").unwrap();
/// assert_eq!(extract_authority(&url), Some("127.0.0.1:8080".to_string()));
///
/// let url = Url::parse("https://example.com:443/faq").unwrap();
/// assert_eq!(extract_authority(&url), Some("example.com".to_string()));
/// ```
pub fn extract_authority(url: &Url) -> Option<String> {
    let domain = extract_domain(url)?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", domain, port),
        None => domain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_domain() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_subdomain() {
        let url = Url::parse("https://help.example.com/faq").unwrap();
        assert_eq!(extract_domain(&url), Some("help.example.com".to_string()));
    }

    #[test]
    fn test_extract_uppercase_converted_to_lowercase() {
        let url = Url::parse("https://Example.COM/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_authority_ignores_default_port() {
        let url = Url::parse("http://example.com:80/").unwrap();
        assert_eq!(extract_authority(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_authority_keeps_explicit_port() {
        let url = Url::parse("https://example.com:8443/faq").unwrap();
        assert_eq!(extract_authority(&url), Some("example.com:8443".to_string()));
    }

    #[test]
    fn test_authority_scheme_independent() {
        let http = Url::parse("http://example.com/a").unwrap();
        let https = Url::parse("https://example.com/a").unwrap();
        assert_eq!(extract_authority(&http), extract_authority(&https));
    }
}
