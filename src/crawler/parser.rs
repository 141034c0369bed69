//! HTML helpers for the crawl loop
//!
//! Pulls the raw hyperlink targets and the title out of a parsed document.
//! Resolution, canonicalization and filtering happen in the frontier.

use scraper::{Html, Selector};

/// Extracts the page title from the HTML document
pub fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts every non-empty `<a href>` target, in document order
///
/// Targets are returned as written (trimmed); duplicates are kept.
///
/// # Example
///
/// ```
/// use faq_harvest::crawler::extract_hrefs;
/// use scraper::Html;
///
/// let html = Html::parse_document(r#"<a href="/faq">FAQ</a><a href=" ">Empty</a><a>None</a>"#);
/// assert_eq!(extract_hrefs(&html), vec!["/faq".to_string()]);
/// ```
pub fn extract_hrefs(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}
