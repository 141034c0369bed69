//! Text and selector helpers shared by the extraction strategies

use crate::extract::ExtractError;
use scraper::{ElementRef, Selector};

/// Parses a CSS selector, mapping failures to an `ExtractError`
pub(crate) fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Parses a list of CSS selectors, keeping their order
pub(crate) fn selectors(css: &[&str]) -> Result<Vec<Selector>, ExtractError> {
    css.iter().map(|s| selector(s)).collect()
}

/// Visible text of an element with runs of whitespace collapsed to one space
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of the first descendant matching `selector`, if any
pub(crate) fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(element_text)
}

/// Number of characters (not bytes) in a string
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Strips the first matching prefix, ignoring ASCII case
///
/// Prefixes are tried in order, so longer prefixes must come first.
pub(crate) fn strip_prefix_ignore_case<'a>(text: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| {
        let len = prefix.len();
        if text.len() >= len
            && text.is_char_boundary(len)
            && text[..len].eq_ignore_ascii_case(prefix)
        {
            Some(&text[len..])
        } else {
            None
        }
    })
}
