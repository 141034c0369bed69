//! Heading-adjacency strategy
//!
//! A heading phrased as a question, answered by the block right after it.

use crate::corpus::FaqRecord;
use crate::extract::text::{char_len, element_text, selector};
use crate::extract::{ExtractError, StrategyKind};
use crate::url::CanonicalUrl;
use scraper::{ElementRef, Html};

const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";
const ANSWER_TAGS: &[&str] = &["p", "div", "ul", "ol"];

/// Extracts pairs from question headings and their next sibling block
pub fn extract(document: &Html, source: &CanonicalUrl) -> Result<Vec<FaqRecord>, ExtractError> {
    let headings = selector(HEADINGS)?;

    let records = document
        .select(&headings)
        .filter_map(|heading| {
            let question = element_text(heading);
            if !question.contains('?') || char_len(&question) <= 10 {
                return None;
            }

            let sibling = heading.next_siblings().find_map(ElementRef::wrap)?;
            if !ANSWER_TAGS.contains(&sibling.value().name()) {
                return None;
            }

            let answer = element_text(sibling);
            if char_len(&answer) <= 20 {
                return None;
            }

            FaqRecord::candidate(
                &question,
                &answer,
                source.as_str(),
                StrategyKind::HeadingAdjacency.as_str(),
            )
        })
        .collect();

    Ok(records)
}
