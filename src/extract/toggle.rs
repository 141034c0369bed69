//! Toggle-container strategy
//!
//! Some sites drop the item class and rely on a wrapper carrying a toggle
//! controller instead:
//!
//! ```html
//! <div data-controller="faq-toggle">
//!   <div>
//!     <div class="faq-header"><span>Question?</span></div>
//!     <div data-faq-toggle-target="answer"><p>Answer.</p></div>
//!   </div>
//! </div>
//! ```
//!
//! Items are the `.faq-item` elements inside the wrapper, or the wrapper's
//! direct child elements when none are marked.

use crate::corpus::FaqRecord;
use crate::extract::structured::ItemSelectors;
use crate::extract::text::selector;
use crate::extract::{ExtractError, StrategyKind};
use crate::url::CanonicalUrl;
use scraper::{ElementRef, Html};

const CONTAINER: &str = "div[data-controller~='faq-toggle']";
const ITEM: &str = ".faq-item";

/// Extracts pairs from items nested inside toggle-controller wrappers
pub fn extract(document: &Html, source: &CanonicalUrl) -> Result<Vec<FaqRecord>, ExtractError> {
    let container_selector = selector(CONTAINER)?;
    let item_selector = selector(ITEM)?;
    let items = ItemSelectors::new()?;

    let mut records = Vec::new();
    for container in document.select(&container_selector) {
        let mut candidates: Vec<ElementRef<'_>> = container.select(&item_selector).collect();
        if candidates.is_empty() {
            candidates = container.children().filter_map(ElementRef::wrap).collect();
        }

        tracing::debug!(
            "Toggle strategy found {} candidate items in container",
            candidates.len()
        );

        records.extend(
            candidates
                .into_iter()
                .filter_map(|item| items.extract_item(item, source, StrategyKind::Toggle)),
        );
    }

    Ok(records)
}
