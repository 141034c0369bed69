//! Structured-container strategy
//!
//! Handles markup that marks each FAQ item explicitly:
//!
//! ```html
//! <div class="faq-item">
//!   <div class="faq-header"><span>What is the card fee?</span></div>
//!   <div class="faq-answer"><p>The annual fee is ₹500.</p></div>
//! </div>
//! ```

use crate::corpus::FaqRecord;
use crate::extract::text::{element_text, selector, selectors};
use crate::extract::{ExtractError, StrategyKind};
use crate::url::CanonicalUrl;
use scraper::{ElementRef, Html, Selector};

const ITEM: &str = "div.faq-item";
const HEADER: &str = "div.faq-header";
const HEADER_LABEL: &str = "span";
const TOGGLE_TRIGGER: &str = "span[data-action*='toggle'], div[data-action*='toggle'], \
                              h1[data-action*='toggle'], h2[data-action*='toggle'], \
                              h3[data-action*='toggle'], h4[data-action*='toggle'], \
                              h5[data-action*='toggle']";
const ANSWERS: &[&str] = &["div.faq-answer", "div[data-faq-toggle-target='answer']"];
const ANSWER_PARAGRAPH: &str = "p";

/// Compiled selectors for pulling one question/answer pair out of an FAQ item
pub(crate) struct ItemSelectors {
    header: Selector,
    header_label: Selector,
    toggle_trigger: Selector,
    answers: Vec<Selector>,
    answer_paragraph: Selector,
}

impl ItemSelectors {
    pub(crate) fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            header: selector(HEADER)?,
            header_label: selector(HEADER_LABEL)?,
            toggle_trigger: selector(TOGGLE_TRIGGER)?,
            answers: selectors(ANSWERS)?,
            answer_paragraph: selector(ANSWER_PARAGRAPH)?,
        })
    }

    /// Extracts a pair from one item element
    ///
    /// The question comes from the header's inner label, else the whole header,
    /// else a toggle trigger element. The answer comes from the answer panel's
    /// first paragraph, else the whole panel.
    pub(crate) fn extract_item(
        &self,
        item: ElementRef<'_>,
        source: &CanonicalUrl,
        kind: StrategyKind,
    ) -> Option<FaqRecord> {
        let question = self.question(item)?;
        let answer = self.answer(item)?;
        FaqRecord::candidate(&question, &answer, source.as_str(), kind.as_str())
    }

    fn question(&self, item: ElementRef<'_>) -> Option<String> {
        if let Some(header) = item.select(&self.header).next() {
            let label = header
                .select(&self.header_label)
                .next()
                .map(element_text)
                .filter(|text| !text.is_empty());
            return Some(label.unwrap_or_else(|| element_text(header)));
        }

        item.select(&self.toggle_trigger).next().map(element_text)
    }

    fn answer(&self, item: ElementRef<'_>) -> Option<String> {
        let panel = self
            .answers
            .iter()
            .find_map(|sel| item.select(sel).next())?;

        let paragraph = panel
            .select(&self.answer_paragraph)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty());
        Some(paragraph.unwrap_or_else(|| element_text(panel)))
    }
}

/// Extracts pairs from every `div.faq-item` in the document
pub fn extract(document: &Html, source: &CanonicalUrl) -> Result<Vec<FaqRecord>, ExtractError> {
    let item_selector = selector(ITEM)?;
    let items = ItemSelectors::new()?;

    let records: Vec<FaqRecord> = document
        .select(&item_selector)
        .filter_map(|item| items.extract_item(item, source, StrategyKind::Structured))
        .collect();

    if !records.is_empty() {
        tracing::debug!("Structured strategy matched {} FAQ items", records.len());
    }

    Ok(records)
}
