//! Accordion-heuristic strategy
//!
//! Looks at any `div` or `section` whose class names suggest collapsible UI and
//! probes it for something question-like and something answer-like.

use crate::corpus::FaqRecord;
use crate::extract::text::{char_len, first_text, selector, selectors};
use crate::extract::{ExtractError, StrategyKind};
use crate::url::CanonicalUrl;
use scraper::{ElementRef, Html, Selector};

const CANDIDATES: &str = "div[class], section[class]";

const CLASS_KEYWORDS: &[&str] = &["accordion", "collapse", "toggle", "expandable"];

/// Probed in order; the first whose text looks like a question wins
const QUESTION_SELECTORS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    ".question",
    ".title",
    ".header",
    "[data-toggle]",
    ".accordion-header",
    "summary",
    ".faq-question",
];

/// Probed in order; the first with enough text that is not the question wins
const ANSWER_SELECTORS: &[&str] = &[
    ".answer",
    ".content",
    ".body",
    ".description",
    ".accordion-body",
    ".collapse",
    ".faq-answer",
    "p",
    ".text",
];

/// Extracts pairs from elements styled as accordions
pub fn extract(document: &Html, source: &CanonicalUrl) -> Result<Vec<FaqRecord>, ExtractError> {
    let candidates = selector(CANDIDATES)?;
    let questions = selectors(QUESTION_SELECTORS)?;
    let answers = selectors(ANSWER_SELECTORS)?;

    let items: Vec<ElementRef<'_>> = document
        .select(&candidates)
        .filter(|element| is_collapsible(*element))
        .collect();

    if !items.is_empty() {
        tracing::debug!("Accordion strategy found {} candidate items", items.len());
    }

    Ok(items
        .into_iter()
        .filter_map(|item| extract_item(item, &questions, &answers, source))
        .collect())
}

fn is_collapsible(element: ElementRef<'_>) -> bool {
    element.value().attr("class").map_or(false, |class| {
        let class = class.to_lowercase();
        CLASS_KEYWORDS.iter().any(|keyword| class.contains(keyword))
    })
}

fn extract_item(
    item: ElementRef<'_>,
    questions: &[Selector],
    answers: &[Selector],
    source: &CanonicalUrl,
) -> Option<FaqRecord> {
    let question = questions
        .iter()
        .filter_map(|sel| first_text(item, sel))
        .find(|text| char_len(text) > 5 && text.contains('?'))?;

    let answer = answers
        .iter()
        .filter_map(|sel| first_text(item, sel))
        .find(|text| char_len(text) > 10 && *text != question)?;

    FaqRecord::candidate(
        &question,
        &answer,
        source.as_str(),
        StrategyKind::Accordion.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::normalize_url;

    fn source() -> CanonicalUrl {
        normalize_url("https://example.com/support").unwrap()
    }

    #[test]
    fn test_bootstrap_accordion() {
        let html = Html::parse_document(
            r#"<div class="accordion-item">
                 <h2 class="accordion-header"><button>What documents do I need?</button></h2>
                 <div class="accordion-body">A PAN card and an Aadhaar-linked mobile number.</div>
               </div>"#,
        );

        let records = extract(&html, &source()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "What documents do I need?");
        assert_eq!(
            records[0].answer,
            "A PAN card and an Aadhaar-linked mobile number."
        );
        assert_eq!(records[0].extraction_method.as_deref(), Some("accordion"));
    }

    #[test]
    fn test_class_keyword_is_case_insensitive() {
        let html = Html::parse_document(
            r#"<section class="FAQ-Expandable">
                 <summary>Can I change my PIN?</summary>
                 <p>Yes, from the Cards tab in the app.</p>
               </section>"#,
        );

        let records = extract(&html, &source()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "Can I change my PIN?");
    }

    #[test]
    fn test_heading_without_question_mark_falls_through() {
        let html = Html::parse_document(
            r#"<div class="toggle-panel">
                 <h3>Payments</h3>
                 <span class="question">Why was my payment declined?</span>
                 <div class="content">Your bank may have flagged the transaction.</div>
               </div>"#,
        );

        let records = extract(&html, &source()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "Why was my payment declined?");
    }

    #[test]
    fn test_answer_must_differ_from_question() {
        let html = Html::parse_document(
            r#"<div class="collapse-block">
                 <p class="title">Is there a monthly fee?</p>
                 <div class="text">There is no monthly fee at all.</div>
               </div>"#,
        );

        let records = extract(&html, &source()).unwrap();
        assert_eq!(records.len(), 1);
        // `p` is probed before `.text` but carries the question itself
        assert_eq!(records[0].answer, "There is no monthly fee at all.");
    }

    #[test]
    fn test_no_question_mark_no_record() {
        let html = Html::parse_document(
            r#"<div class="accordion">
                 <h3>Opening hours</h3>
                 <p>Monday to Friday, nine to five.</p>
               </div>"#,
        );

        assert!(extract(&html, &source()).unwrap().is_empty());
    }

    #[test]
    fn test_non_collapsible_ignored() {
        let html = Html::parse_document(
            r#"<div class="card">
                 <h3>Is this an accordion?</h3>
                 <p>No, it is a plain card component.</p>
               </div>"#,
        );

        assert!(extract(&html, &source()).unwrap().is_empty());
    }
}
