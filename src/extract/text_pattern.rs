//! Text-pattern strategy
//!
//! Scans paragraphs, divs and list items in document order for `Q:`/`A:` style
//! pairs or a question line followed closely by a longer statement. Only leaf
//! blocks are read; a wrapper's text would repeat the blocks inside it.

use crate::corpus::FaqRecord;
use crate::extract::text::{char_len, element_text, selector, strip_prefix_ignore_case};
use crate::extract::{ExtractError, StrategyKind};
use crate::url::CanonicalUrl;
use scraper::Html;

const BLOCKS: &str = "p, div, li";

const QUESTION_PREFIXES: &[&str] = &["question:", "q:", "q."];
const ANSWER_PREFIXES: &[&str] = &["answer:", "a:", "a."];

/// How many following blocks are searched for an answer
const ANSWER_LOOKAHEAD: usize = 2;

/// Extracts pairs from prefixed or question-shaped text blocks
pub fn extract(document: &Html, source: &CanonicalUrl) -> Result<Vec<FaqRecord>, ExtractError> {
    let blocks = selector(BLOCKS)?;
    let texts: Vec<String> = document
        .select(&blocks)
        .filter(|block| block.select(&blocks).next().is_none())
        .map(element_text)
        .collect();
    Ok(pair_blocks(&texts, source))
}

fn pair_blocks(texts: &[String], source: &CanonicalUrl) -> Vec<FaqRecord> {
    let mut records = Vec::new();
    let mut i = 0;

    while i + 1 < texts.len() {
        let text = &texts[i];
        if !is_question(text) {
            i += 1;
            continue;
        }

        let window_end = (i + 1 + ANSWER_LOOKAHEAD).min(texts.len());
        let matched = (i + 1..window_end).find(|&j| is_answer(&texts[j]));

        match matched {
            Some(j) => {
                let question = strip_prefix_ignore_case(text, QUESTION_PREFIXES).unwrap_or(text);
                let answer =
                    strip_prefix_ignore_case(&texts[j], ANSWER_PREFIXES).unwrap_or(&texts[j]);

                if let Some(record) = FaqRecord::candidate(
                    question,
                    answer,
                    source.as_str(),
                    StrategyKind::TextPattern.as_str(),
                ) {
                    records.push(record);
                }
                // the answer block is consumed and never revisited as a question
                i = j + 1;
            }
            None => i += 1,
        }
    }

    records
}

fn is_question(text: &str) -> bool {
    strip_prefix_ignore_case(text, QUESTION_PREFIXES).is_some()
        || (text.ends_with('?') && char_len(text) > 10)
}

fn is_answer(text: &str) -> bool {
    strip_prefix_ignore_case(text, ANSWER_PREFIXES).is_some()
        || (char_len(text) > 20 && !text.ends_with('?'))
}
