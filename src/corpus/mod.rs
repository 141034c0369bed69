//! The deduplicated FAQ corpus
//!
//! Records are kept in discovery order. Identity is the normalized question text,
//! so the same question found on a second page (or in a later run) is dropped.

mod record;

pub use record::{normalize_question, FaqRecord, MIN_ANSWER_CHARS, MIN_QUESTION_CHARS};

use std::collections::HashSet;

/// Ordered, question-deduplicated collection of FAQ records
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<FaqRecord>,
    seen: HashSet<String>,
}

impl Corpus {
    /// Creates an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a corpus from a loaded snapshot
    ///
    /// Snapshot order is preserved. Should the snapshot itself contain repeated
    /// questions, only the first occurrence is kept.
    pub fn from_records(records: Vec<FaqRecord>) -> Self {
        let mut corpus = Self::new();
        for record in records {
            corpus.insert(record);
        }
        corpus
    }

    /// Returns true if a record with the same normalized question exists
    pub fn contains_question(&self, question: &str) -> bool {
        self.seen.contains(&normalize_question(question))
    }

    /// Appends the record unless its question is already present
    ///
    /// Returns true if the record was added.
    pub fn insert(&mut self, record: FaqRecord) -> bool {
        if !self.seen.insert(record.dedup_key()) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Merges a batch of records, returning how many were new
    pub fn merge<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = FaqRecord>,
    {
        let mut added = 0;
        for record in records {
            let question = record.question.clone();
            if self.insert(record) {
                tracing::info!("New FAQ: {}", preview(&question, 60));
                added += 1;
            } else {
                tracing::debug!("Duplicate FAQ skipped: {}", preview(&question, 60));
            }
        }
        added
    }

    /// The records in discovery order
    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the corpus has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Shortens text for log lines without splitting a character
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
