use serde::{Deserialize, Serialize};

/// Minimum question length (in characters, exclusive)
pub const MIN_QUESTION_CHARS: usize = 5;

/// Minimum answer length (in characters, exclusive)
pub const MIN_ANSWER_CHARS: usize = 10;

/// Timestamp format used for `extracted_at`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single extracted question/answer pair
///
/// This is the unit of the persisted corpus. The optional metadata fields are
/// omitted from the JSON output when absent so older snapshots stay loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// The question text
    pub question: String,

    /// The answer text
    pub answer: String,

    /// Canonical URL of the page the pair was found on
    pub source_url: String,

    /// When the pair was extracted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<String>,

    /// Name of the extraction strategy that produced the pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_method: Option<String>,
}

impl FaqRecord {
    /// Builds a record from a raw candidate pair, enforcing the minimum-content rule
    ///
    /// Both texts are trimmed; the candidate is rejected unless the question is
    /// longer than 5 characters and the answer longer than 10.
    ///
    /// # Examples
    ///
    /// ```
    /// use faq_harvest::FaqRecord;
    ///
    /// let kept = FaqRecord::candidate(
    ///     "What is KYC?",
    ///     "Know Your Customer verification.",
    ///     "https://example.com/faq",
    ///     "structured",
    /// );
    /// assert!(kept.is_some());
    ///
    /// assert!(FaqRecord::candidate("Hi?", "A long enough answer.", "https://example.com/", "structured").is_none());
    /// assert!(FaqRecord::candidate("What is KYC?", "Yes", "https://example.com/", "structured").is_none());
    /// ```
    pub fn candidate(
        question: &str,
        answer: &str,
        source_url: &str,
        method: &str,
    ) -> Option<Self> {
        let question = question.trim();
        let answer = answer.trim();

        if question.chars().count() <= MIN_QUESTION_CHARS
            || answer.chars().count() <= MIN_ANSWER_CHARS
        {
            return None;
        }

        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            source_url: source_url.to_string(),
            extracted_at: Some(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()),
            extraction_method: Some(method.to_string()),
        })
    }

    /// The deduplication key: trimmed, lowercased question text
    pub fn dedup_key(&self) -> String {
        normalize_question(&self.question)
    }
}

/// Normalizes a question for identity comparison
///
/// Two questions are the same FAQ when they are equal after trimming and
/// lowercasing.
pub fn normalize_question(question: &str) -> String {
    question.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_trims() {
        let record = FaqRecord::candidate(
            "  What is the card fee?  ",
            "\n The annual fee is 500.\t",
            "https://example.com/",
            "structured",
        )
        .unwrap();
        assert_eq!(record.question, "What is the card fee?");
        assert_eq!(record.answer, "The annual fee is 500.");
        assert_eq!(record.extraction_method.as_deref(), Some("structured"));
        assert!(record.extracted_at.is_some());
    }

    #[test]
    fn test_length_boundaries() {
        // exactly 5 / 10 characters are rejected
        assert!(FaqRecord::candidate("Why??", "0123456789x", "u", "m").is_none());
        assert!(FaqRecord::candidate("Why???", "0123456789", "u", "m").is_none());
        assert!(FaqRecord::candidate("Why???", "0123456789x", "u", "m").is_some());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // six multibyte characters, eleven characters of answer
        assert!(FaqRecord::candidate("क्या है?", "₹₹₹₹₹₹₹₹₹₹₹", "u", "m").is_some());
        assert!(FaqRecord::candidate("₹₹₹₹₹", "₹₹₹₹₹₹₹₹₹₹₹", "u", "m").is_none());
    }

    #[test]
    fn test_normalize_question() {
        assert_eq!(normalize_question("  What is KYC?  "), "what is kyc?");
        assert_eq!(
            normalize_question("What is KYC?"),
            normalize_question("  what is kyc?  ")
        );
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"question": "What is KYC?", "answer": "Identity checks.", "source_url": "https://example.com/"}"#;
        let record: FaqRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extracted_at, None);
        assert_eq!(record.extraction_method, None);

        let out = serde_json::to_string(&record).unwrap();
        assert!(!out.contains("extracted_at"));
    }
}
