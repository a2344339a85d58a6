//! Simulated question answering
//!
//! There is no retrieval backend: a fixed delay stands in for the round trip
//! and the answer content is canned.

use crate::types::{QueryResult, SourceRef};

/// Simulated round-trip delay in milliseconds
pub const ANSWER_DELAY_MS: u32 = 1500;

/// Produce the canned answer for a question
///
/// Returns None for blank input. The question text itself does not influence
/// the canned content.
pub fn answer_question(question: &str) -> Option<QueryResult> {
    if question.trim().is_empty() {
        return None;
    }

    Some(QueryResult {
        response: "Here's your answer...".to_string(),
        sources: vec![SourceRef {
            excerpt: "Reference text example".to_string(),
            image_ref: "example_image.jpg".to_string(),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_question_empty() {
        assert!(answer_question("").is_none());
    }

    #[test]
    fn test_answer_question_whitespace_only() {
        assert!(answer_question("   \n\t ").is_none());
    }

    #[test]
    fn test_answer_question_returns_canned_result() {
        let result = answer_question("What is in my notes?").expect("expected an answer");
        assert_eq!(result.response, "Here's your answer...");
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources[0].excerpt, "Reference text example");
        assert_eq!(result.sources[0].image_ref, "example_image.jpg");
    }

    #[test]
    fn test_answer_question_ignores_question_content() {
        let a = answer_question("first question").expect("expected an answer");
        let b = answer_question("completely different").expect("expected an answer");
        assert_eq!(a, b);
    }
}
