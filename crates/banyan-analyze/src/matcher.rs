//! Text-presence matching against a fixed expected-token list.

use serde::{Deserialize, Serialize};

/// Minimum number of expected tokens that must appear for a pass verdict.
pub const MATCH_THRESHOLD: usize = 3;

/// Result of matching a text body against an expected-token list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches_found: usize,
    pub is_correct: bool,
    pub matched_values: Vec<String>,
    pub message: String,
}

/// Count which expected tokens occur in the text body.
///
/// The body is uppercased once; each token is uppercased and trimmed and
/// tested for literal substring containment. Duplicate tokens in the list
/// count once per list entry. Matched values keep their original casing
/// and input order.
pub fn check_text_matches<S: AsRef<str>>(text: &str, expected: &[S]) -> MatchReport {
    let body = text.to_uppercase();

    let mut matches_found = 0;
    let mut matched_values = Vec::new();
    for token in expected {
        let needle = token.as_ref().trim().to_uppercase();
        if !needle.is_empty() && body.contains(&needle) {
            matches_found += 1;
            matched_values.push(token.as_ref().to_string());
        }
    }

    let is_correct = matches_found >= MATCH_THRESHOLD;
    let message = format!(
        "Found {} matches. {}",
        matches_found,
        if is_correct {
            "PDF is correct!"
        } else {
            "PDF is incorrect - need at least 3 matches."
        }
    );

    MatchReport {
        matches_found,
        is_correct,
        matched_values,
        message,
    }
}
