//! Summary preview and naive keyword extraction.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of characters kept in the summary preview.
pub const SUMMARY_CHARS: usize = 300;
/// Tokens must be strictly longer than this to count as keywords.
const MIN_KEYWORD_LEN: usize = 5;
const MAX_KEYWORDS: usize = 10;

const COMMON_WORDS: &[&str] = &[
    "the", "and", "with", "from", "about", "that", "this", "for", "have", "are",
];

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("static word regex"));

/// First 300 characters of the text followed by `...`, or the text unchanged when shorter.
pub fn summarize(text: &str) -> String {
    match text.char_indices().nth(SUMMARY_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Distinct lowercase words longer than five characters, skipping common words.
///
/// Keywords are returned in the order they first appear and capped at ten.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();

    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > MIN_KEYWORD_LEN && !COMMON_WORDS.contains(w))
        .filter(|w| seen.insert(*w))
        .take(MAX_KEYWORDS)
        .map(String::from)
        .collect()
}
