//! Simple rewriter: capitalizes the first character of every sentence.
//!
//! Only the first character of each segment changes. The rest keeps its casing.

use crate::errors::{require_min_chars, AppError};

pub const MIN_SIMPLE_REWRITE_CHARS: usize = 50;
pub const REWRITE_MORE_TEXT_WARNING: &str = "Please enter more text to rewrite.";

/// Splits on `.`, capitalizes each non-empty trimmed segment, and rejoins with `". "`.
pub fn capitalize_sentences(text: &str) -> String {
    let sentences: Vec<String> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(capitalize_first)
        .collect();
    format!("{}.", sentences.join(". "))
}

/// Guarded entry point used by the handler.
pub fn rewrite_simple(text: &str) -> Result<String, AppError> {
    require_min_chars(text, MIN_SIMPLE_REWRITE_CHARS, REWRITE_MORE_TEXT_WARNING)?;
    Ok(capitalize_sentences(text))
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalizes_each_sentence() {
        assert_eq!(
            capitalize_sentences("hello world. this is a test."),
            "Hello world. This is a test."
        );
    }

    #[test]
    fn test_rest_of_sentence_keeps_casing() {
        assert_eq!(
            capitalize_sentences("built APIs in Rust. shipped them"),
            "Built APIs in Rust. Shipped them."
        );
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(capitalize_sentences("one.. two...  . three"), "One. Two. Three.");
    }

    #[test]
    fn test_non_ascii_first_character() {
        assert_eq!(capitalize_sentences("élan vital"), "Élan vital.");
    }

    #[test]
    fn test_short_input_is_refused() {
        let err = rewrite_simple("too short to rewrite.").unwrap_err();
        match err {
            AppError::InsufficientInput { min_chars, message } => {
                assert_eq!(min_chars, 50);
                assert_eq!(message, REWRITE_MORE_TEXT_WARNING);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_long_input_is_rewritten() {
        let text = "i lead a platform team. we build developer tooling for everyone";
        assert_eq!(
            rewrite_simple(text).unwrap(),
            "I lead a platform team. We build developer tooling for everyone."
        );
    }
}
