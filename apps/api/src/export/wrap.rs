//! Greedy word-wrap that reflows text into lines no wider than the text column.
//!
//! Explicit newlines always start a new line and blank lines are kept.
//! A word wider than the whole column is broken between characters.

use crate::export::font_metrics::FontMetricTable;

/// Wraps `text` at `max_width_pt` for the given face and size. Returns the printed lines.
///
/// Runs of whitespace inside a line collapse to a single space.
pub fn wrap_text(text: &str, metrics: &FontMetricTable, size_pt: f32, max_width_pt: f32) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let max_width = max_width_pt / size_pt; // em units
    let mut lines = Vec::new();

    for paragraph in normalized.split('\n') {
        wrap_paragraph(paragraph, metrics, max_width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, metrics: &FontMetricTable, max_width: f32, lines: &mut Vec<String>) {
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    if words.is_empty() {
        lines.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_w = metrics.measure_str(word);
        let space_w = if current.is_empty() { 0.0 } else { metrics.space_width };

        if current_width + space_w + word_w <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width += space_w + word_w;
            continue;
        }

        // Current line is full; flush it before placing the word.
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if word_w <= max_width {
            current.push_str(word);
            current_width = word_w;
        } else {
            for piece in break_word(word, metrics, max_width) {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current_width = metrics.measure_str(&piece);
                current = piece;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

/// Splits an overlong word into chunks that each fit `max_width`.
/// Every chunk holds at least one character so the loop always advances.
fn break_word(word: &str, metrics: &FontMetricTable, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0.0_f32;

    for c in word.chars() {
        let w = metrics.char_width(c);
        if !piece.is_empty() && width + w > max_width {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }
        piece.push(c);
        width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
