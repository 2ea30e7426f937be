//! Sentence segmentation
//!
//! Whitespace-collapsing boundary scan: runs of whitespace become single
//! spaces, then the text splits at each space that immediately follows a
//! `.`, `?`, or `!`. The terminal punctuation stays attached to the
//! preceding sentence; the space itself is consumed as the split point.

/// Collapse every run of whitespace (spaces, tabs, newlines) to one space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into sentences.
///
/// Text without any sentence-terminal punctuation comes back as a single
/// segment. Empty segments are discarded.
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = normalize_whitespace(text);

    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut prev_terminal = false;

    for ch in normalized.chars() {
        if ch == ' ' && prev_terminal {
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            prev_terminal = false;
            continue;
        }
        current.push(ch);
        prev_terminal = matches!(ch, '.' | '?' | '!');
    }

    if !current.is_empty() {
        sentences.push(current);
    }

    sentences
}

/// Truncate to at most `max_chars` characters, respecting char boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
