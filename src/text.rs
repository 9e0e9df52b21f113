//! Text utilities shared by the ingestion and analysis passes.
//!
//! Every length here is counted in characters, and every slice lands on a
//! character boundary.

/// Collapse every whitespace run into a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Naive sentence units: everything between `.` delimiters, trimmed.
///
/// Abbreviations and decimals are split too; downstream heuristics expect it.
pub fn dot_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split('.').map(str::trim)
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Longest prefix of `text` holding at most `n` chars.
pub fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// First `max_chars` chars of `text`, with `...` appended when anything was cut.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let head = take_chars(text, max_chars);
    if head.len() < text.len() {
        format!("{head}...")
    } else {
        head.to_string()
    }
}

/// Slice spanning `before` chars ahead of byte offset `start` through `after`
/// chars past byte offset `end`, clipped to the text.
pub fn context_window(text: &str, start: usize, end: usize, before: usize, after: usize) -> &str {
    let ctx_start = step_back(text, start, before);
    let ctx_end = step_forward(text, end, after);
    &text[ctx_start..ctx_end]
}

fn step_back(text: &str, pos: usize, n: usize) -> usize {
    if n == 0 {
        return pos;
    }
    text[..pos]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map_or(0, |(idx, _)| idx)
}

fn step_forward(text: &str, pos: usize, n: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(idx, _)| pos + idx)
}
