use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::text::{char_len, count_words, normalize_whitespace};

pub const DEFAULT_MIN_TEXT_CHARS: usize = 100;

const UNTITLED: &str = "Untitled";

/// Extracted document text, whitespace-normalized and long enough to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    title: String,
    source: String,
    text: String,
    word_count: usize,
}

impl Document {
    pub fn new(title: &str, source: &str, raw_text: &str) -> Result<Self> {
        Self::with_min_chars(title, source, raw_text, DEFAULT_MIN_TEXT_CHARS)
    }

    pub fn with_min_chars(title: &str, source: &str, raw_text: &str, min: usize) -> Result<Self> {
        let text = normalize_whitespace(raw_text);
        let actual = char_len(&text);
        if actual < min {
            return Err(Error::InsufficientText { min, actual });
        }

        let title = match title.trim() {
            "" => UNTITLED,
            trimmed => trimmed,
        };
        Ok(Self {
            title: title.to_string(),
            source: source.to_string(),
            word_count: count_words(&text),
            text,
        })
    }

    /// Load a UTF-8 text file; the file stem becomes the title.
    pub fn from_path(path: &Path, min: usize) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::with_min_chars(&title, &path.display().to_string(), &raw, min)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}
