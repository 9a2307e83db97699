//! Core position types for the overlay pipeline
//!
//! Pure document offsets and per-line facts, with no knowledge of how
//! the host stores or renders text.

use serde::{Deserialize, Serialize};

/// A half-open byte range in the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,

    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if an offset falls inside the span
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// A document line as reported by the host
///
/// Recreated by the host on every edit; this crate only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    /// Offset of the first byte of the line
    pub from: usize,

    /// Offset one past the last byte of the line (the newline excluded)
    pub to: usize,

    /// Line text without the trailing newline
    pub text: String,
}

impl LineView {
    /// Create a line view; `to` is derived from the text length
    pub fn new(from: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let to = from + text.len();
        Self { from, to, text }
    }

    /// Span covering the whole line
    pub fn span(&self) -> Span {
        Span::new(self.from, self.to)
    }
}

/// Phonetic facts derived for one marked line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticFacts {
    /// Estimated syllable count; 0 means no estimate and suppresses the
    /// syllable decoration for the line
    pub syllables: usize,

    /// Rhyme signature of the line, when one could be derived
    pub rhyme: Option<String>,
}
