//! Verse marker detection
//!
//! Only lines opening with a numbered comment marker take part in the
//! pipeline; everything else in the buffer is left alone.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `/*`, whitespace, a single digit, whitespace, `*/` at line start
    static ref VERSE_MARKER: Regex = Regex::new(r"^/\*\s+[0-9]\s+\*/").unwrap();
}

/// Byte length of the `/* N */` prefix the syllable decoration covers
pub const MARKER_PREFIX_LEN: usize = 7;

/// True iff this line carries the verse marker
pub fn is_verse_marked(text: &str) -> bool {
    VERSE_MARKER.is_match(text)
}
