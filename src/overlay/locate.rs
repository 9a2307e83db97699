//! Range location for one marked line
//!
//! Maps logical facts (syllable count, trailing word) back onto byte
//! offsets in the original line text. Decoration ranges always address
//! the untouched source, never the normalized string.

use crate::models::core::{LineView, Span};
use crate::models::style::Hsl;
use crate::verse::marker::MARKER_PREFIX_LEN;

/// Hue step between adjacent syllable counts. Denser than the rhyme
/// scale so the two facts stay visually distinguishable.
const SYLLABLE_HUE_STEP: usize = 55;
const SYLLABLE_SATURATION: u8 = 100;
const SYLLABLE_LIGHTNESS: u8 = 30;

/// Opacity for the notation boilerplate between marker and payload
pub const BRACKET_OPACITY: f32 = 0.5;

/// Background color encoding a syllable count
pub fn syllable_color(count: usize) -> Hsl {
    Hsl::new(
        ((count * SYLLABLE_HUE_STEP) % 360) as u16,
        SYLLABLE_SATURATION,
        SYLLABLE_LIGHTNESS,
    )
}

/// Span of the marker prefix at the head of the line
pub fn marker_span(line: &LineView) -> Span {
    Span::new(line.from, line.from + MARKER_PREFIX_LEN)
}

/// Span from the end of the marker through the payload's `{`
///
/// `None` when the line has no `{`, or when the `{` sits inside the
/// marker prefix and the range would be inverted.
pub fn bracket_span(line: &LineView) -> Option<Span> {
    let open = line.text.find('{')?;
    let start = line.from + MARKER_PREFIX_LEN;
    let end = line.from + open + 1;
    (end >= start).then(|| Span::new(start, end))
}

/// Offset of the trailing-word occurrence the rhyme highlight covers
///
/// Restarts the search one word-length past each hit, so the rightmost
/// occurrence wins when the word is ambiguous. The first search origin
/// is the word's own length; a sole occurrence before that origin falls
/// back to the line head.
pub fn last_occurrence(text: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    let mut found = 0;
    loop {
        let origin = found + word.len();
        let Some(rest) = text.get(origin..) else {
            break;
        };
        match rest.find(word) {
            Some(i) => found = origin + i,
            None => break,
        }
    }
    found
}

/// Span of the rhyme-word highlight in document offsets
pub fn rhyme_span(line: &LineView, word: &str) -> Span {
    let at = line.from + last_occurrence(&line.text, word);
    Span::new(at, at + word.len())
}
