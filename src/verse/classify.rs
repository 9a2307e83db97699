//! Per-line phonetic classification
//!
//! Thin wrapper over the host's phonetic primitives. Both primitives
//! see the normalized text, never the raw line; absent results are
//! expected outcomes, not errors, and simply suppress the matching
//! decoration upstream.

use crate::host::{RhymeExtractor, SyllableEstimator};
use crate::models::core::PhoneticFacts;

/// Derive syllable count and rhyme signature for one normalized line
pub fn classify(
    normalized: &str,
    syllables: &dyn SyllableEstimator,
    rhymes: &dyn RhymeExtractor,
) -> PhoneticFacts {
    PhoneticFacts {
        syllables: syllables.syllables(normalized),
        rhyme: rhymes.rhyming_part(normalized),
    }
}
