//! Annotation pass
//!
//! Walks the host's visible ranges once, runs every marked line through
//! normalize → classify → group → locate, and collects the styled
//! ranges in document order. Within one line the marker, bracket, and
//! rhyme ranges come out in that order with non-decreasing offsets.

use super::locate;
use super::visit_visible_lines;
use crate::host::{DocumentView, RhymeExtractor, SyllableEstimator};
use crate::models::core::LineView;
use crate::models::style::{Annotation, OverlayList, StyleDirective};
use crate::verse::classify::classify;
use crate::verse::groups::RhymeGroups;
use crate::verse::marker::is_verse_marked;
use crate::verse::normalize;

/// Annotation engine holding the host's phonetic collaborators
///
/// The engine itself carries no per-pass state and is reusable across
/// passes; rhyme grouping lives in a local accumulator per call.
pub struct OverlayEngine<S, R> {
    syllables: S,
    rhymes: R,
}

impl<S: SyllableEstimator, R: RhymeExtractor> OverlayEngine<S, R> {
    /// Create an engine around the host's phonetic primitives
    pub fn new(syllables: S, rhymes: R) -> Self {
        Self { syllables, rhymes }
    }

    /// Compute one pass of annotations over the visible document
    ///
    /// One malformed line degrades to fewer ranges for that line; it
    /// never aborts the rest of the pass.
    pub fn compute_overlay(&self, view: &impl DocumentView) -> OverlayList {
        let mut list = OverlayList::new();
        let mut groups = RhymeGroups::new();
        visit_visible_lines(view, |line| {
            if is_verse_marked(&line.text) {
                self.annotate_line(line, &mut groups, &mut list);
            }
        });
        list
    }

    /// Emit the marker, bracket, and rhyme ranges for one marked line
    fn annotate_line(&self, line: &LineView, groups: &mut RhymeGroups, list: &mut OverlayList) {
        let normalized = normalize::normalize(normalize::payload(&line.text));
        let facts = classify(&normalized, &self.syllables, &self.rhymes);

        // floor keeps this line's contribution non-overlapping even
        // when the trailing-word search falls back to the line head
        let mut floor = line.from;

        if facts.syllables > 0 {
            let span = locate::marker_span(line);
            floor = span.end;
            list.push(Annotation::new(
                span,
                StyleDirective::Background {
                    color: locate::syllable_color(facts.syllables),
                },
            ));
        }

        if let Some(span) = locate::bracket_span(line) {
            floor = floor.max(span.end);
            list.push(Annotation::new(
                span,
                StyleDirective::Opacity {
                    value: locate::BRACKET_OPACITY,
                },
            ));
        }

        if normalized.is_empty() {
            return;
        }
        let Some(word) = normalize::last_word(&line.text) else {
            return;
        };
        match facts.rhyme.as_deref() {
            Some(signature) => {
                let ordinal = groups.ordinal(signature);
                let span = locate::rhyme_span(line, &word);
                if span.start >= floor {
                    list.push(Annotation::new(
                        span,
                        StyleDirective::Background {
                            color: RhymeGroups::color(ordinal),
                        },
                    ));
                } else {
                    log::debug!("rhyme highlight for {:?} would overlap the line head", word);
                }
            }
            None => {
                log::warn!("no rhyme for trailing word {:?} in {:?}", word, normalized);
            }
        }
    }
}
