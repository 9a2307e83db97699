//! External collaborator seams
//!
//! The pipeline never owns a document, a renderer, or a phonetic model.
//! The host editor supplies document and viewport access behind
//! [`DocumentView`], and the two phonetic primitives behind
//! [`SyllableEstimator`] and [`RhymeExtractor`]. Different hosts can
//! back these with different editors and different phonetic engines.

use crate::models::core::{LineView, Span};
use crate::models::style::ScreenPoint;

/// Read-only view of the host document and viewport
pub trait DocumentView {
    /// Currently visible byte ranges, ascending and non-overlapping
    fn visible_ranges(&self) -> Vec<Span>;

    /// The line containing `offset`, if the host can resolve one
    fn line_at(&self, offset: usize) -> Option<LineView>;

    /// On-screen pixel coordinates of `offset`; `None` when the host
    /// cannot place it (e.g. scrolled out of view)
    fn coords_at(&self, offset: usize) -> Option<ScreenPoint>;
}

/// Estimates syllables in a phonetics-friendly string
pub trait SyllableEstimator {
    /// Non-negative estimate; 0 means "no estimate"
    fn syllables(&self, text: &str) -> usize;
}

/// Extracts the rhyming suffix of the last word of a string
pub trait RhymeExtractor {
    /// `None` is a valid outcome for empty or unpronounceable input
    fn rhyming_part(&self, text: &str) -> Option<String>;
}

/// What changed since the previous pass
///
/// The host raises one of these per editor event and asks which passes
/// need a rebuild; a new event simply supersedes the previous result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshEvent {
    /// Document text changed
    pub doc_changed: bool,

    /// Viewport scrolled or resized
    pub viewport_changed: bool,
}

impl RefreshEvent {
    /// Annotations and rate dimming follow both content and scrolling
    pub fn rebuild_annotations(&self) -> bool {
        self.doc_changed || self.viewport_changed
    }

    /// Connectors target on-screen geometry that only moves when the
    /// content does; pure scrolling keeps the previous set
    pub fn rebuild_connectors(&self) -> bool {
        self.doc_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_scroll_rebuilds_annotations_only() {
        let event = RefreshEvent {
            doc_changed: false,
            viewport_changed: true,
        };
        assert!(event.rebuild_annotations());
        assert!(!event.rebuild_connectors());
    }

    #[test]
    fn test_edit_rebuilds_everything() {
        let event = RefreshEvent {
            doc_changed: true,
            viewport_changed: false,
        };
        assert!(event.rebuild_annotations());
        assert!(event.rebuild_connectors());
    }

    #[test]
    fn test_idle_event_rebuilds_nothing() {
        let event = RefreshEvent::default();
        assert!(!event.rebuild_annotations());
        assert!(!event.rebuild_connectors());
    }
}
