//! Style directives handed to the rendering substrate
//!
//! The substrate receives pre-computed spans, colors, and connector
//! geometry and paints them without further interpretation. Everything
//! here serializes, so hosts behind a string boundary can take the
//! whole overlay as JSON.

use super::core::Span;
use crate::errors::OverlayError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An HSL color
///
/// The native color space of the overlay: group and syllable colors are
/// computed as hue rotations at fixed saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0..360)
    pub hue: u16,

    /// Saturation percentage
    pub saturation: u8,

    /// Lightness percentage
    pub lightness: u8,
}

impl Hsl {
    /// Create a new color
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Hsl {
    /// CSS form, e.g. `hsl(120 50% 30%)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {}% {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// A single style directive
///
/// Closed set so any renderer can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StyleDirective {
    /// Paint the span's background in a solid color
    Background { color: Hsl },

    /// De-emphasize the span
    Opacity { value: f32 },
}

/// A styled range ready for the substrate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Where the style applies
    pub span: Span,

    /// What to paint there
    pub style: StyleDirective,
}

impl Annotation {
    /// Create a new annotation
    pub fn new(span: Span, style: StyleDirective) -> Self {
        Self { span, style }
    }
}

/// One pass worth of annotations, ordered by ascending start offset
///
/// The host keeps the previous list until a new pass replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayList {
    /// Styled ranges in document order
    pub annotations: Vec<Annotation>,
}

impl OverlayList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            annotations: Vec::new(),
        }
    }

    /// Append an annotation
    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Number of annotations in this pass
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Check if the pass produced nothing
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Serialize for hosts that take the overlay across a string boundary
    pub fn to_json(&self) -> Result<String, OverlayError> {
        serde_json::to_string(self).map_err(|e| OverlayError::Serialization(e.to_string()))
    }
}

impl Default for OverlayList {
    fn default() -> Self {
        Self::new()
    }
}

/// On-screen pixel coordinates reported by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A connector joining two occurrences of the same token
///
/// Pure geometry plus a color; how the segment is drawn (SVG, canvas,
/// terminal cells) is the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Anchor of the earlier occurrence
    pub from: ScreenPoint,

    /// Anchor of the later occurrence
    pub to: ScreenPoint,

    /// Stroke color
    pub color: Hsl,
}

impl Connector {
    /// Create a new connector
    pub fn new(from: ScreenPoint, to: ScreenPoint, color: Hsl) -> Self {
        Self { from, to, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_css_form() {
        let color = Hsl::new(120, 50, 30);
        assert_eq!(color.to_string(), "hsl(120 50% 30%)");
    }

    #[test]
    fn test_style_directive_serializes_tagged() {
        let annotation = Annotation::new(
            Span::new(0, 7),
            StyleDirective::Background {
                color: Hsl::new(220, 100, 30),
            },
        );
        let json = serde_json::to_string(&annotation).unwrap();
        assert!(json.contains("\"kind\":\"background\""), "got {json}");
        assert!(json.contains("\"hue\":220"), "got {json}");
    }

    #[test]
    fn test_overlay_list_to_json() {
        let mut list = OverlayList::new();
        list.push(Annotation::new(
            Span::new(7, 9),
            StyleDirective::Opacity { value: 0.5 },
        ));
        let json = list.to_json().unwrap();
        assert!(json.contains("\"kind\":\"opacity\""), "got {json}");
        assert_eq!(list.len(), 1);
    }
}
