//! Rate-suffix dimming
//!
//! `.ar` / `.ir` / `.kr` suffixes carry rate plumbing, not verse
//! content. Every occurrence in the viewport is faded, marked line or
//! not, so the payload reads as the foreground.

use super::visit_visible_lines;
use crate::host::DocumentView;
use crate::models::core::Span;
use crate::models::style::{Annotation, StyleDirective};
use crate::verse::normalize::RATE_SUFFIX;

/// Opacity applied to every rate suffix
pub const RATE_DIM_OPACITY: f32 = 0.4;

/// Collect a dimming annotation for every rate suffix in view
pub fn compute_rate_dim(view: &impl DocumentView) -> Vec<Annotation> {
    let mut marks = Vec::new();
    visit_visible_lines(view, |line| {
        for suffix in RATE_SUFFIX.find_iter(&line.text) {
            marks.push(Annotation::new(
                Span::new(line.from + suffix.start(), line.from + suffix.end()),
                StyleDirective::Opacity {
                    value: RATE_DIM_OPACITY,
                },
            ));
        }
    });
    marks
}
