//! Token connectors across verse lines
//!
//! Independent pass pairing repeated capitalized tokens in the visible
//! document. Output is pure geometry plus a color; how a segment gets
//! drawn (SVG, canvas, terminal cells) is the host's business.

use lazy_static::lazy_static;
use regex::Regex;

use super::visit_visible_lines;
use crate::host::DocumentView;
use crate::models::style::{Connector, Hsl, ScreenPoint};
use crate::verse::marker::is_verse_marked;

lazy_static! {
    /// A capitalized identifier: uppercase head, alphanumeric tail
    static ref TOKEN: Regex = Regex::new(r"[A-Z][a-zA-Z0-9]+").unwrap();
}

/// Vertical lift so connectors anchor above the glyph row
const ANCHOR_LIFT: f32 = 20.0;

/// Hue step between token position indices. Same formula as the rhyme
/// group scale, separate ordinal domain.
const CONNECTOR_HUE_STEP: usize = 60;
const CONNECTOR_SATURATION: u8 = 80;
const CONNECTOR_LIGHTNESS: u8 = 50;

/// A token occurrence awaiting pairing
#[derive(Debug, Clone)]
struct TokenAnchor {
    name: String,
    at: ScreenPoint,
}

/// Pair repeated tokens across the visible marked lines
///
/// Tokens are scanned in document order; each pairs with the nearest
/// following occurrence of identical text, so duplicates beyond a pair
/// chain to their own next match instead of being dropped. A token the
/// host cannot place anchors at the origin.
pub fn compute_connectors(view: &impl DocumentView) -> Vec<Connector> {
    let mut anchors: Vec<TokenAnchor> = Vec::new();
    visit_visible_lines(view, |line| {
        if !is_verse_marked(&line.text) {
            return;
        }
        for token in TOKEN.find_iter(&line.text) {
            let at = view.coords_at(line.from + token.start()).unwrap_or_default();
            anchors.push(TokenAnchor {
                name: token.as_str().to_string(),
                at: ScreenPoint::new(at.x, at.y - ANCHOR_LIFT),
            });
        }
    });

    let mut connectors = Vec::new();
    for (index, anchor) in anchors.iter().enumerate() {
        if let Some(next) = anchors[index + 1..].iter().find(|a| a.name == anchor.name) {
            connectors.push(Connector::new(anchor.at, next.at, connector_color(index)));
        }
    }
    connectors
}

/// Stroke color for the connector starting at token position `index`
fn connector_color(index: usize) -> Hsl {
    Hsl::new(
        ((index * CONNECTOR_HUE_STEP) % 360) as u16,
        CONNECTOR_SATURATION,
        CONNECTOR_LIGHTNESS,
    )
}
