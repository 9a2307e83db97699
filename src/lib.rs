//! Verse Overlay Engine
//!
//! Annotation pipeline for verse-marked lines in a live-coding buffer.
//! Lines shaped like `/* 3 */ {Osc.ar * 2}` are normalized into
//! phonetics-friendly text, classified for syllables and rhyme, and
//! turned into styled ranges plus token connectors for the host editor
//! to paint. The editor, the renderer, and the phonetic primitives all
//! stay on the host side, behind the traits in [`host`].

pub mod errors;
pub mod host;
pub mod models;
pub mod overlay;
pub mod verse;

// Re-export commonly used types
pub use errors::OverlayError;
pub use host::{DocumentView, RefreshEvent, RhymeExtractor, SyllableEstimator};
pub use models::core::{LineView, PhoneticFacts, Span};
pub use models::style::{Annotation, Connector, Hsl, OverlayList, ScreenPoint, StyleDirective};
pub use overlay::{compute_connectors, compute_rate_dim, OverlayEngine};
