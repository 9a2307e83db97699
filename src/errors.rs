//! Error types for the overlay pipeline
//!
//! Failures are per-line and non-fatal: the scan drivers log them and
//! keep going, so one bad line never costs the rest of the pass.

use thiserror::Error;

/// Top-level overlay error type
#[derive(Debug, Clone, Error)]
pub enum OverlayError {
    /// The host reported a visible range but could not resolve a line
    /// containing an offset inside it
    #[error("no line at offset {0}")]
    LineUnavailable(usize),

    /// Overlay output could not be serialized for the substrate
    #[error("overlay serialization failed: {0}")]
    Serialization(String),
}
