//! Verse analysis
//!
//! Everything that turns one marked line into phonetic facts:
//!
//! - `marker`: which lines participate at all
//! - `normalize`: notation payload → phonetics-friendly text
//! - `classify`: facts from the host's phonetic primitives
//! - `groups`: per-scan rhyme group ordinals and colors

pub mod classify;
pub mod groups;
pub mod marker;
pub mod normalize;

// Re-exports for convenience
pub use classify::classify;
pub use groups::RhymeGroups;
pub use marker::{is_verse_marked, MARKER_PREFIX_LEN};
