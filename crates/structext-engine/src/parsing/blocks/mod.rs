//! # Block Extraction
//!
//! Two-pass block extraction over the original text.
//!
//! ## Passes
//!
//! 1. **Zones** (`classify` + `zones`): each line is classified into a
//!    `LineClass` (blank, fence opener, quote prefix) and a `ZoneBuilder`
//!    turns the lines into ordered `Zone`s: code, quote or gap. Spans are
//!    byte offsets into the input.
//!
//! 2. **Detectors** (`detect`): every gap is structured by the first
//!    matching detector of the priority chain
//!    (table, ordered list, unordered list, headings, paragraphs).
//!
//! ## Modules
//!
//! - **`types`**: `Block` and the list item types
//! - **`kinds`**: Block-specific syntax knowledge (fences, quotes, tables, lists, headings)
//! - **`classify`**: `ZoneLineClassifier` produces `LineClass` for each line
//! - **`zones`**: `ZoneBuilder` state machine and `scan_zones`
//! - **`detect`**: `Detector` chain and `structure_gap`
//!
//! ## Key Invariants
//!
//! - Fenced code is a raw zone: no other detector ever sees its content
//! - Zones are ordered and disjoint; gap text never includes code or quotes
//! - Every table row has exactly as many cells as the header

pub mod classify;
pub mod detect;
pub mod kinds;
pub mod types;
pub mod zones;

pub use classify::{LineClass, ZoneLineClassifier};
pub use detect::{Detector, structure_gap};
pub use types::{Block, OrderedItem, UnorderedItem};
pub use zones::{Zone, ZoneBuilder, scan_zones};
