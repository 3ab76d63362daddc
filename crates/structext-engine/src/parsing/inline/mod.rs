//! # Inline Tokenizing
//!
//! Partitions one block's text into styled runs.
//!
//! ## Architecture
//!
//! Inline tokenizing is separate from block extraction and operates over a
//! single text field of a block (paragraph content, a table cell, a list item).
//!
//! The tokenizer pools candidates from five independent scans and resolves
//! overlaps afterwards:
//! - Scans run in priority order: Link, Bold, Italic, Strikethrough, Code
//! - Candidates are sorted by start offset; the earliest-starting one wins
//! - Text between accepted candidates becomes `Text` runs
//!
//! ## Modules
//!
//! - **`types`**: `InlineRun` enum and `SpannedRun`
//! - **`kinds`**: Inline-specific types with owned delimiters and scans
//! - **`cursor`**: `Cursor` for the hand-written italic scan
//! - **`parser`**: `tokenize()` / `tokenize_spanned()` entry points

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{tokenize, tokenize_spanned};
pub use types::{InlineRun, SpannedRun};
