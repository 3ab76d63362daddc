//! # Block Kinds
//!
//! Block-specific types that own their syntax knowledge. Detectors call
//! into these; they never hardcode a delimiter themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod section;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::{Heading, HeadingLayout, HeadingPart};
pub use list::{ListLayout, ListMarker, OrderedList, UnorderedList};
pub use paragraph::Paragraph;
pub use section::Section;
pub use table::{Table, TableLayout};
