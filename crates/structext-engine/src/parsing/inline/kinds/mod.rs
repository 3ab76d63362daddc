//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and their scan.
//!
//! ## Types
//!
//! - **`Link`**: `[text](url)`
//! - **`Bold`**: `**text**`
//! - **`Italic`**: `*text*`, never adjacent to another `*`
//! - **`Strikethrough`**: `~~text~~`
//! - **`CodeSpan`**: `` `text` ``
//!
//! Each `scan` reports every candidate it finds; resolving overlaps between
//! kinds is the parser's job.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strikethrough;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::Link;
pub use strikethrough::Strikethrough;

use regex::Regex;

use super::types::{InlineRun, SpannedRun};
use crate::parsing::span::Span;

/// Pushes one candidate per match of a single-capture delimiter pattern.
fn scan_delimited(
    re: &Regex,
    text: &str,
    out: &mut Vec<SpannedRun>,
    make: impl Fn(String) -> InlineRun,
) {
    for caps in re.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push(SpannedRun {
            span: Span::new(whole.start(), whole.end()),
            run: make(inner.as_str().to_string()),
        });
    }
}
