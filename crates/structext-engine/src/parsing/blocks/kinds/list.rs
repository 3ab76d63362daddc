use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::{OrderedItem, UnorderedItem};

/// A list found in a gap, with the text around it.
///
/// Every item line between the first and the last belongs to the one list;
/// other non-blank lines in that range continue the item above them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayout<T> {
    pub leading: String,
    pub items: Vec<T>,
    pub trailing: String,
}

/// Item syntax shared by both list kinds.
pub trait ListMarker: Sized {
    /// Parses a line into an item if it carries this kind's marker.
    fn parse(line: &str) -> Option<Self>;

    /// Appends a continuation line to the item.
    fn continue_with(&mut self, line: &str);

    fn matches(text: &str) -> bool {
        text.lines().any(|l| Self::parse(l).is_some())
    }

    fn layout(text: &str) -> Option<ListLayout<Self>> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| Self::parse(l).is_some())?;
        let last = lines.iter().rposition(|l| Self::parse(l).is_some())?;

        let mut items: Vec<Self> = vec![];
        for line in &lines[first..=last] {
            match Self::parse(line) {
                Some(item) => items.push(item),
                None if line.trim().is_empty() => {}
                None => {
                    if let Some(prev) = items.last_mut() {
                        prev.continue_with(line.trim());
                    }
                }
            }
        }

        Some(ListLayout {
            leading: lines[..first].join("\n"),
            items,
            trailing: lines[last + 1..].join("\n"),
        })
    }
}

fn join_continuation(content: &mut String, line: &str) {
    if !content.is_empty() {
        content.push(' ');
    }
    content.push_str(line);
}

/// `1. item` lines. The number is kept exactly as written.
pub struct OrderedList;

impl OrderedList {
    pub fn pattern() -> &'static Regex {
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        ORDERED.get_or_init(|| Regex::new(r"^(\d{1,2})\.\s+(.*)$").expect("Invalid ordered list regex"))
    }
}

impl ListMarker for OrderedItem {
    fn parse(line: &str) -> Option<Self> {
        let caps = OrderedList::pattern().captures(line)?;
        Some(OrderedItem {
            number: caps.get(1)?.as_str().to_string(),
            content: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        })
    }

    fn continue_with(&mut self, line: &str) {
        join_continuation(&mut self.content, line);
    }
}

/// `- item`, `* item` and `+ item` lines, nested by indentation.
pub struct UnorderedList;

impl UnorderedList {
    /// Leading whitespace per nesting level.
    pub const INDENT_WIDTH: usize = 2;

    pub fn pattern() -> &'static Regex {
        static UNORDERED: OnceLock<Regex> = OnceLock::new();
        UNORDERED.get_or_init(|| Regex::new(r"^(\s*)[-*+]\s+(.*)$").expect("Invalid unordered list regex"))
    }
}

impl ListMarker for UnorderedItem {
    fn parse(line: &str) -> Option<Self> {
        let caps = UnorderedList::pattern().captures(line)?;
        let indent = caps.get(1).map_or(0, |m| m.as_str().len());
        Some(UnorderedItem {
            level: indent / UnorderedList::INDENT_WIDTH,
            content: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        })
    }

    fn continue_with(&mut self, line: &str) {
        join_continuation(&mut self.content, line);
    }
}
