use serde::Serialize;

/// One item of an [`Block::OrderedList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedItem {
    /// The digits exactly as written; `3.` after `1.` stays `"3"`.
    pub number: String,
    pub content: String,
}

/// One item of an [`Block::UnorderedList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnorderedItem {
    /// Nesting level: leading whitespace length divided by two.
    pub level: usize,
    pub content: String,
}

/// A unit of document structure produced by the block extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Running prose.
    Paragraph { content: String },
    /// A short lead-in line recognised by the header heuristic (trailing `:` removed).
    Header { content: String },
    /// An explicit `#`-style heading.
    Heading { level: u8, content: String },
    /// A titled group of paragraphs.
    Section { header: String, content: Vec<String> },
    /// A pipe table. Every row has exactly `headers.len()` cells.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    OrderedList { items: Vec<OrderedItem> },
    UnorderedList { items: Vec<UnorderedItem> },
    /// A fenced code region. `language` defaults to `"text"`.
    CodeBlock { language: String, code: String },
    /// A merged run of `>` lines.
    Blockquote { content: String },
}

impl Block {
    pub const DEFAULT_LANGUAGE: &'static str = "text";

    pub fn paragraph(content: impl Into<String>) -> Self {
        Block::Paragraph {
            content: content.into(),
        }
    }

    pub fn header(content: impl Into<String>) -> Self {
        Block::Header {
            content: content.into(),
        }
    }

    /// Returns the snake_case variant name, matching the serialized `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Header { .. } => "header",
            Block::Heading { .. } => "heading",
            Block::Section { .. } => "section",
            Block::Table { .. } => "table",
            Block::OrderedList { .. } => "ordered_list",
            Block::UnorderedList { .. } => "unordered_list",
            Block::CodeBlock { .. } => "code_block",
            Block::Blockquote { .. } => "blockquote",
        }
    }

    /// All textual fields of the block in reading order.
    ///
    /// Code is included verbatim; callers that tokenize inline markup should
    /// use [`Block::inline_texts`] instead.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Block::CodeBlock { language, code } => vec![language.as_str(), code.as_str()],
            other => other.inline_texts(),
        }
    }

    /// Text fields that may carry inline markup (everything except code).
    pub fn inline_texts(&self) -> Vec<&str> {
        match self {
            Block::Paragraph { content }
            | Block::Header { content }
            | Block::Heading { content, .. }
            | Block::Blockquote { content } => vec![content.as_str()],
            Block::Section { header, content } => std::iter::once(header.as_str())
                .chain(content.iter().map(String::as_str))
                .collect(),
            Block::Table { headers, rows } => headers
                .iter()
                .chain(rows.iter().flatten())
                .map(String::as_str)
                .collect(),
            Block::OrderedList { items } => items.iter().map(|i| i.content.as_str()).collect(),
            Block::UnorderedList { items } => items.iter().map(|i| i.content.as_str()).collect(),
            Block::CodeBlock { .. } => vec![],
        }
    }
}
