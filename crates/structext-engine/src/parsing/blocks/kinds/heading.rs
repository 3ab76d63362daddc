use std::sync::OnceLock;

use regex::Regex;

/// ATX heading block type: one to six `#` followed by whitespace.
pub struct Heading;

/// One heading and the text up to the next heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingPart {
    pub level: u8,
    pub title: String,
    pub body: String,
}

/// Headings found in a gap, with the text before the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLayout {
    pub leading: String,
    pub parts: Vec<HeadingPart>,
}

impl Heading {
    pub const MARK: char = '#';

    fn pattern() -> &'static Regex {
        static HEADING: OnceLock<Regex> = OnceLock::new();
        HEADING.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("Invalid heading regex"))
    }

    /// Parses a heading line into `(level, title)`.
    ///
    /// A closing run of `#` after whitespace is not part of the title. A line
    /// with an empty title is not a heading.
    pub fn parse(line: &str) -> Option<(u8, String)> {
        let caps = Self::pattern().captures(line)?;
        let level = u8::try_from(caps.get(1)?.as_str().len()).ok()?;
        let title = Self::strip_closing(caps.get(2).map_or("", |m| m.as_str()).trim());
        if title.is_empty() {
            return None;
        }
        Some((level, title.to_string()))
    }

    fn strip_closing(title: &str) -> &str {
        let body = title.trim_end_matches(Self::MARK);
        if body.is_empty() {
            return body;
        }
        match body.strip_suffix([' ', '\t']) {
            Some(rest) if body.len() < title.len() => rest.trim_end(),
            _ => title,
        }
    }

    pub fn matches(text: &str) -> bool {
        text.lines().any(|l| Self::parse(l).is_some())
    }

    pub fn layout(text: &str) -> Option<HeadingLayout> {
        let mut leading: Vec<&str> = vec![];
        let mut parts: Vec<HeadingPart> = vec![];
        let mut body: Vec<&str> = vec![];

        for line in text.lines() {
            if let Some((level, title)) = Self::parse(line) {
                if let Some(prev) = parts.last_mut() {
                    prev.body = body.join("\n");
                }
                body.clear();
                parts.push(HeadingPart {
                    level,
                    title,
                    body: String::new(),
                });
            } else if parts.is_empty() {
                leading.push(line);
            } else {
                body.push(line);
            }
        }

        let last = parts.last_mut()?;
        last.body = body.join("\n");

        Some(HeadingLayout {
            leading: leading.join("\n"),
            parts,
        })
    }
}
