//! # Classification Heuristics
//!
//! Everything the extractor guesses about prose (which lead-in lines are
//! headers, how many sentences make a paragraph, which optional rewrites run)
//! is data in [`Heuristics`]. The data is compiled once into
//! [`CompiledHeuristics`] and shared by every detector.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsing::{
    blocks::Block,
    inline::{InlineRun, tokenize_spanned},
};

#[derive(Debug, Error)]
pub enum HeuristicsError {
    #[error("Invalid discourse opener pattern {pattern:?}: {source}")]
    InvalidOpener {
        pattern: String,
        source: regex::Error,
    },

    #[error("Invalid keyword list for {context}: {source}")]
    InvalidKeywords {
        context: String,
        source: regex::Error,
    },

    #[error("sentences_per_paragraph must be at least 1")]
    ZeroSentencesPerParagraph,
}

/// Tunable classification heuristics.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// A lead block shorter than this (in chars) that ends with `:` is a header.
    pub header_max_chars: usize,
    /// Regex sources; a lead block matching any of them is a header.
    pub discourse_openers: Vec<String>,
    /// A lead block starting with one of these words is a header.
    pub label_words: Vec<String>,
    /// Sentences joined per paragraph when blank lines don't split the text.
    pub sentences_per_paragraph: usize,
    pub keyword_emphasis: KeywordEmphasis,
    pub topic_sections: TopicSections,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            header_max_chars: 100,
            discourse_openers: vec![
                r"(?i)^(?:here['’]s|here is|here are|let me|let['’]s|in summary|to summarize|in conclusion|below is|below are)\b"
                    .to_string(),
                r"^[A-Z][^.!?\n]*:$".to_string(),
            ],
            label_words: [
                "Introduction",
                "Overview",
                "Summary",
                "Conclusion",
                "Note",
                "Important",
                "Key Point",
            ]
            .map(String::from)
            .to_vec(),
            sentences_per_paragraph: 2,
            keyword_emphasis: KeywordEmphasis::default(),
            topic_sections: TopicSections::default(),
        }
    }
}

/// Wraps configured keywords in `**` inside paragraph and section text.
///
/// Off by default: unconditional emphasis turned ordinary words bold
/// throughout a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordEmphasis {
    pub enabled: bool,
    pub keywords: Vec<String>,
}

impl Default for KeywordEmphasis {
    fn default() -> Self {
        Self {
            enabled: false,
            keywords: [
                "WordPress",
                "WooCommerce",
                "portfolio website",
                "personal portfolio",
                "ecommerce",
                "e-commerce",
                "website",
                "web",
                "mobile app",
                "theme",
                "plugin",
                "design",
                "layout",
                "strategy",
                "content",
                "page",
                "post",
                "product",
                "marketing",
                "integration",
                "platform",
                "system",
                "campaign",
                "SEO",
                "responsive",
                "mobile",
                "social media",
                "user experience",
                "UX",
                "UI",
                "target audience",
                "key features",
                "key milestone",
                "key event",
                "success",
                "challenge",
                "important",
                "significant",
                "crucial",
                "essential",
                "fundamental",
                "critical",
                "step",
                "phase",
                "stage",
                "milestone",
                "timeline",
                "goal",
                "objective",
                "target",
                "leadership",
                "partnership",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// Groups fallback paragraphs under titled sections by topic keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicSections {
    pub enabled: bool,
    pub topics: Vec<Topic>,
}

/// A section title and the keywords (case-insensitive substrings) that
/// signal the text talks about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub keywords: Vec<String>,
}

impl Topic {
    fn new(title: &str, keywords: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Default for TopicSections {
    fn default() -> Self {
        Self {
            enabled: false,
            topics: vec![
                Topic::new("Introduction", &["introduction", "overview", "background"]),
                Topic::new("Strategy & Approach", &["strategy", "approach", "method"]),
                Topic::new(
                    "Key Benefits & Features",
                    &["benefit", "advantage", "feature", "key point"],
                ),
                Topic::new(
                    "Challenges & Solutions",
                    &["challenge", "obstacle", "issue", "problem"],
                ),
                Topic::new("Timeline & Milestones", &["timeline", "schedule", "deadline"]),
                Topic::new("Target Audience", &["target", "audience", "market", "customer"]),
                Topic::new("Channels & Platforms", &["channel", "platform", "media", "social"]),
                Topic::new(
                    "Content & Creative Strategy",
                    &["content", "creative", "execution", "message"],
                ),
                Topic::new("Budget & Resources", &["budget", "cost", "investment", "resource"]),
                Topic::new("Success Metrics", &["metric", "measure", "success", "kpi"]),
                Topic::new(
                    "Conclusion & Next Steps",
                    &["conclusion", "summary", "next step", "recommendation"],
                ),
            ],
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledTopic {
    title: String,
    pattern: Regex,
}

/// [`Heuristics`] with every pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledHeuristics {
    header_max_chars: usize,
    openers: Vec<Regex>,
    label_words: Vec<String>,
    sentences_per_paragraph: usize,
    emphasis: Option<Regex>,
    topics: Option<Vec<CompiledTopic>>,
}

impl CompiledHeuristics {
    pub fn compile(h: &Heuristics) -> Result<Self, HeuristicsError> {
        if h.sentences_per_paragraph == 0 {
            return Err(HeuristicsError::ZeroSentencesPerParagraph);
        }

        let openers = h
            .discourse_openers
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| HeuristicsError::InvalidOpener {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let emphasis = if h.keyword_emphasis.enabled {
            keyword_pattern(&h.keyword_emphasis.keywords, true).map_err(|source| {
                HeuristicsError::InvalidKeywords {
                    context: "keyword emphasis".to_string(),
                    source,
                }
            })?
        } else {
            None
        };

        let topics = if h.topic_sections.enabled {
            let mut compiled = vec![];
            for topic in &h.topic_sections.topics {
                let pattern = keyword_pattern(&topic.keywords, false).map_err(|source| {
                    HeuristicsError::InvalidKeywords {
                        context: format!("topic {:?}", topic.title),
                        source,
                    }
                })?;
                if let Some(pattern) = pattern {
                    compiled.push(CompiledTopic {
                        title: topic.title.clone(),
                        pattern,
                    });
                }
            }
            Some(compiled)
        } else {
            None
        };

        Ok(Self {
            header_max_chars: h.header_max_chars,
            openers,
            label_words: h.label_words.clone(),
            sentences_per_paragraph: h.sentences_per_paragraph,
            emphasis,
            topics,
        })
    }

    pub fn sentences_per_paragraph(&self) -> usize {
        self.sentences_per_paragraph
    }

    /// Header heuristic for a lead block.
    pub fn is_header(&self, block: &str) -> bool {
        let t = block.trim();
        if t.is_empty() {
            return false;
        }

        (t.chars().count() < self.header_max_chars && t.ends_with(':'))
            || self.openers.iter().any(|re| re.is_match(t))
            || self.label_words.iter().any(|w| starts_with_word(t, w))
    }

    /// Classifies a lead block as a Header (trailing colon removed) or a Paragraph.
    pub fn lead_block(&self, block: String) -> Block {
        if self.is_header(&block) {
            let content = block.trim().trim_end_matches(':').trim_end();
            if !content.is_empty() {
                return Block::header(content);
            }
        }
        Block::paragraph(block)
    }

    /// Titles of enabled topics mentioned in `text`, in configured order.
    ///
    /// Returns `None` when topic sections are disabled.
    pub fn topics_in(&self, text: &str) -> Option<Vec<&str>> {
        let topics = self.topics.as_ref()?;
        Some(
            topics
                .iter()
                .filter(|t| t.pattern.is_match(text))
                .map(|t| t.title.as_str())
                .collect(),
        )
    }

    /// Applies keyword emphasis, if enabled.
    ///
    /// Keywords already inside a link, code span or any other inline markup
    /// are left alone.
    pub fn emphasize<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(re) = &self.emphasis else {
            return Cow::Borrowed(text);
        };

        let guarded: Vec<_> = tokenize_spanned(text)
            .into_iter()
            .filter(|s| !matches!(s.run, InlineRun::Text(_)))
            .map(|s| s.span)
            .collect();

        let mut out = String::with_capacity(text.len() + 16);
        let mut last = 0usize;
        for m in re.find_iter(text) {
            let hit = crate::parsing::span::Span::new(m.start(), m.end());
            if guarded.iter().any(|g| g.intersects(hit)) {
                continue;
            }
            out.push_str(&text[last..m.start()]);
            out.push_str("**");
            out.push_str(m.as_str());
            out.push_str("**");
            last = m.end();
        }

        if last == 0 {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Builds a case-insensitive alternation, longest keyword first.
fn keyword_pattern(keywords: &[String], word_bounded: bool) -> Result<Option<Regex>, regex::Error> {
    let mut words: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    if words.is_empty() {
        return Ok(None);
    }
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.dedup();

    let alts = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    let source = if word_bounded {
        format!(r"\b(?:{alts})\b")
    } else {
        format!("(?:{alts})")
    };

    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map(Some)
}

fn starts_with_word(text: &str, word: &str) -> bool {
    match text.strip_prefix(word) {
        Some(rest) => !rest.starts_with(|c: char| c.is_alphanumeric()),
        None => false,
    }
}
