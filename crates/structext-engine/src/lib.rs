pub mod heuristics;
pub mod parsing;
pub mod profile;

// Re-export key types for easier usage
pub use heuristics::{Heuristics, HeuristicsError, KeywordEmphasis, Topic, TopicSections};
pub use parsing::{
    Extractor,
    blocks::{Block, OrderedItem, UnorderedItem},
    extract,
    inline::{InlineRun, SpannedRun, tokenize, tokenize_spanned},
    span::Span,
};
pub use profile::{ContentKind, ContentProfile};
