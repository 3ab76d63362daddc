//! Coarse content profiling by keyword hits.
//!
//! The profile is informational: callers may use it to pick a presentation,
//! but block extraction never consults it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Marketing,
    Educational,
    Narrative,
    Instructional,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Marketing,
        ContentKind::Educational,
        ContentKind::Narrative,
        ContentKind::Instructional,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            ContentKind::Marketing => &[
                "campaign", "brand", "audience", "marketing", "conversion", "customer", "seo",
                "social media", "engagement", "launch",
            ],
            ContentKind::Educational => &[
                "learn", "concept", "definition", "example", "theory", "explain", "lesson",
                "understand", "student", "principle",
            ],
            ContentKind::Narrative => &[
                "once upon", "story", "character", "journey", "suddenly", "remember", "felt",
                "ago", "adventure", "ending",
            ],
            ContentKind::Instructional => &[
                "step", "install", "configure", "run", "click", "follow", "first", "then",
                "next", "finally",
            ],
        }
    }
}

/// Keyword hit counts per [`ContentKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentProfile {
    pub marketing: usize,
    pub educational: usize,
    pub narrative: usize,
    pub instructional: usize,
}

impl ContentProfile {
    /// Counts word-bounded, case-insensitive keyword occurrences in `text`.
    pub fn of(text: &str) -> Self {
        let lower = text.to_lowercase();
        let mut profile = Self::default();
        for kind in ContentKind::ALL {
            let hits = kind.keywords().iter().map(|k| count_word(&lower, k)).sum();
            *profile.score_mut(kind) = hits;
        }
        profile
    }

    pub fn score(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Marketing => self.marketing,
            ContentKind::Educational => self.educational,
            ContentKind::Narrative => self.narrative,
            ContentKind::Instructional => self.instructional,
        }
    }

    fn score_mut(&mut self, kind: ContentKind) -> &mut usize {
        match kind {
            ContentKind::Marketing => &mut self.marketing,
            ContentKind::Educational => &mut self.educational,
            ContentKind::Narrative => &mut self.narrative,
            ContentKind::Instructional => &mut self.instructional,
        }
    }

    /// The highest-scoring kind; ties go to the earlier kind in [`ContentKind::ALL`].
    /// `None` when nothing scored.
    pub fn dominant(&self) -> Option<ContentKind> {
        let mut best: Option<(ContentKind, usize)> = None;
        for kind in ContentKind::ALL {
            let s = self.score(kind);
            if s > 0 && best.is_none_or(|(_, b)| s > b) {
                best = Some((kind, s));
            }
        }
        best.map(|(k, _)| k)
    }
}

fn count_word(haystack: &str, word: &str) -> usize {
    let is_word = |c: char| c.is_alphanumeric();
    haystack
        .match_indices(word)
        .filter(|(i, _)| {
            let before = haystack[..*i].chars().next_back();
            let after = haystack[i + word.len()..].chars().next();
            !before.is_some_and(is_word) && !after.is_some_and(is_word)
        })
        .count()
}
