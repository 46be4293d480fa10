//! Keyword sets for the hybrid mood heuristics.
//!
//! Each set is a list of lowercase fragments matched as substrings, so
//! "stress" also hits "stressed" and "stressful". There is deliberately no
//! set for happy; that mood is reached through polarity alone.

use serde::{Deserialize, Serialize};

pub const SAD_KEYWORDS: &[&str] = &[
    "lonely",
    "sad",
    "miss",
    "cry",
    "depressed",
    "heartbroken",
    "grief",
    "lost",
    "alone",
    "hopeless",
    "unhappy",
    "tears",
];

pub const STRESS_KEYWORDS: &[&str] = &[
    "stress",
    "deadline",
    "pressure",
    "anxious",
    "overwhelm",
    "worry",
    "nervous",
    "panic",
    "busy",
    "exhausted",
    "insomnia",
    "sleep",
];

pub const ENERGY_KEYWORDS: &[&str] = &[
    "gym",
    "workout",
    "run",
    "strong",
    "power",
    "energy",
    "motivated",
    "excited",
    "pumped",
    "sprint",
    "training",
    "active",
];

pub const CALM_KEYWORDS: &[&str] = &[
    "peaceful",
    "quiet",
    "relax",
    "serene",
    "gentle",
    "meditation",
    "calm",
    "tranquil",
    "slow",
    "reading",
    "rest",
    "nature",
];

/// Count how many keywords occur in `text`, ignoring case.
///
/// Every keyword contributes at most once, no matter how often it repeats.
pub fn count_matches(text: &str, keywords: &[&str]) -> usize {
    let lowered = text.to_lowercase();
    keywords.iter().filter(|kw| lowered.contains(*kw)).count()
}

/// Per-category keyword hits for one piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordScores {
    pub sad: usize,
    pub stress: usize,
    pub energy: usize,
    pub calm: usize,
}

impl KeywordScores {
    /// Score `text` against all four keyword sets
    pub fn score(text: &str) -> Self {
        Self {
            sad: count_matches(text, SAD_KEYWORDS),
            stress: count_matches(text, STRESS_KEYWORDS),
            energy: count_matches(text, ENERGY_KEYWORDS),
            calm: count_matches(text, CALM_KEYWORDS),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sad == 0 && self.stress == 0 && self.energy == 0 && self.calm == 0
    }
}
