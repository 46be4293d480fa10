//! Hybrid mood classification.
//!
//! A diary entry is mapped to one of five moods by combining the sentiment
//! polarity of the text with keyword hits from four category lists. The rules
//! form a fixed priority list and the first one that matches wins, so keyword
//! evidence for sadness beats stress cues, stress cues beat a strongly
//! positive polarity, and so on down to the calm fallthrough.

pub mod keywords;
pub mod playlist;

pub use keywords::{
    count_matches, KeywordScores, CALM_KEYWORDS, ENERGY_KEYWORDS, SAD_KEYWORDS, STRESS_KEYWORDS,
};
pub use playlist::{resolve, resolve_str, PlaylistDescriptor};

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The five moods a diary entry can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Sad,
    Stressed,
    Calm,
    Energetic,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 5] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Stressed,
        MoodLabel::Calm,
        MoodLabel::Energetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Sad => "sad",
            MoodLabel::Stressed => "stressed",
            MoodLabel::Calm => "calm",
            MoodLabel::Energetic => "energetic",
        }
    }

    /// Capitalized name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "Happy",
            MoodLabel::Sad => "Sad",
            MoodLabel::Stressed => "Stressed",
            MoodLabel::Calm => "Calm",
            MoodLabel::Energetic => "Energetic",
        }
    }

    pub fn playlist(&self) -> &'static PlaylistDescriptor {
        resolve(*self)
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown mood: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for MoodLabel {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MoodLabel::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownMood(needle.to_string()))
    }
}

/// Classify a diary entry.
///
/// `subjectivity` is part of the contract but no rule reads it yet.
pub fn classify(text: &str, polarity: f64, _subjectivity: f64) -> MoodLabel {
    classify_scores(&KeywordScores::score(text), polarity)
}

/// Apply the ordered rule list to precomputed keyword scores
pub fn classify_scores(scores: &KeywordScores, polarity: f64) -> MoodLabel {
    if scores.sad >= 2 || (scores.sad >= 1 && polarity < 0.0) {
        return MoodLabel::Sad;
    }
    if scores.stress >= 2 || (scores.stress >= 1 && polarity < 0.1) {
        return MoodLabel::Stressed;
    }
    if polarity > 0.4 {
        return MoodLabel::Happy;
    }
    if scores.energy >= 2 || (scores.energy >= 1 && polarity > 0.0) {
        return MoodLabel::Energetic;
    }
    if scores.calm >= 2 || (scores.calm >= 1 && polarity.abs() < 0.2) {
        return MoodLabel::Calm;
    }
    if polarity > 0.1 {
        return MoodLabel::Happy;
    }
    if polarity < -0.2 {
        return MoodLabel::Sad;
    }
    if polarity < 0.0 {
        return MoodLabel::Stressed;
    }
    MoodLabel::Calm
}
