//! Sentiment scoring for free text.
//!
//! The classifier only needs a polarity/subjectivity pair, so the engine sits
//! behind the single-method [`SentimentReader`] trait. The built-in
//! [`LexiconAnalyzer`] averages word-level scores from a static adjective
//! lexicon, adjusted for intensifiers, negations and exclamation marks.

mod lexicon;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SentimentConfig;

use lexicon::{intensity_of, is_negation, LEXICON};

/// Polarity and subjectivity of a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 (most negative) to 1.0 (most positive)
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,
}

impl SentimentScore {
    /// Build a score, clamping both components into range
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    pub fn neutral() -> Self {
        Self::default()
    }
}

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("Sentiment engine failed: {0}")]
    Engine(String),
}

/// Something that can score the sentiment of raw text
pub trait SentimentReader: Send + Sync {
    /// Score `text`. Empty text is valid input and should score as neutral.
    fn analyze(&self, text: &str) -> Result<SentimentScore, SentimentError>;

    /// Engine name, for diagnostics
    fn name(&self) -> &str;
}

/// Lexicon-based sentiment analyzer
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    negation_factor: f64,
    exclamation_boost: bool,
}

/// Polarity added per exclamation mark, away from zero
const EXCLAMATION_STEP: f64 = 0.05;
const MAX_EXCLAMATIONS: usize = 3;

/// How many tokens back a negation still applies
const NEGATION_WINDOW: usize = 2;

impl LexiconAnalyzer {
    pub fn new(config: &SentimentConfig) -> Self {
        Self {
            negation_factor: config.negation_factor,
            exclamation_boost: config.exclamation_boost,
        }
    }

    fn score(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);

        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(entry) = LEXICON.get(token.as_str()) else {
                continue;
            };

            let mut polarity = entry.polarity;
            let mut subjectivity = entry.subjectivity;

            if let Some(intensity) = i.checked_sub(1).and_then(|j| intensity_of(&tokens[j])) {
                polarity *= intensity;
                subjectivity *= intensity;
            }

            let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|t| is_negation(t));
            if negated {
                polarity *= self.negation_factor;
            }

            polarities.push(polarity.clamp(-1.0, 1.0));
            subjectivities.push(subjectivity.clamp(0.0, 1.0));
        }

        if polarities.is_empty() {
            return SentimentScore::neutral();
        }

        let mut polarity = mean(&polarities);
        let subjectivity = mean(&subjectivities);

        if self.exclamation_boost && polarity != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS);
            polarity += polarity.signum() * EXCLAMATION_STEP * bangs as f64;
        }

        SentimentScore::new(polarity, subjectivity)
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new(&SentimentConfig::default())
    }
}

impl SentimentReader for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        Ok(self.score(text))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Lowercase `text` and split it into words, keeping inner apostrophes
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .map(|t| t.trim_matches(|c| c == '\'' || c == '’').replace('’', "'"))
        .filter(|t| !t.is_empty())
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
