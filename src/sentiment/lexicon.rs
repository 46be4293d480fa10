//! Word-level sentiment lexicon.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub(super) struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// (word, polarity, subjectivity)
const ENTRIES: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("awesome", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("excellent", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("lovely", 0.5, 0.75),
    ("beautiful", 0.85, 1.0),
    ("happy", 0.8, 1.0),
    ("happier", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("joy", 0.8, 0.9),
    ("joyful", 0.8, 0.9),
    ("cheerful", 0.7, 0.8),
    ("delighted", 0.7, 0.8),
    ("proud", 0.8, 1.0),
    ("grateful", 0.6, 0.7),
    ("thankful", 0.5, 0.6),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("fun", 0.3, 0.2),
    ("enjoyed", 0.5, 0.6),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("thrilled", 0.6, 0.8),
    ("incredible", 0.9, 0.9),
    ("brilliant", 0.9, 1.0),
    ("successful", 0.75, 0.95),
    ("fresh", 0.3, 0.5),
    ("motivated", 0.4, 0.6),
    ("strong", 0.43, 0.73),
    ("productive", 0.5, 0.6),
    ("pleasant", 0.73, 0.97),
    ("calm", 0.3, 0.75),
    ("peaceful", 0.25, 0.5),
    ("relaxed", 0.3, 0.6),
    ("relaxing", 0.3, 0.6),
    ("serene", 0.3, 0.6),
    ("gentle", 0.2, 0.6),
    ("quiet", 0.1, 0.4),
    ("cozy", 0.4, 0.6),
    ("comfortable", 0.4, 0.7),
    ("fine", 0.42, 0.5),
    ("okay", 0.5, 0.5),
    ("ok", 0.5, 0.5),
    ("free", 0.4, 0.8),
    ("energetic", 0.4, 0.6),
    ("alive", 0.1, 0.5),
    ("celebrated", 0.4, 0.6),
    // negative
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("miserable", -1.0, 1.0),
    ("depressed", -0.8, 0.9),
    ("heartbroken", -0.9, 1.0),
    ("hopeless", -0.8, 0.9),
    ("lonely", -0.25, 0.75),
    ("alone", -0.15, 0.5),
    ("lost", -0.4, 0.6),
    ("crying", -0.5, 0.8),
    ("tired", -0.4, 0.7),
    ("exhausted", -0.4, 0.6),
    ("angry", -0.5, 1.0),
    ("upset", -0.5, 0.8),
    ("annoyed", -0.4, 0.7),
    ("frustrated", -0.6, 0.8),
    ("frustrating", -0.6, 0.8),
    ("anxious", -0.25, 0.75),
    ("nervous", -0.3, 0.8),
    ("worried", -0.4, 0.7),
    ("stressed", -0.5, 0.7),
    ("stressful", -0.5, 0.7),
    ("overwhelmed", -0.5, 0.8),
    ("scared", -0.5, 0.8),
    ("afraid", -0.6, 0.9),
    ("boring", -1.0, 1.0),
    ("bored", -0.5, 0.8),
    ("hard", -0.29, 0.54),
    ("difficult", -0.5, 1.0),
    ("sick", -0.71, 0.86),
    ("ill", -0.5, 0.7),
    ("painful", -0.7, 0.9),
    ("hurt", -0.5, 0.7),
    ("hate", -0.8, 0.9),
    ("failed", -0.5, 0.5),
    ("wrong", -0.5, 0.9),
    ("slow", -0.3, 0.4),
    ("busy", -0.1, 0.3),
    ("late", -0.3, 0.6),
    ("dark", -0.15, 0.4),
    ("grey", -0.1, 0.3),
];

/// (word, multiplier) for words that scale the following sentiment word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.6),
    ("barely", 0.5),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "cannot", "nothing", "hardly"];

pub(super) static LEXICON: Lazy<HashMap<&'static str, LexiconEntry>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(word, polarity, subjectivity)| {
            (
                word,
                LexiconEntry {
                    polarity,
                    subjectivity,
                },
            )
        })
        .collect()
});

pub(super) fn intensity_of(token: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, intensity)| intensity)
}

pub(super) fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_entries() {
        assert_eq!(LEXICON.len(), ENTRIES.len());
    }

    #[test]
    fn test_intensifiers_are_not_sentiment_words() {
        for (word, _) in INTENSIFIERS {
            assert!(!LEXICON.contains_key(word), "{word} is in both tables");
        }
    }

    #[test]
    fn test_negations() {
        assert!(is_negation("not"));
        assert!(is_negation("didn't"));
        assert!(is_negation("can't"));
        assert!(!is_negation("nothingness"));
        assert!(!is_negation("good"));
    }

    #[test]
    fn test_intensity_of() {
        assert_eq!(intensity_of("very"), Some(1.3));
        assert_eq!(intensity_of("good"), None);
    }
}
