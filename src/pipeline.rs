//! Diary entry to playlist: sentiment, then mood, then playlist lookup.

use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;
use tracing::debug;

use crate::mood::{classify_scores, KeywordScores, MoodLabel, PlaylistDescriptor};
use crate::sentiment::{SentimentError, SentimentReader, SentimentScore};

/// Everything produced for one diary entry
#[derive(Debug, Clone, Serialize)]
pub struct MoodReport {
    pub mood: MoodLabel,
    pub sentiment: SentimentScore,
    pub keyword_scores: KeywordScores,
    pub playlist: PlaylistDescriptor,
}

/// Runs the analysis chain with a pluggable sentiment engine
#[derive(Clone)]
pub struct MoodPipeline {
    reader: Arc<dyn SentimentReader>,
}

impl MoodPipeline {
    pub fn new(reader: Arc<dyn SentimentReader>) -> Self {
        Self { reader }
    }

    pub fn engine_name(&self) -> &str {
        self.reader.name()
    }

    /// Analyze a diary entry. Engine failures are returned as-is.
    pub fn analyze(&self, text: &str) -> Result<MoodReport, SentimentError> {
        let sentiment = self.reader.analyze(text)?;
        let keyword_scores = KeywordScores::score(text);
        // subjectivity is carried in the report but does not affect the label
        let mood = classify_scores(&keyword_scores, sentiment.polarity);

        debug!(
            %mood,
            polarity = sentiment.polarity,
            subjectivity = sentiment.subjectivity,
            sad = keyword_scores.sad,
            stress = keyword_scores.stress,
            energy = keyword_scores.energy,
            calm = keyword_scores.calm,
            "Classified diary entry"
        );

        Ok(MoodReport {
            mood,
            sentiment,
            keyword_scores,
            playlist: *mood.playlist(),
        })
    }
}

impl MoodReport {
    /// Plain-text block for terminal output
    pub fn render_text(&self) -> String {
        let rule = "-".repeat(55);
        let mut out = String::new();

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "  Detected mood: {} {}",
            self.mood.display_name(),
            self.playlist.emoji
        );
        let _ = writeln!(out, "  Suggested playlist: {} 🎶", self.playlist.genres);
        let _ = writeln!(out, "  {}", self.playlist.description);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  [Sentiment details: polarity={:.2}, subjectivity={:.2}]",
            self.sentiment.polarity, self.sentiment.subjectivity
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::classify;
    use crate::sentiment::LexiconAnalyzer;

    struct FixedReader(SentimentScore);

    impl SentimentReader for FixedReader {
        fn analyze(&self, _text: &str) -> Result<SentimentScore, SentimentError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingReader;

    impl SentimentReader for FailingReader {
        fn analyze(&self, _text: &str) -> Result<SentimentScore, SentimentError> {
            Err(SentimentError::Engine("model unavailable".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn fixed(polarity: f64, subjectivity: f64) -> MoodPipeline {
        MoodPipeline::new(Arc::new(FixedReader(SentimentScore::new(
            polarity,
            subjectivity,
        ))))
    }

    #[test]
    fn test_promotion_scenario() {
        let report = fixed(0.6, 0.6)
            .analyze("I got a promotion and I'm so excited and pumped!")
            .unwrap();
        assert_eq!(report.mood, MoodLabel::Happy);
        assert_eq!(report.keyword_scores.energy, 2);
        assert_eq!(report.playlist.genres, "Pop, Dance, Feel-good hits");
    }

    #[test]
    fn test_deadline_scenario() {
        let report = fixed(-0.3, 0.7)
            .analyze("Deadline pressure is making me so anxious and overwhelmed")
            .unwrap();
        assert_eq!(report.mood, MoodLabel::Stressed);
        assert_eq!(report.playlist.emoji, "😰");
    }

    #[test]
    fn test_matches_classify() {
        let text = "Long run this morning, felt strong";
        let report = fixed(0.2, 0.5).analyze(text).unwrap();
        assert_eq!(report.mood, classify(text, 0.2, 0.5));
        assert_eq!(report.mood, MoodLabel::Energetic);
    }

    #[test]
    fn test_empty_entry_with_real_engine_is_calm() {
        let pipeline = MoodPipeline::new(Arc::new(LexiconAnalyzer::default()));
        let report = pipeline.analyze("").unwrap();
        assert_eq!(report.mood, MoodLabel::Calm);
        assert_eq!(report.sentiment, SentimentScore::neutral());
        assert_eq!(pipeline.engine_name(), "lexicon");
    }

    #[test]
    fn test_engine_failure_propagates() {
        let pipeline = MoodPipeline::new(Arc::new(FailingReader));
        let err = pipeline.analyze("anything").unwrap_err();
        assert!(err.to_string().contains("model unavailable"));
    }

    #[test]
    fn test_render_text() {
        let report = fixed(0.0, 0.0).analyze("").unwrap();
        let text = report.render_text();
        assert!(text.contains("Detected mood: Calm 😌"));
        assert!(text.contains("Suggested playlist: Classical, Jazz, Chill 🎶"));
        assert!(text.contains("Smooth and peaceful music for a serene moment."));
        assert!(text.contains("[Sentiment details: polarity=0.00, subjectivity=0.00]"));
    }

    #[test]
    fn test_render_text_two_decimals() {
        let report = fixed(-0.456, 0.123).analyze("nothing special").unwrap();
        assert!(report
            .render_text()
            .contains("polarity=-0.46, subjectivity=0.12"));
    }

    #[test]
    fn test_report_serialization() {
        let report = fixed(0.5, 0.9).analyze("what a day").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mood"], "happy");
        assert_eq!(json["sentiment"]["polarity"], 0.5);
        assert_eq!(json["playlist"]["emoji"], "😊");
        assert_eq!(json["keyword_scores"]["sad"], 0);
    }
}
