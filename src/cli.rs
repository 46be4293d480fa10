//! Terminal output for the `analyze` and `moods` commands.

use std::fmt::Write;

use crate::mood::MoodLabel;
use crate::pipeline::MoodReport;

/// Output style for `analyze`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Join positional words into a diary entry, `None` when there are none
pub fn entry_from_args(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

pub fn banner() -> String {
    let rule = "=".repeat(55);
    format!("{rule}\n  🎵 MoodPlaylist - Mood-Based Playlist Generator\n{rule}\n")
}

pub fn render_report(report: &MoodReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

/// One line per mood: emoji, name, genres and description
pub fn render_mood_list() -> String {
    let mut out = String::new();
    for mood in MoodLabel::ALL {
        let playlist = mood.playlist();
        let _ = writeln!(
            out,
            "{} {:<10} {} - {}",
            playlist.emoji,
            mood.display_name(),
            playlist.genres,
            playlist.description
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::MoodPipeline;
    use crate::sentiment::{SentimentError, SentimentReader, SentimentScore};
    use std::sync::Arc;

    struct FixedReader(f64);

    impl SentimentReader for FixedReader {
        fn analyze(&self, _text: &str) -> Result<SentimentScore, SentimentError> {
            Ok(SentimentScore::new(self.0, 0.5))
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn report(text: &str, polarity: f64) -> MoodReport {
        MoodPipeline::new(Arc::new(FixedReader(polarity)))
            .analyze(text)
            .unwrap()
    }

    #[test]
    fn test_entry_from_args() {
        assert_eq!(entry_from_args(&[]), None);

        let words: Vec<String> = ["feeling", "lonely", "and", "lost"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(
            entry_from_args(&words).as_deref(),
            Some("feeling lonely and lost")
        );
    }

    #[test]
    fn test_joined_args_classify_like_a_single_entry() {
        let words = vec!["feeling".to_string(), "lonely and lost".to_string()];
        let entry = entry_from_args(&words).unwrap();
        assert_eq!(report(&entry, 0.0).mood, MoodLabel::Sad);
    }

    #[test]
    fn test_render_report_text() {
        let out = render_report(&report("gym and a sprint", 0.0), OutputFormat::Text).unwrap();
        assert!(out.contains("Detected mood: Energetic ⚡"));
        assert!(out.contains("polarity=0.00, subjectivity=0.50"));
    }

    #[test]
    fn test_render_report_json() {
        let out = render_report(&report("gym and a sprint", 0.0), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["mood"], "energetic");
        assert_eq!(value["keyword_scores"]["energy"], 2);
        assert_eq!(value["playlist"]["genres"], "Rock, EDM, Workout beats");
        assert_eq!(value["sentiment"]["subjectivity"], 0.5);
    }

    #[test]
    fn test_render_mood_list() {
        let out = render_mood_list();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "😊 Happy      Pop, Dance, Feel-good hits - Upbeat and joyful tunes to match your great mood!"
        );
        assert!(lines[3].starts_with("😌 Calm "));
        assert!(lines[4].contains("Rock, EDM, Workout beats"));
    }

    #[test]
    fn test_banner() {
        let banner = banner();
        assert!(banner.starts_with(&"=".repeat(55)));
        assert!(banner.contains("MoodPlaylist"));
    }
}
