//! API types for mood classification operations.
//!
//! This module contains request/response types for classifying diary
//! entries and listing the available moods with their playlists.

use serde::{Deserialize, Serialize};

use crate::mood::{MoodLabel, PlaylistDescriptor};
use crate::pipeline::MoodReport;

/// Request to classify a diary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodClassifyRequest {
    /// Free-text diary entry
    #[serde(default)]
    pub text: String,
}

/// Response from mood classification
#[derive(Debug, Clone, Serialize)]
pub struct MoodClassifyResponse {
    #[serde(flatten)]
    pub report: MoodReport,
}

/// Info about a single mood and its playlist
#[derive(Debug, Clone, Serialize)]
pub struct MoodInfo {
    /// Mood identifier
    pub id: MoodLabel,
    /// Display name
    pub name: String,
    pub playlist: PlaylistDescriptor,
}

impl From<MoodLabel> for MoodInfo {
    fn from(mood: MoodLabel) -> Self {
        Self {
            id: mood,
            name: mood.display_name().to_string(),
            playlist: *mood.playlist(),
        }
    }
}

/// Response listing available moods
#[derive(Debug, Clone, Serialize)]
pub struct ListMoodsResponse {
    pub moods: Vec<MoodInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_request_defaults() {
        let req: MoodClassifyRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_empty());
    }

    #[test]
    fn test_classify_request_msgpack() {
        let bytes = rmp_serde::to_vec_named(&MoodClassifyRequest {
            text: "quiet evening".to_string(),
        })
        .unwrap();
        let decoded: MoodClassifyRequest = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(decoded.text, "quiet evening");
    }

    #[test]
    fn test_mood_info_from_label() {
        let info = MoodInfo::from(MoodLabel::Energetic);
        assert_eq!(info.name, "Energetic");
        assert_eq!(info.playlist.emoji, "⚡");

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["id"], "energetic");
        assert_eq!(json["playlist"]["genres"], "Rock, EDM, Workout beats");
    }
}
