//! Static playlist suggestions, one per mood.

use serde::Serialize;

use super::MoodLabel;

/// A playlist suggestion for a mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaylistDescriptor {
    pub emoji: &'static str,
    /// Comma-separated genre list for display
    pub genres: &'static str,
    pub description: &'static str,
    /// Accent color used by the web page
    pub color: &'static str,
}

pub const HAPPY_PLAYLIST: PlaylistDescriptor = PlaylistDescriptor {
    emoji: "😊",
    genres: "Pop, Dance, Feel-good hits",
    description: "Upbeat and joyful tunes to match your great mood!",
    color: "#FFD700",
};

pub const SAD_PLAYLIST: PlaylistDescriptor = PlaylistDescriptor {
    emoji: "😢",
    genres: "Acoustic, Lo-fi, Soft ballads",
    description: "Gentle melodies to comfort and accompany your feelings.",
    color: "#6495ED",
};

pub const STRESSED_PLAYLIST: PlaylistDescriptor = PlaylistDescriptor {
    emoji: "😰",
    genres: "Nature sounds, Ambient, Meditation",
    description: "Calming sounds to help you relax and unwind.",
    color: "#FF6347",
};

pub const CALM_PLAYLIST: PlaylistDescriptor = PlaylistDescriptor {
    emoji: "😌",
    genres: "Classical, Jazz, Chill",
    description: "Smooth and peaceful music for a serene moment.",
    color: "#90EE90",
};

pub const ENERGETIC_PLAYLIST: PlaylistDescriptor = PlaylistDescriptor {
    emoji: "⚡",
    genres: "Rock, EDM, Workout beats",
    description: "High-energy tracks to fuel your drive!",
    color: "#FF8C00",
};

/// Look up the playlist for a mood
pub fn resolve(mood: MoodLabel) -> &'static PlaylistDescriptor {
    match mood {
        MoodLabel::Happy => &HAPPY_PLAYLIST,
        MoodLabel::Sad => &SAD_PLAYLIST,
        MoodLabel::Stressed => &STRESSED_PLAYLIST,
        MoodLabel::Calm => &CALM_PLAYLIST,
        MoodLabel::Energetic => &ENERGETIC_PLAYLIST,
    }
}

/// Look up the playlist for a mood given by name.
///
/// Unknown names fall back to the calm playlist.
pub fn resolve_str(label: &str) -> &'static PlaylistDescriptor {
    resolve(label.parse().unwrap_or(MoodLabel::Calm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_a_complete_playlist() {
        for mood in MoodLabel::ALL {
            let playlist = resolve(mood);
            assert!(!playlist.emoji.is_empty(), "{mood} has no emoji");
            assert!(!playlist.genres.is_empty(), "{mood} has no genres");
            assert!(!playlist.description.is_empty(), "{mood} has no description");
            assert!(playlist.color.starts_with('#'));
        }
    }

    #[test]
    fn test_playlists_are_distinct() {
        for a in MoodLabel::ALL {
            for b in MoodLabel::ALL {
                if a != b {
                    assert_ne!(resolve(a), resolve(b));
                }
            }
        }
    }

    #[test]
    fn test_resolve_str() {
        assert_eq!(resolve_str("energetic"), &ENERGETIC_PLAYLIST);
        assert_eq!(resolve_str(" Sad "), &SAD_PLAYLIST);
    }

    #[test]
    fn test_resolve_str_unknown_falls_back_to_calm() {
        assert_eq!(resolve_str("melancholic"), &CALM_PLAYLIST);
        assert_eq!(resolve_str(""), &CALM_PLAYLIST);
    }
}
