//! Mood classification API route handlers.

use axum::extract::State;
use tracing::info;

use crate::error::{AppError, Result};
use crate::mood::MoodLabel;
use crate::types::{ListMoodsResponse, MoodClassifyRequest, MoodClassifyResponse, MoodInfo};

use super::extractors::MsgPackExtractor;
use super::routes::MsgPack;
use super::AppState;

/// POST /api/v1/mood/classify
///
/// Classify a diary entry and suggest a playlist.
pub async fn classify_mood(
    State(state): State<AppState>,
    MsgPackExtractor(req): MsgPackExtractor<MoodClassifyRequest>,
) -> Result<MsgPack<MoodClassifyResponse>> {
    if state.config.server.reject_empty && req.text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please write something about your day first!".to_string(),
        ));
    }

    let report = state.pipeline.analyze(&req.text)?;

    info!(
        mood = %report.mood,
        chars = req.text.chars().count(),
        "Mood classified"
    );

    Ok(MsgPack(MoodClassifyResponse { report }))
}

/// GET /api/v1/mood/list
///
/// List all moods with their playlists.
pub async fn list_moods(State(_state): State<AppState>) -> MsgPack<ListMoodsResponse> {
    let moods = MoodLabel::ALL.into_iter().map(MoodInfo::from).collect();

    MsgPack(ListMoodsResponse { moods })
}
