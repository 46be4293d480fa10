//! MoodPlaylist
//!
//! Suggests a playlist for a short diary entry. The entry is scored for
//! sentiment, mapped to one of five moods by a hybrid polarity/keyword rule
//! list, and the mood is looked up in a static playlist table. Exposed as a
//! CLI and as a small web service.

pub mod cli;
pub mod config;
pub mod error;
pub mod mood;
pub mod pipeline;
pub mod sentiment;
pub mod server;
pub mod types;

pub use crate::config::AppConfig;
pub use error::{AppError, Result};
pub use mood::{classify, count_matches, resolve, MoodLabel, PlaylistDescriptor};
pub use pipeline::{MoodPipeline, MoodReport};
pub use sentiment::{LexiconAnalyzer, SentimentReader, SentimentScore};
