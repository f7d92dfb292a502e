//! CLI error types

use podplayer_playback::PlaybackError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read feed {path:?}: {source}")]
    FeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid feed: {0}")]
    FeedParse(#[from] serde_json::Error),

    #[error("Feed has no episodes")]
    EmptyFeed,

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}
