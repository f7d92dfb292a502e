//! Error types for playback state

use thiserror::Error;

/// Episode validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EpisodeError {
    /// Title is empty or whitespace only
    #[error("Episode title is empty")]
    EmptyTitle,

    /// A URI field could not be parsed
    #[error("Invalid {field} URI: {value:?}")]
    InvalidUri {
        /// Which field failed (`url` or `thumbnail`)
        field: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Requested index does not exist in the list
    #[error("Index out of bounds: {index} (queue length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid episode
    #[error(transparent)]
    Episode(#[from] EpisodeError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
