//! Render model for the player panel

use crate::transport::TransportControls;
use podplayer_playback::Episode;
use serde::{Deserialize, Serialize};

/// Artwork and credits of the selected episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub title: String,
    pub members: String,
    pub thumbnail: String,
}

impl From<&Episode> for NowPlaying {
    fn from(episode: &Episode) -> Self {
        Self {
            title: episode.title().to_string(),
            members: episode.members().to_string(),
            thumbnail: episode.thumbnail().to_string(),
        }
    }
}

/// Seek slider bounds and position, in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderModel {
    pub max: u32,
    pub value: u32,
}

/// Everything the player panel shows for one render
///
/// `now_playing` and `slider` are `None` in the empty state, where the panel
/// shows its placeholder and every transport button is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub panel_expanded: bool,
    pub now_playing: Option<NowPlaying>,
    /// Elapsed label, `MM:SS`
    pub elapsed: String,
    /// Total label, `MM:SS`
    pub total: String,
    pub slider: Option<SliderModel>,
    pub fill_percent: u8,
    pub controls: TransportControls,
    /// Whether a media source is attached
    pub media_mounted: bool,
}

impl PlayerSnapshot {
    pub fn is_empty(&self) -> bool {
        self.now_playing.is_none()
    }
}
