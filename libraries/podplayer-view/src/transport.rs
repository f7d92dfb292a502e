//! Transport controls
//!
//! Maps buttons to store operations and decides which are enabled.

use podplayer_playback::PlaybackStore;
use serde::{Deserialize, Serialize};

/// User gesture on the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "seconds", rename_all = "camelCase")]
pub enum TransportAction {
    ToggleShuffle,
    Previous,
    TogglePlay,
    Next,
    ToggleLoop,
    /// Compact/expanded layout switch in the header
    TogglePanel,
    /// Slider drag or click, in whole seconds
    Seek(u32),
}

/// Render state of one button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlState {
    pub enabled: bool,
    /// Highlighted (shuffle/loop on)
    pub active: bool,
}

/// Icon shown on the play/pause button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayPauseIcon {
    Play,
    Pause,
}

/// State of every transport button for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportControls {
    pub shuffle: ControlState,
    pub previous: ControlState,
    pub play_pause: ControlState,
    pub play_pause_icon: PlayPauseIcon,
    pub next: ControlState,
    pub repeat: ControlState,
}

impl TransportControls {
    /// Derive button states from the store
    pub fn from_store(store: &PlaybackStore) -> Self {
        let has_episode = store.current_episode().is_some();

        Self {
            shuffle: ControlState {
                enabled: has_episode && store.queue_len() != 1,
                active: store.is_shuffling(),
            },
            previous: ControlState {
                enabled: has_episode && store.has_previous(),
                active: false,
            },
            play_pause: ControlState {
                enabled: has_episode,
                active: false,
            },
            play_pause_icon: if store.is_playing() {
                PlayPauseIcon::Pause
            } else {
                PlayPauseIcon::Play
            },
            next: ControlState {
                enabled: has_episode && store.has_next(),
                active: false,
            },
            repeat: ControlState {
                enabled: has_episode,
                active: store.is_looping(),
            },
        }
    }

    /// Whether `action` may run right now
    ///
    /// The panel toggle is always available. Seeking needs a selected
    /// episode, same as play/pause.
    pub fn allows(&self, action: TransportAction) -> bool {
        match action {
            TransportAction::ToggleShuffle => self.shuffle.enabled,
            TransportAction::Previous => self.previous.enabled,
            TransportAction::TogglePlay | TransportAction::Seek(_) => self.play_pause.enabled,
            TransportAction::Next => self.next.enabled,
            TransportAction::ToggleLoop => self.repeat.enabled,
            TransportAction::TogglePanel => true,
        }
    }
}
