//! Store change events
//!
//! Every mutation that changes the store pushes one or more events. Hosts
//! drain them to decide when to re-render.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// Playing flag changed
    PlayingChanged { playing: bool },

    /// An episode was selected as current
    ///
    /// Emitted for every selection, including re-selecting the same index.
    EpisodeSelected {
        /// Queue index of the selected episode
        index: usize,
        /// Selection counter after the change
        selection: u64,
    },

    /// Queue replaced
    QueueChanged { length: usize },

    /// Queue emptied by `clear_player_state`
    QueueCleared,

    /// Loop flag changed
    LoopChanged { looping: bool },

    /// Shuffle flag changed
    ShuffleChanged { shuffling: bool },

    /// Panel layout changed
    PanelChanged { expanded: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = PlayerEvent::EpisodeSelected {
            index: 2,
            selection: 7,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "episodeSelected");
        assert_eq!(json["index"], 2);
        assert_eq!(json["selection"], 7);
    }
}
