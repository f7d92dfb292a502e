//! Playback store - the single source of truth for the player
//!
//! Holds the episode queue, current index and player flags. Every mutation is
//! synchronous and pushes change events for the host to drain.

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    shuffle::pick_random_index,
    types::{Episode, PlaybackConfig},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Playback state for one application session
///
/// Constructed once by the host and handed to views by reference:
/// - Queue (insertion order is playback order)
/// - Current index (`0 <= index < len` whenever the queue is non-empty)
/// - Flags: playing, looping, shuffling, panel expanded
/// - Derived `has_next` / `has_previous`
#[derive(Debug)]
pub struct PlaybackStore {
    queue: Vec<Episode>,
    current_index: usize,

    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
    is_panel_expanded: bool,

    // Bumped on every selection, including re-selecting the same index
    selection: u64,

    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackStore {
    /// Create an empty store with flags taken from `config`
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an empty store with a reproducible shuffle sequence
    pub fn with_seed(config: PlaybackConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PlaybackConfig, rng: StdRng) -> Self {
        Self {
            queue: Vec::new(),
            current_index: 0,
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            is_panel_expanded: config.panel_expanded,
            selection: 0,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Queue Control =====

    /// Play a single episode, discarding the previous queue
    pub fn play(&mut self, episode: Episode) {
        debug!(title = episode.title(), "Playing single episode");
        self.queue = vec![episode];
        self.emit(PlayerEvent::QueueChanged { length: 1 });
        self.select(0);
        self.set_playing(true);
    }

    /// Replace the queue with `list` and start at `index`
    ///
    /// Fails without touching the store when `index` is not a position in
    /// `list` (an empty list never has one).
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        if index >= list.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: list.len(),
            });
        }

        debug!(length = list.len(), index, "Playing list");
        self.queue = list;
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
        self.select(index);
        self.set_playing(true);
        Ok(())
    }

    /// Advance to the next episode
    ///
    /// Shuffle draws a random index over the whole queue (the current one
    /// included). Otherwise steps forward when there is a next episode.
    pub fn play_next(&mut self) {
        if self.is_shuffling {
            match pick_random_index(&mut self.rng, self.queue.len()) {
                Some(index) => {
                    debug!(index, "Shuffle picked next episode");
                    self.select(index);
                }
                None => debug!("Shuffle next ignored on empty queue"),
            }
        } else if self.has_next() {
            self.select(self.current_index + 1);
        }
    }

    /// Step back to the previous episode, if any
    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.select(self.current_index - 1);
        }
    }

    /// Empty the queue and reset the index
    ///
    /// Flags (playing, looping, shuffling, panel) are left as they were.
    pub fn clear_player_state(&mut self) {
        debug!(length = self.queue.len(), "Clearing player state");
        self.queue.clear();
        self.current_index = 0;
        self.emit(PlayerEvent::QueueCleared);
    }

    // ===== Flags =====

    pub fn toggle_play(&mut self) {
        self.set_playing(!self.is_playing);
    }

    /// Set the playing flag explicitly
    ///
    /// Used when the media element reports play/pause on its own, so the
    /// store follows the element instead of toggling against it.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.set_playing(playing);
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        debug!(looping = self.is_looping, "Loop toggled");
        self.emit(PlayerEvent::LoopChanged {
            looping: self.is_looping,
        });
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        debug!(shuffling = self.is_shuffling, "Shuffle toggled");
        self.emit(PlayerEvent::ShuffleChanged {
            shuffling: self.is_shuffling,
        });
    }

    pub fn toggle_panel_expanded(&mut self) {
        self.is_panel_expanded = !self.is_panel_expanded;
        self.emit(PlayerEvent::PanelChanged {
            expanded: self.is_panel_expanded,
        });
    }

    // ===== State Queries =====

    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Episode at the current index, `None` when the queue is empty
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn is_panel_expanded(&self) -> bool {
        self.is_panel_expanded
    }

    /// Check if there is a next episode
    ///
    /// Always true while shuffling: the next index is drawn at call time.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.queue.len()
    }

    /// Check if there is a previous episode
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Selection counter
    ///
    /// Changes whenever an episode is (re)selected; views compare it to know
    /// when the media source must be reloaded.
    pub fn selection(&self) -> u64 {
        self.selection
    }

    // ===== Events =====

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn select(&mut self, index: usize) {
        self.current_index = index;
        self.selection += 1;
        self.emit(PlayerEvent::EpisodeSelected {
            index,
            selection: self.selection,
        });
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.emit(PlayerEvent::PlayingChanged { playing });
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PlaybackStore {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(title: &str, duration: u32) -> Episode {
        Episode::new(
            title,
            "Host",
            format!("/thumbs/{}.jpg", title),
            duration,
            format!("/media/{}.mp3", title),
        )
        .unwrap()
    }

    fn three() -> Vec<Episode> {
        vec![episode("a", 100), episode("b", 200), episode("c", 300)]
    }

    #[test]
    fn new_store_is_empty() {
        let store = PlaybackStore::default();
        assert!(store.queue().is_empty());
        assert_eq!(store.current_index(), 0);
        assert!(store.current_episode().is_none());
        assert!(!store.is_playing());
        assert!(!store.has_next());
        assert!(!store.has_previous());
    }

    #[test]
    fn config_sets_initial_flags() {
        let store = PlaybackStore::new(PlaybackConfig {
            looping: true,
            shuffling: true,
            panel_expanded: true,
        });
        assert!(store.is_looping());
        assert!(store.is_shuffling());
        assert!(store.is_panel_expanded());
        assert!(!store.is_playing());
    }

    #[test]
    fn play_replaces_queue() {
        let mut store = PlaybackStore::default();
        store.play_list(three(), 2).unwrap();

        let single = episode("solo", 50);
        store.play(single.clone());

        assert_eq!(store.queue(), &[single]);
        assert_eq!(store.current_index(), 0);
        assert!(store.is_playing());
    }

    #[test]
    fn play_list_selects_index() {
        let mut store = PlaybackStore::default();
        store.play_list(three(), 1).unwrap();

        assert_eq!(store.current_index(), 1);
        assert_eq!(store.current_episode().unwrap().title(), "b");
        assert!(store.has_previous());
        assert!(store.has_next());
        assert!(store.is_playing());
    }

    #[test]
    fn play_list_rejects_out_of_range_index() {
        let mut store = PlaybackStore::default();
        store.play(episode("keep", 10));
        store.set_playing_state(false);
        store.drain_events();

        let err = store.play_list(three(), 3).unwrap_err();
        assert!(matches!(
            err,
            PlaybackError::IndexOutOfBounds { index: 3, len: 3 }
        ));

        assert!(store.play_list(Vec::new(), 0).is_err());

        // Untouched
        assert_eq!(store.queue_len(), 1);
        assert_eq!(store.current_episode().unwrap().title(), "keep");
        assert!(!store.is_playing());
        assert!(!store.has_pending_events());
    }

    #[test]
    fn next_stops_at_last_episode() {
        let mut store = PlaybackStore::default();
        store.play_list(three(), 1).unwrap();

        store.play_next();
        assert_eq!(store.current_index(), 2);
        assert!(!store.has_next());

        store.play_next();
        assert_eq!(store.current_index(), 2);
    }

    #[test]
    fn previous_stops_at_first_episode() {
        let mut store = PlaybackStore::default();
        store.play_list(three(), 1).unwrap();

        store.play_previous();
        assert_eq!(store.current_index(), 0);
        assert!(!store.has_previous());

        store.play_previous();
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn shuffle_always_has_next() {
        let mut store = PlaybackStore::with_seed(PlaybackConfig::default(), 3);
        store.play_list(three(), 2).unwrap();
        assert!(!store.has_next());

        store.toggle_shuffle();
        assert!(store.has_next());
    }

    #[test]
    fn shuffle_next_stays_in_range() {
        let mut store = PlaybackStore::with_seed(PlaybackConfig::default(), 99);
        store.play_list(three(), 0).unwrap();
        store.toggle_shuffle();

        for _ in 0..100 {
            store.play_next();
            assert!(store.current_index() < store.queue_len());
        }
    }

    #[test]
    fn shuffle_next_on_empty_queue_is_noop() {
        let mut store = PlaybackStore::default();
        store.toggle_shuffle();
        let selection = store.selection();

        store.play_next();

        assert_eq!(store.current_index(), 0);
        assert_eq!(store.selection(), selection);
    }

    #[test]
    fn clear_keeps_flags() {
        let mut store = PlaybackStore::default();
        store.play_list(three(), 2).unwrap();
        store.toggle_loop();
        store.toggle_shuffle();

        store.clear_player_state();

        assert!(store.queue().is_empty());
        assert_eq!(store.current_index(), 0);
        assert!(store.is_playing());
        assert!(store.is_looping());
        assert!(store.is_shuffling());
    }

    #[test]
    fn toggle_play_twice_restores() {
        let mut store = PlaybackStore::default();
        let before = store.is_playing();
        store.toggle_play();
        assert_ne!(store.is_playing(), before);
        store.toggle_play();
        assert_eq!(store.is_playing(), before);
    }

    #[test]
    fn selection_counts_reselection() {
        let mut store = PlaybackStore::default();
        store.play(episode("a", 10));
        let first = store.selection();

        store.play(episode("a", 10));
        assert_eq!(store.selection(), first + 1);
    }

    #[test]
    fn events_follow_mutations() {
        let mut store = PlaybackStore::default();
        store.play_list(three(), 0).unwrap();

        assert_eq!(
            store.drain_events(),
            vec![
                PlayerEvent::QueueChanged { length: 3 },
                PlayerEvent::EpisodeSelected {
                    index: 0,
                    selection: 1
                },
                PlayerEvent::PlayingChanged { playing: true },
            ]
        );

        // Same value, no event
        store.set_playing_state(true);
        assert!(!store.has_pending_events());

        store.toggle_panel_expanded();
        store.clear_player_state();
        assert_eq!(
            store.drain_events(),
            vec![
                PlayerEvent::PanelChanged { expanded: true },
                PlayerEvent::QueueCleared,
            ]
        );
    }
}
