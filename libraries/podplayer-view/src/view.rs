//! Player view - binds a media element to the playback store
//!
//! The view reads the store on every `sync` and reconciles the media element
//! with it. It never writes `is_playing` on its own; only media notifications
//! (play, pause, error) and user gestures reach the store.

use crate::{
    media::{ListenerId, MediaElement, MediaEvent, MediaEventKind},
    progress::{fill_percent, format_time, whole_seconds},
    snapshot::{NowPlaying, PlayerSnapshot, SliderModel},
    transport::{TransportAction, TransportControls},
};
use podplayer_playback::PlaybackStore;
use tracing::{debug, trace, warn};

/// Kinds the view listens to for as long as a source is mounted
const MOUNT_EVENTS: [MediaEventKind; 5] = [
    MediaEventKind::LoadedMetadata,
    MediaEventKind::Play,
    MediaEventKind::Pause,
    MediaEventKind::Ended,
    MediaEventKind::Error,
];

/// Source currently attached to the element
#[derive(Debug)]
struct Mounted {
    /// Store selection this source was loaded for
    selection: u64,
    listeners: Vec<ListenerId>,
    /// Added once metadata is known
    time_listener: Option<ListenerId>,
}

/// Player panel bound to one media element
///
/// Lifecycle:
/// 1. Host creates the view around its media element
/// 2. After every store mutation the host calls `sync`
/// 3. Media notifications go through `handle_media_event` (or `pump`)
/// 4. Dropping the view removes every listener it registered
pub struct PlayerView<M: MediaElement> {
    media: M,
    mounted: Option<Mounted>,

    // Local progress in whole seconds
    progress: u32,

    // Last values pushed to the element
    applied_playing: bool,
    applied_looping: Option<bool>,
}

impl<M: MediaElement> PlayerView<M> {
    pub fn new(media: M) -> Self {
        Self {
            media,
            mounted: None,
            progress: 0,
            applied_playing: false,
            applied_looping: None,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// Mutable access for hosts that drive the element (e.g. a simulated clock)
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Local progress in whole seconds
    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    // ===== Binding =====

    /// Reconcile the media element with the store
    pub fn sync(&mut self, store: &PlaybackStore) {
        let Some(episode) = store.current_episode() else {
            self.unmount();
            return;
        };

        let selection = store.selection();
        if self.mounted.as_ref().map(|m| m.selection) != Some(selection) {
            if self.mounted.is_none() {
                self.mounted = Some(Mounted {
                    selection,
                    listeners: MOUNT_EVENTS
                        .iter()
                        .map(|kind| self.media.add_listener(*kind))
                        .collect(),
                    time_listener: None,
                });
            } else if let Some(mounted) = self.mounted.as_mut() {
                mounted.selection = selection;
            }

            debug!(title = episode.title(), url = episode.url(), "Loading episode");
            self.progress = 0;
            self.media.set_looping(store.is_looping());
            self.applied_looping = Some(store.is_looping());
            self.media.load(episode.url());

            // Autoplay: a freshly selected episode always starts, and the
            // element's play notification brings the store along
            self.media.play();
            self.applied_playing = true;
            return;
        }

        if self.applied_looping != Some(store.is_looping()) {
            self.media.set_looping(store.is_looping());
            self.applied_looping = Some(store.is_looping());
        }

        if self.applied_playing != store.is_playing() {
            if store.is_playing() {
                debug!("Starting playback");
                self.media.play();
            } else {
                debug!("Pausing playback");
                self.media.pause();
            }
            self.applied_playing = store.is_playing();
        }
    }

    /// React to one notification from the media element
    pub fn handle_media_event(&mut self, store: &mut PlaybackStore, event: MediaEvent) {
        if self.mounted.is_none() {
            trace!(?event, "Ignoring media event while unmounted");
            return;
        }

        match event {
            MediaEvent::LoadedMetadata { duration } => {
                debug!(duration, "Metadata loaded");
                self.progress = 0;
                self.media.seek(0.0);
                self.subscribe_progress();
            }
            MediaEvent::TimeUpdate { current_time } => {
                if self.mounted.as_ref().is_some_and(|m| m.time_listener.is_some()) {
                    self.progress = whole_seconds(current_time);
                }
            }
            MediaEvent::Play => store.set_playing_state(true),
            MediaEvent::Pause => store.set_playing_state(false),
            MediaEvent::Ended => {
                if store.has_next() {
                    debug!("Episode ended, playing next");
                    store.play_next();
                } else {
                    debug!("Episode ended, queue finished");
                    store.clear_player_state();
                }
            }
            MediaEvent::Error { message } => {
                warn!(%message, "Media element failed");
                store.set_playing_state(false);
            }
        }
    }

    /// Handle every queued media notification, syncing after each
    ///
    /// Returns the number of notifications handled.
    pub fn pump(&mut self, store: &mut PlaybackStore) -> usize {
        let mut handled = 0;
        while let Some(event) = self.media.poll_event() {
            self.handle_media_event(store, event);
            self.sync(store);
            handled += 1;
        }
        handled
    }

    /// Move playback to `seconds` (slider input)
    ///
    /// Clamped to the episode duration; ignored with nothing mounted.
    pub fn seek(&mut self, store: &PlaybackStore, seconds: u32) {
        let Some(episode) = store.current_episode() else {
            return;
        };
        if self.mounted.is_none() {
            return;
        }

        let target = seconds.min(episode.duration_secs());
        self.media.seek(f64::from(target));
        self.progress = target;
    }

    /// Run a transport action if its control is enabled
    ///
    /// Returns whether the action ran. The view is synced afterwards either way.
    pub fn dispatch(&mut self, store: &mut PlaybackStore, action: TransportAction) -> bool {
        let controls = TransportControls::from_store(store);
        if !controls.allows(action) {
            debug!(?action, "Ignoring action on disabled control");
            return false;
        }

        match action {
            TransportAction::ToggleShuffle => store.toggle_shuffle(),
            TransportAction::Previous => store.play_previous(),
            TransportAction::TogglePlay => store.toggle_play(),
            TransportAction::Next => store.play_next(),
            TransportAction::ToggleLoop => store.toggle_loop(),
            TransportAction::TogglePanel => store.toggle_panel_expanded(),
            TransportAction::Seek(seconds) => self.seek(store, seconds),
        }

        self.sync(store);
        true
    }

    // ===== Rendering =====

    /// Build the render model for the current store state
    pub fn render(&self, store: &PlaybackStore) -> PlayerSnapshot {
        let episode = store.current_episode();
        let duration = episode.map_or(0, |e| e.duration_secs());

        PlayerSnapshot {
            panel_expanded: store.is_panel_expanded(),
            now_playing: episode.map(NowPlaying::from),
            elapsed: format_time(self.progress),
            total: format_time(duration),
            slider: episode.map(|e| SliderModel {
                max: e.duration_secs(),
                value: self.progress,
            }),
            fill_percent: if episode.is_some() {
                fill_percent(self.progress, duration)
            } else {
                0
            },
            controls: TransportControls::from_store(store),
            media_mounted: self.mounted.is_some(),
        }
    }

    // ===== Internal =====

    fn subscribe_progress(&mut self) {
        if let Some(mounted) = self.mounted.as_mut() {
            if mounted.time_listener.is_none() {
                mounted.time_listener = Some(self.media.add_listener(MediaEventKind::TimeUpdate));
            }
        }
    }

    fn unmount(&mut self) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };

        debug!("Unmounting media element");
        for id in mounted.listeners.into_iter().chain(mounted.time_listener) {
            self.media.remove_listener(id);
        }
        self.media.unload();
        self.progress = 0;
        self.applied_playing = false;
        self.applied_looping = None;
    }
}

impl<M: MediaElement> Drop for PlayerView<M> {
    fn drop(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            for id in mounted.listeners.into_iter().chain(mounted.time_listener) {
                self.media.remove_listener(id);
            }
        }
    }
}
