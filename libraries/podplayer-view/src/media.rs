//! Platform-agnostic media element trait
//!
//! Abstracts the audio output primitive (an HTML `<audio>` element in the
//! browser, a simulated clock on native hosts) so `PlayerView` can drive any
//! of them.

use serde::{Deserialize, Serialize};

/// Notification kinds a media element can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MediaEventKind {
    LoadedMetadata,
    TimeUpdate,
    Play,
    Pause,
    Ended,
    Error,
}

impl MediaEventKind {
    /// DOM event name for this kind
    pub fn dom_name(self) -> &'static str {
        match self {
            MediaEventKind::LoadedMetadata => "loadedmetadata",
            MediaEventKind::TimeUpdate => "timeupdate",
            MediaEventKind::Play => "play",
            MediaEventKind::Pause => "pause",
            MediaEventKind::Ended => "ended",
            MediaEventKind::Error => "error",
        }
    }
}

/// Notification delivered by a media element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Duration is known; playback position can be reported
    LoadedMetadata { duration: f64 },

    /// Playback position moved (periodic while playing, and after seeks)
    TimeUpdate { current_time: f64 },

    /// Element started playing
    Play,

    /// Element paused (including at natural end of track)
    Pause,

    /// Natural end of track; never fired while looping
    Ended,

    /// Source could not be loaded or decoded
    Error { message: String },
}

impl MediaEvent {
    pub fn kind(&self) -> MediaEventKind {
        match self {
            MediaEvent::LoadedMetadata { .. } => MediaEventKind::LoadedMetadata,
            MediaEvent::TimeUpdate { .. } => MediaEventKind::TimeUpdate,
            MediaEvent::Play => MediaEventKind::Play,
            MediaEvent::Pause => MediaEventKind::Pause,
            MediaEvent::Ended => MediaEventKind::Ended,
            MediaEvent::Error { .. } => MediaEventKind::Error,
        }
    }
}

/// Handle for a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Audio output primitive
///
/// Start/pause requests are fire-and-forget; their outcome comes back later
/// as events. Only kinds with at least one registered listener are queued for
/// `poll_event`.
pub trait MediaElement {
    /// Point the element at a new source and start loading it
    fn load(&mut self, url: &str);

    /// Detach the current source
    fn unload(&mut self);

    /// Request playback from the current position
    fn play(&mut self);

    /// Request pause
    fn pause(&mut self);

    /// Native loop flag; while set, end of track wraps and `Ended` is suppressed
    fn set_looping(&mut self, looping: bool);

    /// Jump to `seconds` from the start of the source
    fn seek(&mut self, seconds: f64);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Register interest in one kind of event
    fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId;

    /// Remove a listener registered with `add_listener`
    ///
    /// Unknown ids are ignored.
    fn remove_listener(&mut self, id: ListenerId);

    /// Number of listeners currently registered
    fn listener_count(&self) -> usize;

    /// Next queued event, oldest first
    fn poll_event(&mut self) -> Option<MediaEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kinds_match() {
        assert_eq!(
            MediaEvent::LoadedMetadata { duration: 1.0 }.kind(),
            MediaEventKind::LoadedMetadata
        );
        assert_eq!(
            MediaEvent::TimeUpdate { current_time: 1.0 }.kind(),
            MediaEventKind::TimeUpdate
        );
        assert_eq!(MediaEvent::Ended.kind(), MediaEventKind::Ended);
        assert_eq!(
            MediaEvent::Error {
                message: String::new()
            }
            .kind(),
            MediaEventKind::Error
        );
    }

    #[test]
    fn dom_names() {
        assert_eq!(MediaEventKind::LoadedMetadata.dom_name(), "loadedmetadata");
        assert_eq!(MediaEventKind::TimeUpdate.dom_name(), "timeupdate");
        assert_eq!(MediaEventKind::Ended.dom_name(), "ended");
    }
}
