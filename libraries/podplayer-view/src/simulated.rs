//! Clock-driven media element for native hosts and tests
//!
//! Plays nothing; it advances a position when told to and raises the same
//! notifications a browser `<audio>` element would, in the same order.

use crate::media::{ListenerId, MediaElement, MediaEvent, MediaEventKind};
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::trace;

#[derive(Debug, Clone)]
struct LoadedSource {
    url: String,
    duration: f64,
}

/// Simulated media element
///
/// Sources must be registered with their duration before they are loaded;
/// loading an unknown URL raises `MediaEvent::Error`, the way a browser
/// reports an unplayable source.
#[derive(Debug, Default)]
pub struct SimulatedMedia {
    catalog: HashMap<String, f64>,
    source: Option<LoadedSource>,
    position: f64,
    playing: bool,
    looping: bool,

    listeners: BTreeMap<ListenerId, MediaEventKind>,
    next_listener: u64,

    pending: VecDeque<MediaEvent>,
}

impl SimulatedMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `url` playable with the given length in seconds
    pub fn register(&mut self, url: impl Into<String>, duration: f64) {
        self.catalog.insert(url.into(), duration.max(0.0));
    }

    /// Build an element that knows every `(url, duration)` pair
    pub fn with_catalog<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut media = Self::new();
        for (url, duration) in sources {
            media.register(url, duration);
        }
        media
    }

    /// Advance the clock by `elapsed` seconds of playback
    ///
    /// Has no effect while paused or without a source.
    pub fn advance(&mut self, elapsed: f64) {
        if !self.playing {
            return;
        }
        let Some(duration) = self.source.as_ref().map(|s| s.duration) else {
            return;
        };

        self.position += elapsed.max(0.0);

        if self.position < duration {
            self.emit(MediaEvent::TimeUpdate {
                current_time: self.position,
            });
            return;
        }

        if self.looping {
            self.position = if duration > 0.0 {
                self.position % duration
            } else {
                0.0
            };
            self.emit(MediaEvent::TimeUpdate {
                current_time: self.position,
            });
        } else {
            // Browser order at natural end: timeupdate, pause, ended
            self.position = duration;
            self.playing = false;
            self.emit(MediaEvent::TimeUpdate {
                current_time: self.position,
            });
            self.emit(MediaEvent::Pause);
            self.emit(MediaEvent::Ended);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// URL of the loaded source
    pub fn source(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.url.as_str())
    }

    /// Kinds that currently have a listener
    pub fn listened_kinds(&self) -> Vec<MediaEventKind> {
        let mut kinds: Vec<_> = self.listeners.values().copied().collect();
        kinds.sort();
        kinds.dedup();
        kinds
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    fn emit(&mut self, event: MediaEvent) {
        let kind = event.kind();
        if self.listeners.values().any(|k| *k == kind) {
            trace!(?event, "Simulated media event");
            self.pending.push_back(event);
        }
    }
}

impl MediaElement for SimulatedMedia {
    fn load(&mut self, url: &str) {
        // Replacing the source drops whatever the old one had queued
        self.pending.clear();
        self.playing = false;
        self.position = 0.0;

        match self.catalog.get(url).copied() {
            Some(duration) => {
                self.source = Some(LoadedSource {
                    url: url.to_string(),
                    duration,
                });
                self.emit(MediaEvent::LoadedMetadata { duration });
            }
            None => {
                self.source = None;
                self.emit(MediaEvent::Error {
                    message: format!("Unsupported source: {}", url),
                });
            }
        }
    }

    fn unload(&mut self) {
        self.pending.clear();
        self.source = None;
        self.playing = false;
        self.position = 0.0;
    }

    fn play(&mut self) {
        if self.source.is_some() && !self.playing {
            self.playing = true;
            self.emit(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.emit(MediaEvent::Pause);
        }
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn seek(&mut self, seconds: f64) {
        let Some(duration) = self.source.as_ref().map(|s| s.duration) else {
            return;
        };
        self.position = seconds.clamp(0.0, duration);
        self.emit(MediaEvent::TimeUpdate {
            current_time: self.position,
        });
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, kind);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.pending.pop_front()
    }
}
