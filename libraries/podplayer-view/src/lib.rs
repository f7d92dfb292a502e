//! Podplayer - Player View
//!
//! Binds the playback store to an audio output primitive and renders the
//! player panel.
//!
//! This crate provides:
//! - The `MediaElement` trait (load, play/pause, loop, seek, listeners)
//! - `PlayerView`: play/pause on flag change, progress tracking, natural-end
//!   handling, transport dispatch
//! - `PlayerSnapshot`: the render model (now playing, labels, slider, controls)
//! - `SimulatedMedia`: a clock-driven element for native hosts and tests
//! - `web` feature: an `HtmlAudioElement` binding and a `wasm_bindgen` facade
//!
//! # Example
//!
//! ```rust
//! use podplayer_playback::{Episode, PlaybackStore};
//! use podplayer_view::{PlayerView, SimulatedMedia, TransportAction};
//!
//! let episode = Episode::new("Ep 1", "Host", "/thumbs/1.jpg", 90, "/media/1.mp3").unwrap();
//!
//! let mut store = PlaybackStore::default();
//! let mut view = PlayerView::new(SimulatedMedia::with_catalog([("/media/1.mp3", 90.0)]));
//!
//! store.play(episode);
//! view.sync(&store);
//! view.pump(&mut store);
//!
//! view.media_mut().advance(45.0);
//! view.pump(&mut store);
//!
//! let snapshot = view.render(&store);
//! assert_eq!(snapshot.elapsed, "00:45");
//! assert_eq!(snapshot.fill_percent, 50);
//!
//! view.dispatch(&mut store, TransportAction::TogglePlay);
//! assert!(!store.is_playing());
//! ```

mod media;
mod progress;
mod simulated;
mod snapshot;
mod transport;
mod view;

#[cfg(feature = "web")]
pub mod web;

// Public exports
pub use media::{ListenerId, MediaElement, MediaEvent, MediaEventKind};
pub use progress::{fill_percent, format_time, whole_seconds};
pub use simulated::SimulatedMedia;
pub use snapshot::{NowPlaying, PlayerSnapshot, SliderModel};
pub use transport::{ControlState, PlayPauseIcon, TransportAction, TransportControls};
pub use view::PlayerView;
