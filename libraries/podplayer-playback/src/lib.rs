//! Podplayer - Playback State
//!
//! Platform-agnostic playback state for the Podplayer front-end.
//!
//! This crate provides:
//! - Validated `Episode` values
//! - The episode queue with a current index
//! - Play, loop, shuffle and panel flags
//! - Sequencing (next/previous, random next under shuffle)
//! - Change events for re-rendering
//!
//! # Architecture
//!
//! `podplayer-playback` knows nothing about audio output or rendering. The
//! store is created once by the host and passed by reference to whatever
//! drives it; `podplayer-view` binds it to a media element.
//!
//! # Example
//!
//! ```rust
//! use podplayer_playback::{Episode, PlaybackStore};
//!
//! let mut store = PlaybackStore::default();
//!
//! let episodes = vec![
//!     Episode::new("Ep 1", "Host", "/thumbs/1.jpg", 1800, "/media/1.mp3").unwrap(),
//!     Episode::new("Ep 2", "Host", "/thumbs/2.jpg", 2400, "/media/2.mp3").unwrap(),
//! ];
//!
//! store.play_list(episodes, 0).unwrap();
//! assert!(store.is_playing());
//! assert!(store.has_next());
//!
//! store.play_next();
//! assert_eq!(store.current_episode().unwrap().title(), "Ep 2");
//! assert!(!store.has_next());
//! ```

mod error;
mod events;
mod shuffle;
mod store;
pub mod types;

// Public exports
pub use error::{EpisodeError, PlaybackError, Result};
pub use events::PlayerEvent;
pub use store::PlaybackStore;
pub use types::{Episode, PlaybackConfig};
