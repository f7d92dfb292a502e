//! Podplayer CLI
//!
//! Native host for the playback store and player view: loads an episode feed
//! and plays it through a simulated media element, printing the player panel
//! as it changes.

pub mod config;
pub mod error;
pub mod feed;
pub mod session;

pub use config::Settings;
pub use error::{CliError, Result};
pub use session::{run_session, SessionEnd, SessionOptions, SessionReport};
