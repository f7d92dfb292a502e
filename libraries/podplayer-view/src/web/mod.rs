//! Browser host
//!
//! `HtmlAudioMedia` drives a real `<audio>` element; `WasmPlayer` exposes
//! store and view to JavaScript.

mod audio;
mod player;

pub use audio::HtmlAudioMedia;
pub use player::WasmPlayer;
