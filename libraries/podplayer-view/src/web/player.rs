//! WASM-compatible player facade

use super::audio::HtmlAudioMedia;
use crate::{transport::TransportAction, view::PlayerView};
use js_sys::Function;
use podplayer_playback::{Episode, PlaybackConfig, PlaybackStore};
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// WASM-compatible player
///
/// Owns the page's playback store and the view bound to its `<audio>`
/// element, with a JavaScript-friendly API.
#[wasm_bindgen]
pub struct WasmPlayer {
    store: PlaybackStore,
    view: PlayerView<HtmlAudioMedia>,

    // Called with the drained store events after every change
    on_change: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player bound to `element`
    ///
    /// `config` is an optional `{ looping, shuffling, panel_expanded }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlAudioElement, config: JsValue) -> Result<WasmPlayer, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let config: PlaybackConfig = if config.is_undefined() || config.is_null() {
            PlaybackConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        Ok(Self {
            store: PlaybackStore::new(config),
            view: PlayerView::new(HtmlAudioMedia::new(element)),
            on_change: None,
        })
    }

    // ===== Queue Control =====

    /// Play a single episode
    pub fn play(&mut self, episode: JsValue) -> Result<(), JsValue> {
        let episode: Episode = serde_wasm_bindgen::from_value(episode)
            .map_err(|e| JsValue::from_str(&format!("Invalid episode: {}", e)))?;
        self.store.play(episode);
        self.after_change();
        Ok(())
    }

    /// Replace the queue and start at `index`
    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&mut self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let episodes: Vec<Episode> = serde_wasm_bindgen::from_value(list)
            .map_err(|e| JsValue::from_str(&format!("Invalid episode list: {}", e)))?;
        self.store
            .play_list(episodes, index)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.after_change();
        Ok(())
    }

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.store.play_next();
        self.after_change();
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.store.play_previous();
        self.after_change();
    }

    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&mut self) {
        self.store.clear_player_state();
        self.after_change();
    }

    // ===== Flags =====

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.store.toggle_play();
        self.after_change();
    }

    #[wasm_bindgen(js_name = setPlayingState)]
    pub fn set_playing_state(&mut self, playing: bool) {
        self.store.set_playing_state(playing);
        self.after_change();
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) {
        self.store.toggle_loop();
        self.after_change();
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.store.toggle_shuffle();
        self.after_change();
    }

    #[wasm_bindgen(js_name = togglePanelExpanded)]
    pub fn toggle_panel_expanded(&mut self) {
        self.store.toggle_panel_expanded();
        self.after_change();
    }

    // ===== Transport =====

    /// Run a transport action (`{ action: "next" }`, `{ action: "seek", seconds: 30 }`)
    ///
    /// Returns false when the matching control is disabled.
    pub fn dispatch(&mut self, action: JsValue) -> Result<bool, JsValue> {
        let action: TransportAction = serde_wasm_bindgen::from_value(action)
            .map_err(|e| JsValue::from_str(&format!("Invalid action: {}", e)))?;
        let ran = self.view.dispatch(&mut self.store, action);
        self.after_change();
        Ok(ran)
    }

    /// Slider input, in whole seconds
    pub fn seek(&mut self, seconds: u32) {
        self.view.seek(&self.store, seconds);
    }

    /// Handle queued `<audio>` notifications
    ///
    /// Call from the wake callback (see `onMediaEvent`) or once per frame.
    pub fn pump(&mut self) -> usize {
        let handled = self.view.pump(&mut self.store);
        self.after_change();
        handled
    }

    // ===== State Queries =====

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.store.is_playing()
    }

    #[wasm_bindgen(js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.store.is_looping()
    }

    #[wasm_bindgen(js_name = isShuffling)]
    pub fn is_shuffling(&self) -> bool {
        self.store.is_shuffling()
    }

    #[wasm_bindgen(js_name = isPanelExpanded)]
    pub fn is_panel_expanded(&self) -> bool {
        self.store.is_panel_expanded()
    }

    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.store.has_next()
    }

    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.store.has_previous()
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.store.current_index()
    }

    #[wasm_bindgen(js_name = queueLength)]
    pub fn queue_length(&self) -> usize {
        self.store.queue_len()
    }

    /// Queue as an array of episode objects
    #[wasm_bindgen(js_name = getQueue)]
    pub fn get_queue(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.store.queue()).unwrap_or(JsValue::NULL)
    }

    /// Render model for the player panel
    pub fn render(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.view.render(&self.store))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    // ===== Event Listeners =====

    /// Register store change callback, called with an array of events
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    /// Register a callback fired whenever the `<audio>` element queues a
    /// notification; it should call `pump`
    #[wasm_bindgen(js_name = onMediaEvent)]
    pub fn on_media_event(&mut self, callback: Function) {
        self.view.media_mut().set_wake(Some(callback));
    }

    // ===== Internal =====

    fn after_change(&mut self) {
        self.view.sync(&self.store);

        let events = self.store.drain_events();
        if events.is_empty() {
            return;
        }
        if let Some(ref cb) = self.on_change {
            if let Ok(js_events) = serde_wasm_bindgen::to_value(&events) {
                cb.call1(&JsValue::NULL, &js_events).ok();
            }
        }
    }
}
