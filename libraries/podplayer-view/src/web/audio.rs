//! `MediaElement` over `HtmlAudioElement`

use crate::media::{ListenerId, MediaElement, MediaEvent, MediaEventKind};
use js_sys::Function;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlAudioElement};

struct Registered {
    kind: MediaEventKind,
    closure: Closure<dyn FnMut(Event)>,
}

/// Browser audio element
///
/// Each listener is a JS closure registered on the element. Notifications
/// are queued and drained through `poll_event`; the optional wake callback
/// lets the page know there is something to pump.
pub struct HtmlAudioMedia {
    element: HtmlAudioElement,
    listeners: BTreeMap<ListenerId, Registered>,
    next_listener: u64,
    pending: Rc<RefCell<VecDeque<MediaEvent>>>,
    wake: Rc<RefCell<Option<Function>>>,
}

impl HtmlAudioMedia {
    /// Wrap an existing `<audio>` element
    pub fn new(element: HtmlAudioElement) -> Self {
        Self {
            element,
            listeners: BTreeMap::new(),
            next_listener: 0,
            pending: Rc::new(RefCell::new(VecDeque::new())),
            wake: Rc::new(RefCell::new(None)),
        }
    }

    /// Create a detached `<audio>` element
    pub fn create() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        let element = document
            .create_element("audio")?
            .dyn_into::<HtmlAudioElement>()
            .map_err(|_| JsValue::from_str("Created element is not <audio>"))?;
        Ok(Self::new(element))
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }

    /// Callback invoked (with no arguments) whenever a notification is queued
    pub fn set_wake(&mut self, wake: Option<Function>) {
        *self.wake.borrow_mut() = wake;
    }

    fn detach(&self, registered: &Registered) {
        if let Err(e) = self.element.remove_event_listener_with_callback(
            registered.kind.dom_name(),
            registered.closure.as_ref().unchecked_ref(),
        ) {
            warn!(?e, kind = ?registered.kind, "Failed to remove media listener");
        }
    }
}

/// Read the notification payload off the element
fn capture(element: &HtmlAudioElement, kind: MediaEventKind) -> MediaEvent {
    match kind {
        MediaEventKind::LoadedMetadata => MediaEvent::LoadedMetadata {
            duration: element.duration(),
        },
        MediaEventKind::TimeUpdate => MediaEvent::TimeUpdate {
            current_time: element.current_time(),
        },
        MediaEventKind::Play => MediaEvent::Play,
        MediaEventKind::Pause => MediaEvent::Pause,
        MediaEventKind::Ended => MediaEvent::Ended,
        MediaEventKind::Error => MediaEvent::Error {
            message: element.error().map_or_else(
                || "Unknown media error".to_string(),
                |e| format!("Media error code {}: {}", e.code(), e.message()),
            ),
        },
    }
}

impl MediaElement for HtmlAudioMedia {
    fn load(&mut self, url: &str) {
        // Notifications from the previous source are stale once it is replaced
        self.pending.borrow_mut().clear();
        self.element.set_src(url);
    }

    fn unload(&mut self) {
        self.pending.borrow_mut().clear();
        if let Err(e) = self.element.remove_attribute("src") {
            warn!(?e, "Failed to detach media source");
        }
        // Aborts any in-flight fetch for the old source
        self.element.load();
    }

    fn play(&mut self) {
        // Outcome arrives as a play (or error) event
        if let Err(e) = self.element.play() {
            warn!(?e, "Media play request rejected");
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            warn!(?e, "Media pause request rejected");
        }
    }

    fn set_looping(&mut self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn seek(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;

        let element = self.element.clone();
        let pending = Rc::clone(&self.pending);
        let wake = Rc::clone(&self.wake);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            pending.borrow_mut().push_back(capture(&element, kind));
            if let Some(callback) = wake.borrow().as_ref() {
                callback.call0(&JsValue::NULL).ok();
            }
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) = self
            .element
            .add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())
        {
            warn!(?e, ?kind, "Failed to add media listener");
        }

        self.listeners.insert(id, Registered { kind, closure });
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        if let Some(registered) = self.listeners.remove(&id) {
            self.detach(&registered);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.pending.borrow_mut().pop_front()
    }
}

impl Drop for HtmlAudioMedia {
    fn drop(&mut self) {
        for registered in std::mem::take(&mut self.listeners).values() {
            self.detach(registered);
        }
    }
}
