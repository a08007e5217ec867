use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event};

/// A window event listener that is removed again when the handle is dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(event, handler, false)
    }

    /// Same as [`WindowListener::new`] but tells the browser the handler never
    /// calls `preventDefault`, so scrolling isn't blocked on it.
    pub fn passive<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(event, handler, true)
    }

    fn register<F>(event: &'static str, handler: F, passive: bool) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);

        let mut options = AddEventListenerOptions::new();
        options.passive(passive);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("Failed to register {} listener: {:?}", event, e);
            return None;
        }

        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", self.event, e);
            }
        }
    }
}
