// Small browser helpers shared by the widgets

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::errors::LandingError;

pub fn window() -> Result<web_sys::Window, LandingError> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, LandingError> {
    window()?.document().ok_or(LandingError::NoDocument)
}

/// Best-effort text for a thrown JS value.
pub fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// A window event listener that unregisters itself when dropped.
pub struct WindowListener {
    window: web_sys::Window,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn add(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, LandingError> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| LandingError::Dom(js_reason(&err)))?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> Result<u32, LandingError> {
    let width = window()?
        .inner_width()
        .map_err(|err| LandingError::Dom(js_reason(&err)))?;
    width
        .as_f64()
        .map(|w| w.max(0.0) as u32)
        .ok_or_else(|| LandingError::Dom("innerWidth is not a number".into()))
}
