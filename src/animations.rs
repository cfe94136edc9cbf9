//! Bootstrap for the reveal-on-scroll animation library loaded by the page.
//!
//! The library is a global `WOW` constructor; the handle is created once by
//! the root component and stopped when it unmounts.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::errors::LandingError;
use crate::util::{js_reason, window};

const LIBRARY_GLOBAL: &str = "WOW";

pub struct AnimationHandle {
    instance: JsValue,
}

impl AnimationHandle {
    /// `new WOW().init()`.
    pub fn init() -> Result<Self, LandingError> {
        let window = window()?;
        let ctor = Reflect::get(&window, &JsValue::from_str(LIBRARY_GLOBAL))
            .map_err(|err| LandingError::Animation(js_reason(&err)))?;
        let ctor: Function = ctor
            .dyn_into()
            .map_err(|_| not_loaded(LIBRARY_GLOBAL))?;
        let instance = Reflect::construct(&ctor, &Array::new())
            .map_err(|err| LandingError::Animation(js_reason(&err)))?;
        call_method(&instance, "init")?;
        log::debug!("animation library initialised");
        Ok(Self { instance })
    }

    pub fn teardown(self) {
        // older library builds have no stop()
        match call_method(&self.instance, "stop") {
            Ok(_) => log::debug!("animation library stopped"),
            Err(err) => log::debug!("animation teardown skipped: {err}"),
        }
    }
}

fn call_method(target: &JsValue, name: &str) -> Result<JsValue, LandingError> {
    let method = Reflect::get(target, &JsValue::from_str(name))
        .map_err(|err| LandingError::Animation(js_reason(&err)))?;
    let method: Function = method
        .dyn_into()
        .map_err(|_| missing_method(name))?;
    method
        .call0(target)
        .map_err(|err| LandingError::Animation(js_reason(&err)))
}

fn not_loaded(global: &str) -> LandingError {
    LandingError::Animation(format!("`{global}` is not loaded"))
}

fn missing_method(name: &str) -> LandingError {
    LandingError::Animation(format!("no `{name}` method"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_names_the_global() {
        let err = not_loaded(LIBRARY_GLOBAL);
        assert!(matches!(err, LandingError::Animation(_)));
        assert_eq!(err.to_string(), "animation library: `WOW` is not loaded");
    }

    #[test]
    fn missing_method_names_the_method() {
        assert_eq!(
            missing_method("stop").to_string(),
            "animation library: no `stop` method"
        );
    }
}
