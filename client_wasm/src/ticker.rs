//! Fixed-period tick scheduler over `window.setInterval`.
//!
//! The game loop controller injects the tick callback. Stopping is
//! idempotent; starting while already running is a no-op.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub struct Ticker {
    period_ms: i32,
    handle: Option<i32>,
}

impl Ticker {
    pub fn new(period_ms: i32) -> Self {
        Self {
            period_ms,
            handle: None,
        }
    }

    pub fn start(&mut self, callback: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
        if self.handle.is_some() {
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            self.period_ms,
        )?;
        self.handle = Some(handle);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
