//! Browser timers and frame scheduling

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::ScopedTimer;

/// `setInterval` handle that clears itself on cancel or drop
pub struct Interval {
    id: Option<i32>,
    // Kept alive for as long as the interval may fire
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: i32, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut()>::new(callback);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .ok()?;
        log::debug!("Interval {} armed ({} ms)", id, period_ms);
        Some(Self {
            id: Some(id),
            _closure: closure,
        })
    }
}

impl ScopedTimer for Interval {
    fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
            log::debug!("Interval {} cleared", id);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Schedule `callback` for the next display refresh
pub fn request_animation_frame(callback: impl FnOnce(f64) + 'static) {
    let Some(window) = web_sys::window() else {
        log::error!("No window, cannot schedule frame");
        return;
    };
    // Frees itself after the single call
    let callback = Closure::once_into_js(callback);
    let _ = window.request_animation_frame(callback.unchecked_ref());
}

/// Current viewport size, if the window can be measured
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}
