//! Browser timer plumbing: wall-clock reads, timeout/interval wrappers, and
//! a sleep future for async tasks.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Wall-clock epoch milliseconds, as the page's elapsed counter needs them.
#[inline]
pub fn now_wall_ms() -> f64 {
    js_sys::Date::now()
}

pub fn set_timeout(cb: &js_sys::Function, delay_ms: i32) -> Option<i32> {
    web::window().and_then(|w| {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(cb, delay_ms)
            .ok()
    })
}

pub fn clear_timeout(id: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(id);
    }
}

pub fn set_interval(cb: &js_sys::Function, period_ms: i32) -> Option<i32> {
    web::window().and_then(|w| {
        w.set_interval_with_callback_and_timeout_and_arguments_0(cb, period_ms)
            .ok()
    })
}

/// A promise that resolves after `ms`. Resolves immediately when no window
/// is available so awaiting callers cannot hang.
pub fn timeout_promise(ms: i32) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, _reject| {
        if set_timeout(&resolve, ms).is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    })
}

pub async fn sleep(ms: i32) {
    let _ = JsFuture::from(timeout_promise(ms)).await;
}
