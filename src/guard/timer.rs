//! setTimeout-backed artificial latency
//!
//! The demo's "remote call" is a plain delay. On wasm it is a Promise
//! resolved by `setTimeout`, awaited through wasm-bindgen-futures so the
//! event loop keeps turning. Non-wasm builds have no event loop to yield
//! to; they block the thread for the same duration, the same split the
//! `instant` crate papers over for `Instant`.

/// Suspend for `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(ms: u32) {
    use wasm_bindgen::JsValue;

    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        match web_sys::window() {
            Some(window) => {
                if window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                    .is_err()
                {
                    let _ = resolve.call0(&JsValue::NULL);
                }
            }
            // No window (e.g. worker without one): resolve immediately
            None => {
                let _ = resolve.call0(&JsValue::NULL);
            }
        }
    });

    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Suspend for `ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(ms: u32) {
    std::thread::sleep(std::time::Duration::from_millis(ms as u64));
}
