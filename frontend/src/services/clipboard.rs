use wasm_bindgen_futures::JsFuture;

use crate::services::logging::Logger;

/// Write `text` to the system clipboard via the async Clipboard API.
/// Returns whether the write succeeded; failures are logged, never
/// surfaced as errors (the browser may deny clipboard access).
pub async fn write_text(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let clipboard = window.navigator().clipboard();
    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => true,
        Err(_) => {
            Logger::warn_with_component("clipboard", "Clipboard write was rejected");
            false
        }
    }
}
