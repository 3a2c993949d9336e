use gloo::console;

/// Component-tagged console logger so messages from different parts of
/// the UI are easy to tell apart in the browser console.
pub struct Logger;

impl Logger {
    pub fn info_with_component(component: &str, message: &str) {
        console::info!(format!("[{}] {}", component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(format!("[{}] {}", component, message));
    }
}
