//! Thin wrappers around the browser's blocking dialogs.
//!
//! A missing window or a dialog the browser refuses to open reads as
//! "cancelled".

/// Blocking message box.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking OK/Cancel question. Cancel and failure both read as false.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Blocking text input pre-filled with `default`. None means the user
/// dismissed the dialog.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message_and_default(message, default)
        .ok()
        .flatten()
}
