//! Blocking browser notifications

/// Show a modal `window.alert`. Failures are only logged.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("[DIALOG] No window available for alert: {}", message);
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::error!("[DIALOG] alert failed: {:?}", err);
    }
}
