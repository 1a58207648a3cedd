use tauri::{AppHandle, Emitter, Manager};

use crate::{MAIN_WINDOW_LABEL, NEW_CHAT_EVENT};

/// Tells the window's content to start a new conversation. Dropped when no
/// window is open.
pub(crate) fn emit_new_chat<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    if app_handle.get_webview_window(MAIN_WINDOW_LABEL).is_none() {
        log("new-chat skipped: main window not found");
        return;
    }

    if let Err(error) = app_handle.emit_to(MAIN_WINDOW_LABEL, NEW_CHAT_EVENT, ()) {
        log(&format!("failed to emit {NEW_CHAT_EVENT}: {error}"));
    }
}
