use tauri::{AppHandle, Manager, RunEvent, Window, WindowEvent};

use crate::{append_window_log, WindowController, MAIN_WINDOW_LABEL};
#[cfg(target_os = "macos")]
use crate::{main_window, window_controller::ActivateDecision};

pub(crate) fn handle_window_event(window: &Window, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }

    if let WindowEvent::Destroyed = event {
        let Some(controller) = window.app_handle().try_state::<WindowController>() else {
            return;
        };
        match controller.handle_window_destroyed() {
            Some(id) => append_window_log(&format!("main window closed: {id:?}")),
            None => append_window_log("main window closed without a tracked slot"),
        }
    }
}

#[cfg(target_os = "macos")]
fn handle_reopen(app_handle: &AppHandle) {
    let Some(controller) = app_handle.try_state::<WindowController>() else {
        return;
    };
    let open_windows = app_handle.webview_windows().len();
    match controller.decide_activate(open_windows) {
        ActivateDecision::CreateWindow => {
            append_window_log("activated with no open windows, recreating main window");
            if let Err(error) = main_window::create_main_window(app_handle) {
                append_window_log(&format!("failed to recreate main window: {error}"));
            }
        }
        ActivateDecision::Ignore => {}
    }
}

pub(crate) fn handle_run_event(app_handle: &AppHandle, event: RunEvent) {
    match event {
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => handle_reopen(app_handle),
        // Closing the last window keeps the app alive on macOS; an explicit
        // quit carries an exit code and is let through.
        #[cfg(target_os = "macos")]
        RunEvent::ExitRequested { code: None, api, .. } => {
            append_window_log("last window closed, staying resident");
            api.prevent_exit();
        }
        RunEvent::Exit => {
            append_window_log(&format!(
                "{} process exiting",
                app_handle.package_info().name
            ));
        }
        _ => {}
    }
}
