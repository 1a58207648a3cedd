use tauri::{AppHandle, Manager, WebviewWindow};

use crate::{ZoomChange, ZoomState, MAIN_WINDOW_LABEL};

fn main_window<F>(app_handle: &AppHandle, action: &str, log: &F) -> Option<WebviewWindow>
where
    F: Fn(&str),
{
    let window = app_handle.get_webview_window(MAIN_WINDOW_LABEL);
    if window.is_none() {
        log(&format!("{action} skipped: main window not found"));
    }
    window
}

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "show_main_window", &log) else {
        return;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

/// First paint of a new window: show it and bring the app forward.
pub(crate) fn reveal_main_window<F>(app_handle: &AppHandle, open_devtools: bool, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "reveal_main_window", &log) else {
        return;
    };

    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }

    #[cfg(target_os = "macos")]
    if let Err(error) = app_handle.show() {
        log(&format!("failed to restore dock presence: {error}"));
    }

    if open_devtools {
        window.open_devtools();
    }
    log("main window revealed");
}

pub(crate) fn close_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "close_main_window", &log) else {
        return;
    };
    if let Err(error) = window.close() {
        log(&format!("failed to close main window: {error}"));
    }
}

pub(crate) fn minimize_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "minimize_main_window", &log) else {
        return;
    };
    if let Err(error) = window.minimize() {
        log(&format!("failed to minimize main window: {error}"));
    }
}

pub(crate) fn toggle_maximize_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "toggle_maximize_main_window", &log) else {
        return;
    };

    let result = match window.is_maximized() {
        Ok(true) => window.unmaximize(),
        Ok(false) => window.maximize(),
        Err(error) => {
            log(&format!("failed to read main window maximized state: {error}"));
            return;
        }
    };
    if let Err(error) = result {
        log(&format!("failed to toggle main window maximize: {error}"));
    }
}

pub(crate) fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "reload_main_window", &log) else {
        return;
    };
    if let Err(error) = window.eval("window.location.reload()") {
        log(&format!("failed to reload main window: {error}"));
    }
}

/// Navigates to the current URL again so cached documents are refetched.
pub(crate) fn force_reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "force_reload_main_window", &log) else {
        return;
    };

    let result = window.url().and_then(|url| window.navigate(url));
    if let Err(error) = result {
        log(&format!("failed to force reload main window: {error}"));
    }
}

pub(crate) fn toggle_devtools<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "toggle_devtools", &log) else {
        return;
    };
    if window.is_devtools_open() {
        window.close_devtools();
    } else {
        window.open_devtools();
    }
}

pub(crate) fn zoom_main_window<F>(app_handle: &AppHandle, change: ZoomChange, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "zoom_main_window", &log) else {
        return;
    };
    let Some(zoom) = app_handle.try_state::<ZoomState>() else {
        log("zoom_main_window skipped: zoom state is not managed");
        return;
    };

    let factor = zoom.apply(change);
    if let Err(error) = window.set_zoom(factor) {
        log(&format!("failed to set main window zoom to {factor}: {error}"));
    }
}

pub(crate) fn toggle_fullscreen<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle, "toggle_fullscreen", &log) else {
        return;
    };

    match window.is_fullscreen() {
        Ok(fullscreen) => {
            if let Err(error) = window.set_fullscreen(!fullscreen) {
                log(&format!("failed to toggle fullscreen: {error}"));
            }
        }
        Err(error) => log(&format!("failed to read fullscreen state: {error}")),
    }
}
