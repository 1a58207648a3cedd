use tauri::AppHandle;

use crate::{append_desktop_log, menu_actions, ui_events, window_actions, ZoomChange};

pub fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = menu_actions::action_from_menu_id(menu_id) else {
        return;
    };

    match action {
        menu_actions::MenuAction::NewChat => {
            ui_events::emit_new_chat(app_handle, append_desktop_log)
        }
        menu_actions::MenuAction::CloseWindow => {
            window_actions::close_main_window(app_handle, append_desktop_log)
        }
        menu_actions::MenuAction::Minimize => {
            window_actions::minimize_main_window(app_handle, append_desktop_log)
        }
        menu_actions::MenuAction::ZoomWindow => {
            window_actions::toggle_maximize_main_window(app_handle, append_desktop_log)
        }
        menu_actions::MenuAction::BringAllToFront => {
            window_actions::show_main_window(app_handle, append_desktop_log)
        }
        menu_actions::MenuAction::Reload => {
            window_actions::reload_main_window(app_handle, append_desktop_log)
        }
        menu_actions::MenuAction::ForceReload => {
            window_actions::force_reload_main_window(app_handle, append_desktop_log)
        }
        menu_actions::MenuAction::ToggleDevTools => {
            window_actions::toggle_devtools(app_handle, append_desktop_log)
        }
        menu_actions::MenuAction::ResetZoom => {
            window_actions::zoom_main_window(app_handle, ZoomChange::Reset, append_desktop_log)
        }
        menu_actions::MenuAction::ZoomIn => {
            window_actions::zoom_main_window(app_handle, ZoomChange::In, append_desktop_log)
        }
        menu_actions::MenuAction::ZoomOut => {
            window_actions::zoom_main_window(app_handle, ZoomChange::Out, append_desktop_log)
        }
        menu_actions::MenuAction::ToggleFullscreen => {
            window_actions::toggle_fullscreen(app_handle, append_desktop_log)
        }
        menu_actions::MenuAction::Quit => {
            append_desktop_log("quit requested from app menu");
            app_handle.exit(0);
        }
    }
}
