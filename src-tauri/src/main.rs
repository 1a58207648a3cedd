#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_events;
mod app_menu;
mod app_runtime;
mod app_types;
mod content_policy;
mod content_protocol;
mod content_target;
mod desktop_bridge;
mod desktop_bridge_commands;
mod error;
mod host_bridge;
mod logging;
mod main_window;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod navigation_policy;
mod runtime_paths;
mod shell_opener;
mod system_stats;
mod ui_events;
mod window_actions;
mod window_controller;

pub(crate) use app_constants::*;
pub(crate) use app_types::{
    AppPaths, BridgeResult, InstalledMenu, SystemStats, ZoomChange, ZoomState,
};
pub(crate) use content_protocol::ContentPipeline;
pub(crate) use content_target::ContentTarget;
pub(crate) use error::ShellError;
pub(crate) use window_controller::WindowController;

fn main() {
    app_runtime::run();
}

fn append_desktop_log(message: &str) {
    logging::append_desktop_log(logging::DesktopLogCategory::Runtime, message);
}

fn append_startup_log(message: &str) {
    logging::append_desktop_log(logging::DesktopLogCategory::Startup, message);
}

fn append_window_log(message: &str) {
    logging::append_desktop_log(logging::DesktopLogCategory::Window, message);
}

fn append_bridge_log(message: &str) {
    logging::append_desktop_log(logging::DesktopLogCategory::Bridge, message);
}
