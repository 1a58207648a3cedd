use serde_json::Value;
use tauri::{AppHandle, Manager};

use crate::{
    append_bridge_log, host_bridge, runtime_paths,
    shell_opener::TauriShellOpener,
    system_stats::{self, SysinfoMetrics},
    AppPaths, BridgeResult, SystemStats,
};

#[tauri::command]
pub(crate) fn app_version(app_handle: AppHandle) -> String {
    app_handle.package_info().version.to_string()
}

#[tauri::command]
pub(crate) fn platform() -> String {
    host_bridge::current_platform()
}

#[tauri::command]
pub(crate) async fn get_app_path(app_handle: AppHandle) -> AppPaths {
    let path_resolver = app_handle.path();
    let resource_dir = path_resolver.resource_dir().ok();
    AppPaths {
        app: host_bridge::path_string(resource_dir.clone(), "app"),
        user_data: host_bridge::path_string(path_resolver.app_data_dir().ok(), "userData"),
        public: host_bridge::path_string(resource_dir.map(|dir| dir.join("public")), "public"),
        current: host_bridge::path_string(runtime_paths::current_exe_dir(), "current"),
    }
}

#[tauri::command]
pub(crate) async fn reveal_in_folder(app_handle: AppHandle, path: Option<Value>) -> bool {
    let opener = TauriShellOpener::new(&app_handle);
    let task = tauri::async_runtime::spawn_blocking(move || {
        host_bridge::reveal_in_folder(path.as_ref(), &opener)
    });
    match task.await {
        Ok(true) => true,
        Ok(false) => {
            append_bridge_log("reveal-in-folder did not reveal a path");
            false
        }
        Err(error) => {
            append_bridge_log(&format!("reveal-in-folder task failed: {error}"));
            false
        }
    }
}

#[tauri::command]
pub(crate) async fn open_path(app_handle: AppHandle, path: Option<Value>) -> String {
    let opener = TauriShellOpener::new(&app_handle);
    let task =
        tauri::async_runtime::spawn_blocking(move || host_bridge::open_path(path.as_ref(), &opener));
    match task.await {
        Ok(result) => {
            if !result.is_empty() {
                append_bridge_log(&format!("open-path did not open: {result}"));
            }
            result
        }
        Err(error) => {
            let reason = format!("open-path task failed: {error}");
            append_bridge_log(&reason);
            reason
        }
    }
}

#[tauri::command]
pub(crate) async fn system_stats() -> SystemStats {
    system_stats::collect_system_stats(&SysinfoMetrics, host_bridge::current_platform())
}

#[tauri::command]
pub(crate) fn open_external_url(app_handle: AppHandle, url: Option<Value>) -> BridgeResult {
    let opener = TauriShellOpener::new(&app_handle);
    let result = host_bridge::open_external_url(url.as_ref(), &opener);
    if let Some(reason) = result.reason.as_deref() {
        append_bridge_log(&format!("open-external-url rejected {url:?}: {reason}"));
    }
    result
}
