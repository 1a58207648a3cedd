use std::path::Path;

use tauri::{AppHandle, Runtime};
use tauri_plugin_opener::OpenerExt;
use url::Url;

/// Side effects delegated to the operating system's shell.
pub(crate) trait ShellOpener {
    fn reveal_item(&self, path: &Path) -> Result<(), String>;
    fn open_path(&self, path: &Path) -> Result<(), String>;
    fn open_url(&self, url: &Url) -> Result<(), String>;
}

pub(crate) struct TauriShellOpener<R: Runtime> {
    app_handle: AppHandle<R>,
}

impl<R: Runtime> TauriShellOpener<R> {
    pub(crate) fn new(app_handle: &AppHandle<R>) -> Self {
        Self {
            app_handle: app_handle.clone(),
        }
    }
}

impl<R: Runtime> ShellOpener for TauriShellOpener<R> {
    fn reveal_item(&self, path: &Path) -> Result<(), String> {
        self.app_handle
            .opener()
            .reveal_item_in_dir(path)
            .map_err(|error| error.to_string())
    }

    fn open_path(&self, path: &Path) -> Result<(), String> {
        self.app_handle
            .opener()
            .open_path(path.to_string_lossy(), None::<&str>)
            .map_err(|error| error.to_string())
    }

    fn open_url(&self, url: &Url) -> Result<(), String> {
        self.app_handle
            .opener()
            .open_url(url.as_str(), None::<&str>)
            .map_err(|error| error.to_string())
    }
}
