use std::time::Duration;

pub(crate) const DEV_SERVER_URL: &str = "http://localhost:3000";
pub(crate) const PACKAGED_BUILD_DIR: &str = "build";
pub(crate) const PACKAGED_INDEX_FILE: &str = "index.html";
pub(crate) const BUILD_DIR_ENV: &str = "CHATSHELL_BUILD_DIR";
pub(crate) const ROOT_DIR_ENV: &str = "CHATSHELL_ROOT";

pub(crate) const CONTENT_LOAD_RETRY_DELAY: Duration = Duration::from_secs(2);
pub(crate) const CONTENT_PROBE_TIMEOUT: Duration = Duration::from_millis(800);

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "ChatShell";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1400.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 900.0;
pub(crate) const MAIN_WINDOW_MIN_WIDTH: f64 = 800.0;
pub(crate) const MAIN_WINDOW_MIN_HEIGHT: f64 = 600.0;

pub(crate) const CONTENT_SCHEME: &str = "chatshell";
pub(crate) const NEW_CHAT_EVENT: &str = "new-chat";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub(crate) const LOG_BACKUP_COUNT: usize = 5;
