//! Channel logic behind the desktop bridge commands.
//!
//! Everything here is independent of the webview so the failure rules of
//! each channel can be exercised directly.

use std::path::{Path, PathBuf};

use serde_json::Value;
use url::Url;

use crate::{shell_opener::ShellOpener, BridgeResult};

const OPEN_PATH_SKIPPED: &str = "No path";
const OPEN_PATH_UNKNOWN_ERROR: &str = "error";

/// Channel name invoked by the content side, and the command serving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BridgeChannel {
    pub(crate) name: &'static str,
    pub(crate) command: &'static str,
}

pub(crate) const BRIDGE_CHANNELS: [BridgeChannel; 7] = [
    BridgeChannel {
        name: "app-version",
        command: "app_version",
    },
    BridgeChannel {
        name: "platform",
        command: "platform",
    },
    BridgeChannel {
        name: "get-app-path",
        command: "get_app_path",
    },
    BridgeChannel {
        name: "reveal-in-folder",
        command: "reveal_in_folder",
    },
    BridgeChannel {
        name: "open-path",
        command: "open_path",
    },
    BridgeChannel {
        name: "system-stats",
        command: "system_stats",
    },
    BridgeChannel {
        name: "open-external-url",
        command: "open_external_url",
    },
];

/// Platform names as the UI knows them (`darwin`, `win32`, `linux`, ...).
pub(crate) fn platform_identifier(os: &str) -> String {
    match os {
        "macos" => "darwin".to_string(),
        "windows" => "win32".to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn current_platform() -> String {
    platform_identifier(std::env::consts::OS)
}

/// Only a non-empty string counts as a path; anything else is skipped.
pub(crate) fn requested_path(raw: Option<&Value>) -> Option<PathBuf> {
    match raw {
        Some(Value::String(path)) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

pub(crate) fn reveal_in_folder<O: ShellOpener>(raw: Option<&Value>, opener: &O) -> bool {
    let Some(path) = requested_path(raw) else {
        return false;
    };
    match opener.reveal_item(&path) {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "reveal-in-folder failed");
            false
        }
    }
}

/// Empty string on success; otherwise a message describing the failure.
fn open_existing_path<O: ShellOpener>(path: &Path, opener: &O) -> String {
    if !path.exists() {
        return format!("Path does not exist: {}", path.display());
    }
    match opener.open_path(path) {
        Ok(()) => String::new(),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "open-path failed");
            if error.is_empty() {
                OPEN_PATH_UNKNOWN_ERROR.to_string()
            } else {
                error
            }
        }
    }
}

/// The `open-path` channel: `"No path"` for anything but a non-empty string.
pub(crate) fn open_path<O: ShellOpener>(raw: Option<&Value>, opener: &O) -> String {
    match requested_path(raw) {
        Some(path) => open_existing_path(&path, opener),
        None => OPEN_PATH_SKIPPED.to_string(),
    }
}

pub(crate) fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" | "mailto" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https/mailto are allowed."
        )),
    }
}

pub(crate) fn open_external_url<O: ShellOpener>(raw: Option<&Value>, opener: &O) -> BridgeResult {
    let raw_url = match raw {
        Some(Value::String(raw_url)) => raw_url.as_str(),
        _ => "",
    };
    let result = parse_openable_url(raw_url).and_then(|url| opener.open_url(&url));
    match result {
        Ok(()) => BridgeResult {
            ok: true,
            reason: None,
        },
        Err(error) => BridgeResult {
            ok: false,
            reason: Some(error),
        },
    }
}

pub(crate) fn path_string(path: Option<PathBuf>, name: &str) -> String {
    match path {
        Some(path) => path.to_string_lossy().into_owned(),
        None => {
            tracing::warn!(directory = name, "app path could not be resolved");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        revealed: RefCell<Vec<PathBuf>>,
        opened: RefCell<Vec<PathBuf>>,
        urls: RefCell<Vec<String>>,
        failure: Option<String>,
    }

    impl RecordingOpener {
        fn failing(message: &str) -> Self {
            Self {
                failure: Some(message.to_string()),
                ..Self::default()
            }
        }

        fn outcome(&self) -> Result<(), String> {
            match &self.failure {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            }
        }
    }

    impl ShellOpener for RecordingOpener {
        fn reveal_item(&self, path: &Path) -> Result<(), String> {
            self.revealed.borrow_mut().push(path.to_path_buf());
            self.outcome()
        }

        fn open_path(&self, path: &Path) -> Result<(), String> {
            self.opened.borrow_mut().push(path.to_path_buf());
            self.outcome()
        }

        fn open_url(&self, url: &Url) -> Result<(), String> {
            self.urls.borrow_mut().push(url.to_string());
            self.outcome()
        }
    }

    #[test]
    fn channel_commands_are_snake_case_channel_names() {
        for channel in BRIDGE_CHANNELS {
            assert_eq!(channel.command, channel.name.replace('-', "_"));
        }
        let mut names: Vec<&str> = BRIDGE_CHANNELS.iter().map(|channel| channel.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BRIDGE_CHANNELS.len());
    }

    #[test]
    fn platform_identifier_uses_ui_names() {
        assert_eq!(platform_identifier("macos"), "darwin");
        assert_eq!(platform_identifier("windows"), "win32");
        assert_eq!(platform_identifier("linux"), "linux");
        assert_eq!(platform_identifier("freebsd"), "freebsd");
    }

    #[test]
    fn reveal_in_folder_skips_invalid_input_without_os_action() {
        let opener = RecordingOpener::default();
        let invalid = [None, Some(json!(null)), Some(json!(42)), Some(json!("")), Some(json!(["/tmp"]))];
        for raw in invalid.iter() {
            assert!(!reveal_in_folder(raw.as_ref(), &opener), "input {raw:?}");
        }
        assert!(opener.revealed.borrow().is_empty());
    }

    #[test]
    fn reveal_in_folder_reports_os_outcome() {
        let opener = RecordingOpener::default();
        assert!(reveal_in_folder(Some(&json!("/tmp/report.txt")), &opener));
        assert_eq!(
            opener.revealed.borrow().as_slice(),
            &[PathBuf::from("/tmp/report.txt")]
        );

        let failing = RecordingOpener::failing("file manager unavailable");
        assert!(!reveal_in_folder(Some(&json!("/tmp/report.txt")), &failing));
    }

    #[test]
    fn open_existing_path_reports_nonexistent_path() {
        let opener = RecordingOpener::default();
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("missing.txt");

        let message = open_existing_path(&missing, &opener);
        assert!(message.starts_with("Path does not exist: "));
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn open_existing_path_returns_empty_string_on_success() {
        let opener = RecordingOpener::default();
        let dir = tempfile::tempdir().expect("create temp dir");

        assert_eq!(open_existing_path(dir.path(), &opener), "");
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    #[test]
    fn open_existing_path_returns_os_message_on_failure() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let failing = RecordingOpener::failing("no application is associated");
        assert_eq!(
            open_existing_path(dir.path(), &failing),
            "no application is associated"
        );

        let silent = RecordingOpener::failing("");
        assert_eq!(open_existing_path(dir.path(), &silent), "error");
    }

    #[test]
    fn parse_openable_url_accepts_web_and_mail_links_only() {
        assert!(parse_openable_url(" https://example.com/docs ").is_ok());
        assert!(parse_openable_url("mailto:team@example.com").is_ok());
        assert_eq!(
            parse_openable_url("   "),
            Err("Missing external URL.".to_string())
        );
        assert!(parse_openable_url("file:///etc/passwd")
            .expect_err("file scheme rejected")
            .contains("Unsupported URL scheme 'file'"));
        assert!(parse_openable_url("not a url")
            .expect_err("invalid url")
            .starts_with("Invalid URL"));
    }

    #[test]
    fn open_external_url_reports_result() {
        let opener = RecordingOpener::default();
        let result = open_external_url(Some(&json!("https://example.com")), &opener);
        assert!(result.ok);
        assert_eq!(opener.urls.borrow().as_slice(), &["https://example.com/".to_string()]);

        let rejected = open_external_url(Some(&json!("javascript:alert(1)")), &opener);
        assert!(!rejected.ok);
        assert_eq!(opener.urls.borrow().len(), 1);
    }

    #[test]
    fn open_external_url_answers_invalid_input_with_reason() {
        let opener = RecordingOpener::default();
        for raw in [None, Some(json!(null)), Some(json!(7)), Some(json!({"href": "x"}))] {
            let result = open_external_url(raw.as_ref(), &opener);
            assert!(!result.ok, "input {raw:?}");
            assert_eq!(result.reason.as_deref(), Some("Missing external URL."));
        }
        assert!(opener.urls.borrow().is_empty());
    }

    #[test]
    fn open_path_skips_invalid_input_without_os_action() {
        let opener = RecordingOpener::default();
        let invalid = [None, Some(json!(null)), Some(json!(42)), Some(json!("")), Some(json!(["/tmp"]))];
        for raw in invalid.iter() {
            assert_eq!(open_path(raw.as_ref(), &opener), "No path", "input {raw:?}");
        }
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn open_path_opens_existing_path() {
        let opener = RecordingOpener::default();
        let dir = tempfile::tempdir().expect("create temp dir");
        let raw = json!(dir.path().to_string_lossy());

        assert_eq!(open_path(Some(&raw), &opener), "");
        assert_eq!(opener.opened.borrow().as_slice(), &[dir.path().to_path_buf()]);
    }

    #[test]
    fn path_string_falls_back_to_empty() {
        assert_eq!(path_string(Some(PathBuf::from("/opt/app")), "app"), "/opt/app");
        assert_eq!(path_string(None, "userData"), "");
    }
}
