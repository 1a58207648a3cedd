//! Desktop log setup.
//!
//! Events go through `tracing` to two sinks: a compact stderr layer and a
//! plain-text `desktop.log` under the shell's root directory. The filter
//! honours `RUST_LOG` and otherwise defaults by build type.

use std::{
    fs::{self, OpenOptions},
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::{
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DesktopLogCategory {
    Startup,
    Runtime,
    Window,
    Bridge,
}

impl DesktopLogCategory {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Runtime => "runtime",
            Self::Window => "window",
            Self::Bridge => "bridge",
        }
    }
}

struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn default_directive() -> &'static str {
    if cfg!(debug_assertions) {
        "chatshell_desktop=debug,info"
    } else {
        "chatshell_desktop=info,warn"
    }
}

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => std::env::temp_dir()
            .join("chatshell")
            .join("logs")
            .join(file_name),
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

/// Moves `path` to `path.1` (shifting older backups up) when it has grown
/// past `max_bytes`. Returns whether a rotation happened.
pub(crate) fn rotate_if_oversized(
    path: &Path,
    max_bytes: u64,
    backup_count: usize,
) -> io::Result<bool> {
    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(error) => return Err(error),
    };
    if size <= max_bytes {
        return Ok(false);
    }

    if backup_count == 0 {
        fs::remove_file(path)?;
        return Ok(true);
    }

    for index in (1..backup_count).rev() {
        let from = backup_path(path, index);
        if from.exists() {
            fs::rename(&from, backup_path(path, index + 1))?;
        }
    }
    fs::rename(path, backup_path(path, 1))?;
    Ok(true)
}

fn open_log_file(path: &Path, max_bytes: u64, backup_count: usize) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    rotate_if_oversized(path, max_bytes, backup_count)?;
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber. The stderr layer is always installed;
/// the returned error only reports that the log file could not be opened.
pub(crate) fn init(log_path: &Path, max_bytes: u64, backup_count: usize) -> io::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()));

    let (file_layer, file_error) = match open_log_file(log_path, max_bytes, backup_count) {
        Ok(file) => (
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_timer(LocalTimestamp)
                    .with_writer(Mutex::new(file)),
            ),
            None,
        ),
        Err(error) => (None, Some(error)),
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_timer(LocalTimestamp)
                .with_target(false)
                .compact(),
        )
        .with(file_layer)
        .try_init();

    match file_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

pub(crate) fn append_desktop_log(category: DesktopLogCategory, message: &str) {
    tracing::info!(category = category.as_str(), "{message}");
}

#[cfg(test)]
pub(crate) fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_uses_logs_dir_under_root() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/tmp/shell-root")), "desktop.log");
        assert_eq!(path, PathBuf::from("/tmp/shell-root/logs/desktop.log"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_temp_dir() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("logs/desktop.log"));
    }

    #[test]
    fn rotate_if_oversized_ignores_missing_and_small_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("desktop.log");
        assert!(!rotate_if_oversized(&path, 10, 3).expect("missing file"));

        fs::write(&path, "short").expect("write log");
        assert!(!rotate_if_oversized(&path, 10, 3).expect("small file"));
        assert!(path.exists());
    }

    #[test]
    fn rotate_if_oversized_shifts_backups() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("desktop.log");
        fs::write(backup_path(&path, 1), "older").expect("write backup");
        fs::write(&path, "this line is longer than ten bytes").expect("write log");

        assert!(rotate_if_oversized(&path, 10, 3).expect("rotate"));
        assert!(!path.exists());
        assert_eq!(
            fs::read_to_string(backup_path(&path, 1)).expect("read .1"),
            "this line is longer than ten bytes"
        );
        assert_eq!(
            fs::read_to_string(backup_path(&path, 2)).expect("read .2"),
            "older"
        );
    }

    #[test]
    fn category_labels_are_stable() {
        assert_eq!(DesktopLogCategory::Startup.as_str(), "startup");
        assert_eq!(DesktopLogCategory::Bridge.as_str(), "bridge");
    }

    #[test]
    fn append_desktop_log_does_not_panic() {
        init_test();
        append_desktop_log(DesktopLogCategory::Runtime, "runtime message");
    }
}
