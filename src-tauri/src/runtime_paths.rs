use std::{
    env,
    path::{Path, PathBuf},
};

use tauri::{AppHandle, Manager};

use crate::{BUILD_DIR_ENV, PACKAGED_BUILD_DIR, PACKAGED_INDEX_FILE, ROOT_DIR_ENV};

fn non_empty_env_path(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

/// Root for shell-owned files (logs). `CHATSHELL_ROOT` wins over `~/.chatshell`.
pub(crate) fn default_root_dir() -> Option<PathBuf> {
    non_empty_env_path(ROOT_DIR_ENV).or_else(|| home::home_dir().map(|home| home.join(".chatshell")))
}

pub(crate) fn current_exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

pub(crate) fn build_index_candidates(
    build_dir_override: Option<PathBuf>,
    resource_dir: Option<PathBuf>,
    exe_dir: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = build_dir_override {
        candidates.push(dir.join(PACKAGED_INDEX_FILE));
    }
    if let Some(dir) = resource_dir {
        candidates.push(dir.join(PACKAGED_BUILD_DIR).join(PACKAGED_INDEX_FILE));
    }
    if let Some(dir) = exe_dir {
        candidates.push(
            dir.join("..")
                .join(PACKAGED_BUILD_DIR)
                .join(PACKAGED_INDEX_FILE),
        );
    }
    candidates
}

/// First candidate that exists, else the first candidate (which is then
/// known to be absent). `None` only when no location could be derived.
pub(crate) fn select_build_index(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .or_else(|| candidates.first())
        .map(|candidate| candidate.canonicalize().unwrap_or_else(|_| candidate.clone()))
}

pub(crate) fn packaged_build_index(app_handle: &AppHandle) -> Option<PathBuf> {
    let candidates = build_index_candidates(
        non_empty_env_path(BUILD_DIR_ENV),
        app_handle.path().resource_dir().ok(),
        current_exe_dir(),
    );
    select_build_index(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn build_index_candidates_keep_priority_order() {
        let candidates = build_index_candidates(
            Some(PathBuf::from("/override")),
            Some(PathBuf::from("/resources")),
            Some(PathBuf::from("/app/bin")),
        );
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/override/index.html"),
                PathBuf::from("/resources/build/index.html"),
                PathBuf::from("/app/bin/../build/index.html"),
            ]
        );
    }

    #[test]
    fn select_build_index_prefers_existing_candidate() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("missing").join("index.html");
        let present = dir.path().join("build").join("index.html");
        fs::create_dir_all(present.parent().expect("parent")).expect("create build dir");
        fs::write(&present, "<html></html>").expect("write index");

        let selected = select_build_index(&[missing, present.clone()]).expect("selection");
        assert_eq!(selected, present.canonicalize().expect("canonical"));
    }

    #[test]
    fn select_build_index_reports_first_candidate_when_none_exist() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let first = dir.path().join("a").join("index.html");
        let second = dir.path().join("b").join("index.html");

        assert_eq!(select_build_index(&[first.clone(), second]), Some(first));
        assert_eq!(select_build_index(&[]), None);
    }
}
