//! Ownership and lifecycle of the single top-level window.
//!
//! `WindowController` is the only place that knows whether a window exists.
//! The Tauri glue in `main_window` asks it for permission before creating a
//! window and reports back when the window goes away; everything else checks
//! `is_current` before touching a window it captured earlier.

use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
    time::Duration,
};

use crate::{ContentTarget, ShellError, CONTENT_LOAD_RETRY_DELAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct WindowId(u64);

#[derive(Debug)]
struct TrackedWindow {
    id: WindowId,
    revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivateDecision {
    CreateWindow,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadAttempt {
    Initial,
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadFailureDecision {
    RetryAfter(Duration),
    GiveUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadReport {
    Loaded,
    LoadedOnRetry,
    Failed,
    /// The window was gone by the time the retry fired.
    RetrySkipped,
}

#[derive(Debug)]
pub(crate) struct WindowController {
    content: ContentTarget,
    current: Mutex<Option<TrackedWindow>>,
    next_id: AtomicU64,
}

impl WindowController {
    pub(crate) fn new(content: ContentTarget) -> Self {
        Self {
            content,
            current: Mutex::new(None),
            next_id: AtomicU64::new(1),
        }
    }

    pub(crate) fn content(&self) -> &ContentTarget {
        &self.content
    }

    pub(crate) fn is_development(&self) -> bool {
        self.content.is_development()
    }

    /// Reserves the window slot. `None` while a window already exists.
    pub(crate) fn claim_window_slot(&self) -> Option<WindowId> {
        let mut guard = self.current.lock().ok()?;
        if guard.is_some() {
            return None;
        }
        let id = WindowId(self.next_id.fetch_add(1, Ordering::Relaxed));
        *guard = Some(TrackedWindow {
            id,
            revealed: false,
        });
        Some(id)
    }

    /// Gives the slot back after a failed creation.
    pub(crate) fn release_window_slot(&self, id: WindowId) {
        if let Ok(mut guard) = self.current.lock() {
            if guard.as_ref().is_some_and(|window| window.id == id) {
                *guard = None;
            }
        }
    }

    pub(crate) fn current_window(&self) -> Option<WindowId> {
        self.current
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|window| window.id))
    }

    pub(crate) fn is_current(&self, id: WindowId) -> bool {
        self.current_window() == Some(id)
    }

    pub(crate) fn handle_window_destroyed(&self) -> Option<WindowId> {
        self.current
            .lock()
            .ok()
            .and_then(|mut guard| guard.take().map(|window| window.id))
    }

    pub(crate) fn decide_activate(&self, open_windows: usize) -> ActivateDecision {
        if open_windows == 0 && self.current_window().is_none() {
            ActivateDecision::CreateWindow
        } else {
            ActivateDecision::Ignore
        }
    }

    /// True exactly once per window: the first time its content paints.
    pub(crate) fn take_first_reveal(&self, id: WindowId) -> bool {
        let Ok(mut guard) = self.current.lock() else {
            return false;
        };
        match guard.as_mut() {
            Some(window) if window.id == id && !window.revealed => {
                window.revealed = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn decide_load_failure(&self, attempt: LoadAttempt) -> LoadFailureDecision {
        match attempt {
            LoadAttempt::Initial if self.is_development() => {
                LoadFailureDecision::RetryAfter(CONTENT_LOAD_RETRY_DELAY)
            }
            _ => LoadFailureDecision::GiveUp,
        }
    }
}

/// Runs `load` for window `id`, scheduling the one development retry when
/// the first attempt fails.
pub(crate) async fn run_load_with_retry<L, Fut, F>(
    controller: &WindowController,
    id: WindowId,
    load: L,
    log: F,
) -> LoadReport
where
    L: Fn() -> Fut,
    Fut: Future<Output = Result<(), ShellError>>,
    F: Fn(&str),
{
    let location = controller.content().location();
    let mut attempt = LoadAttempt::Initial;
    loop {
        match (load().await, attempt) {
            (Ok(()), LoadAttempt::Initial) => {
                log(&format!("successfully loaded content: {location}"));
                return LoadReport::Loaded;
            }
            (Ok(()), LoadAttempt::Retry) => {
                log(&format!("successfully loaded content on retry: {location}"));
                return LoadReport::LoadedOnRetry;
            }
            (Err(error), LoadAttempt::Initial) => {
                log(&format!("failed to load content {location}: {error}"));
            }
            (Err(error), LoadAttempt::Retry) => {
                log(&format!("content load retry failed {location}: {error}"));
            }
        }

        let delay = match controller.decide_load_failure(attempt) {
            LoadFailureDecision::RetryAfter(delay) => delay,
            LoadFailureDecision::GiveUp => return LoadReport::Failed,
        };
        tokio::time::sleep(delay).await;

        if !controller.is_current(id) {
            log("content load retry skipped: window is gone");
            return LoadReport::RetrySkipped;
        }

        log(&format!("retrying content load: {location}"));
        attempt = LoadAttempt::Retry;
    }
}
