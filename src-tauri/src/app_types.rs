use std::sync::Mutex;

use crate::app_menu::MenuModel;

const ZOOM_DEFAULT: f64 = 1.0;
const ZOOM_STEP: f64 = 0.1;
const ZOOM_MIN: f64 = 0.3;
const ZOOM_MAX: f64 = 3.0;

#[derive(Debug, serde::Serialize)]
pub(crate) struct BridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SystemStats {
    pub(crate) total_mem: u64,
    pub(crate) free_mem: u64,
    pub(crate) load1: f64,
    pub(crate) load5: f64,
    pub(crate) load15: f64,
    pub(crate) cores: usize,
    pub(crate) platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppPaths {
    pub(crate) app: String,
    pub(crate) user_data: String,
    pub(crate) public: String,
    pub(crate) current: String,
}

/// The menu installed for this process. Managed once; its presence is what
/// keeps a recreated window from installing a second menu.
#[derive(Debug)]
pub(crate) struct InstalledMenu(pub(crate) MenuModel);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZoomChange {
    In,
    Out,
    Reset,
}

pub(crate) fn next_zoom_factor(current: f64, change: ZoomChange) -> f64 {
    let next = match change {
        ZoomChange::In => current + ZOOM_STEP,
        ZoomChange::Out => current - ZOOM_STEP,
        ZoomChange::Reset => ZOOM_DEFAULT,
    };
    // Round to one decimal so repeated steps don't drift.
    ((next * 10.0).round() / 10.0).clamp(ZOOM_MIN, ZOOM_MAX)
}

#[derive(Debug)]
pub(crate) struct ZoomState {
    factor: Mutex<f64>,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            factor: Mutex::new(ZOOM_DEFAULT),
        }
    }
}

impl ZoomState {
    pub(crate) fn apply(&self, change: ZoomChange) -> f64 {
        match self.factor.lock() {
            Ok(mut guard) => {
                *guard = next_zoom_factor(*guard, change);
                *guard
            }
            Err(_) => ZOOM_DEFAULT,
        }
    }

    /// Back to 1.0 for a freshly created window.
    pub(crate) fn reset(&self) {
        if let Ok(mut guard) = self.factor.lock() {
            *guard = ZOOM_DEFAULT;
        }
    }
}
