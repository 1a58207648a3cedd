use tauri::{
    webview::{PageLoadEvent, PageLoadPayload},
    AppHandle, Manager, Webview, WebviewUrl, WebviewWindow, WebviewWindowBuilder,
};
use url::Url;

use crate::{
    append_window_log,
    content_protocol::{self, protocol_base_url},
    desktop_bridge,
    navigation_policy::{self, NavigationDecision},
    shell_opener::{ShellOpener, TauriShellOpener},
    window_actions,
    window_controller::{self, LoadReport, WindowId},
    ContentTarget, ShellError, WindowController, ZoomState, CONTENT_PROBE_TIMEOUT,
    MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_MIN_HEIGHT, MAIN_WINDOW_MIN_WIDTH,
    MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
};

fn handle_navigation(app_handle: &AppHandle, url: &Url) -> bool {
    match navigation_policy::decide_navigation(url) {
        NavigationDecision::Allow => true,
        NavigationDecision::OpenExternally(url) => {
            append_window_log(&format!("opening external navigation in OS handler: {url}"));
            if let Err(error) = TauriShellOpener::new(app_handle).open_url(&url) {
                append_window_log(&format!("failed to open external url {url}: {error}"));
            }
            false
        }
        NavigationDecision::Block => {
            append_window_log(&format!("blocked navigation to {url}"));
            false
        }
    }
}

fn build_main_window(app_handle: &AppHandle) -> Result<WebviewWindow, ShellError> {
    let navigation_handle = app_handle.clone();
    let builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::External(Url::parse("about:blank")?),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
    .min_inner_size(MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_MIN_HEIGHT)
    .center()
    .visible(false)
    .always_on_top(false)
    .skip_taskbar(false)
    .initialization_script(desktop_bridge::build_bridge_script())
    .on_navigation(move |url| handle_navigation(&navigation_handle, url));

    #[cfg(target_os = "macos")]
    let builder = builder
        .title_bar_style(tauri::TitleBarStyle::Overlay)
        .hidden_title(true);
    #[cfg(not(target_os = "macos"))]
    let builder = builder.decorations(false);

    Ok(builder.build()?)
}

/// One attempt at loading the content: probe the target, then point the
/// window at the content scheme.
async fn load_content_once(
    app_handle: &AppHandle,
    content: &ContentTarget,
) -> Result<(), ShellError> {
    let probe_target = content.clone();
    tauri::async_runtime::spawn_blocking(move || probe_target.probe(CONTENT_PROBE_TIMEOUT))
        .await??;

    let window = app_handle
        .get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or(ShellError::WindowMissing(MAIN_WINDOW_LABEL))?;
    window.navigate(protocol_base_url()?)?;
    Ok(())
}

fn spawn_content_load(app_handle: AppHandle, id: WindowId) {
    tauri::async_runtime::spawn(async move {
        let Some(controller) = app_handle.try_state::<WindowController>() else {
            append_window_log("content load skipped: window controller is not managed");
            return;
        };
        let content = controller.content().clone();

        let report = window_controller::run_load_with_retry(
            &controller,
            id,
            || load_content_once(&app_handle, &content),
            append_window_log,
        )
        .await;

        // Nothing will paint; show the empty window rather than leave the
        // process running with no visible surface.
        if report == LoadReport::Failed && controller.take_first_reveal(id) {
            window_actions::reveal_main_window(&app_handle, false, append_window_log);
        }
    });
}

/// Creates the main window unless one is already open. Returns whether a
/// window was created.
pub(crate) fn create_main_window(app_handle: &AppHandle) -> Result<bool, ShellError> {
    let Some(controller) = app_handle.try_state::<WindowController>() else {
        append_window_log("create_main_window skipped: window controller is not managed");
        return Ok(false);
    };
    let Some(id) = controller.claim_window_slot() else {
        append_window_log("main window already exists, skipping creation");
        return Ok(false);
    };

    if let Err(error) = build_main_window(app_handle) {
        controller.release_window_slot(id);
        return Err(error);
    }

    if let Some(zoom) = app_handle.try_state::<ZoomState>() {
        zoom.reset();
    }
    append_window_log(&format!(
        "main window created, loading {}",
        controller.content().location()
    ));
    spawn_content_load(app_handle.clone(), id);
    Ok(true)
}

/// Second launch or dock click with the app already running.
pub(crate) fn show_or_create_main_window(app_handle: &AppHandle) {
    if app_handle.get_webview_window(MAIN_WINDOW_LABEL).is_some() {
        window_actions::show_main_window(app_handle, append_window_log);
        return;
    }
    if let Err(error) = create_main_window(app_handle) {
        append_window_log(&format!("failed to create main window: {error}"));
    }
}

pub(crate) fn handle_page_load(webview: &Webview, payload: &PageLoadPayload<'_>) {
    match payload.event() {
        PageLoadEvent::Started => {
            append_window_log(&format!("page-load started: {}", payload.url()));
        }
        PageLoadEvent::Finished => {
            append_window_log(&format!("page-load finished: {}", payload.url()));
            if webview.label() != MAIN_WINDOW_LABEL
                || !content_protocol::is_content_url(payload.url())
            {
                return;
            }

            let app_handle = webview.app_handle();
            let Some(controller) = app_handle.try_state::<WindowController>() else {
                return;
            };
            let Some(id) = controller.current_window() else {
                return;
            };
            if controller.take_first_reveal(id) {
                window_actions::reveal_main_window(
                    app_handle,
                    controller.is_development(),
                    append_window_log,
                );
            }
        }
    }
}
