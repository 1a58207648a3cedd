use tauri::Manager;

use crate::{
    app_events, append_desktop_log, append_startup_log, content_protocol,
    content_target::resolve_content_target, logging, main_window, menu_handler, menu_setup,
    runtime_paths, ContentPipeline, WindowController, ZoomState, CONTENT_SCHEME,
    DESKTOP_LOG_FILE, DESKTOP_LOG_MAX_BYTES, LOG_BACKUP_COUNT,
};

pub(crate) fn run() {
    let log_path =
        logging::resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE);
    let log_file_error = logging::init(&log_path, DESKTOP_LOG_MAX_BYTES, LOG_BACKUP_COUNT).err();

    append_startup_log("desktop process starting");
    match log_file_error {
        Some(error) => append_startup_log(&format!(
            "desktop log file {} unavailable, logging to stderr only: {error}",
            log_path.display()
        )),
        None => append_startup_log(&format!("desktop log path: {}", log_path.display())),
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            append_desktop_log("second instance launched, focusing main window");
            main_window::show_or_create_main_window(app_handle);
        }))
        .plugin(tauri_plugin_opener::init())
        .manage(ZoomState::default())
        .register_asynchronous_uri_scheme_protocol(CONTENT_SCHEME, |ctx, request, responder| {
            let app_handle = ctx.app_handle().clone();
            tauri::async_runtime::spawn(async move {
                let response = match app_handle.try_state::<ContentPipeline>() {
                    Some(pipeline) => pipeline.respond(request).await,
                    None => content_protocol::unavailable_response(),
                };
                responder.respond(response);
            });
        })
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::app_version,
            crate::desktop_bridge_commands::platform,
            crate::desktop_bridge_commands::get_app_path,
            crate::desktop_bridge_commands::reveal_in_folder,
            crate::desktop_bridge_commands::open_path,
            crate::desktop_bridge_commands::system_stats,
            crate::desktop_bridge_commands::open_external_url,
        ])
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_menu_event(app_handle, event.id().as_ref());
        })
        .on_window_event(app_events::handle_window_event)
        .on_page_load(main_window::handle_page_load)
        .setup(|app| {
            let app_handle = app.handle().clone();
            let build_index = runtime_paths::packaged_build_index(&app_handle);
            let content = resolve_content_target(build_index.as_deref());

            if !app_handle.manage(ContentPipeline::new(content.clone())) {
                append_startup_log("content pipeline already exists, skipping");
            }
            if !app_handle.manage(WindowController::new(content)) {
                append_startup_log("window controller already exists, skipping");
            }

            if let Err(error) = main_window::create_main_window(&app_handle) {
                append_startup_log(&format!("failed to create main window: {error}"));
            }
            if let Err(error) = menu_setup::install_app_menu(&app_handle) {
                append_startup_log(&format!("failed to install app menu: {error}"));
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(app_events::handle_run_event);
}
