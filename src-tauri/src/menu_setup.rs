use tauri::{
    menu::{
        AboutMetadata, MenuBuilder, MenuItem, PredefinedMenuItem, Submenu, SubmenuBuilder,
    },
    AppHandle, Manager, Wry,
};

use crate::{
    app_menu::{self, MenuEntry, MenuModel, MenuPlatform, NativeRole, SubmenuModel},
    append_desktop_log, InstalledMenu, ShellError,
};

fn native_item(
    app_handle: &AppHandle,
    label: &str,
    role: NativeRole,
) -> tauri::Result<PredefinedMenuItem<Wry>> {
    let text = Some(label);
    match role {
        NativeRole::Undo => PredefinedMenuItem::undo(app_handle, text),
        NativeRole::Redo => PredefinedMenuItem::redo(app_handle, text),
        NativeRole::Cut => PredefinedMenuItem::cut(app_handle, text),
        NativeRole::Copy => PredefinedMenuItem::copy(app_handle, text),
        NativeRole::Paste => PredefinedMenuItem::paste(app_handle, text),
        NativeRole::SelectAll => PredefinedMenuItem::select_all(app_handle, text),
        NativeRole::About => {
            let package_info = app_handle.package_info();
            PredefinedMenuItem::about(
                app_handle,
                text,
                Some(AboutMetadata {
                    name: Some(package_info.name.clone()),
                    version: Some(package_info.version.to_string()),
                    ..Default::default()
                }),
            )
        }
        NativeRole::Services => PredefinedMenuItem::services(app_handle, text),
        NativeRole::Hide => PredefinedMenuItem::hide(app_handle, text),
        NativeRole::HideOthers => PredefinedMenuItem::hide_others(app_handle, text),
        NativeRole::ShowAll => PredefinedMenuItem::show_all(app_handle, text),
    }
}

fn build_submenu(app_handle: &AppHandle, model: &SubmenuModel) -> tauri::Result<Submenu<Wry>> {
    let mut builder = SubmenuBuilder::new(app_handle, &model.label);
    for entry in &model.entries {
        builder = match entry {
            MenuEntry::Separator => builder.separator(),
            MenuEntry::Native { label, role, .. } => {
                let item = native_item(app_handle, label, *role)?;
                builder.item(&item)
            }
            MenuEntry::Action {
                label,
                accelerator,
                action,
            } => {
                let item =
                    MenuItem::with_id(app_handle, action.menu_id(), label, true, *accelerator)?;
                builder.item(&item)
            }
        };
    }
    builder.build()
}

fn set_app_menu(app_handle: &AppHandle, model: &MenuModel) -> tauri::Result<()> {
    let mut builder = MenuBuilder::new(app_handle);
    for submenu in &model.submenus {
        let built = build_submenu(app_handle, submenu)?;
        builder = builder.item(&built);
    }
    let menu = builder.build()?;
    app_handle.set_menu(menu)?;
    Ok(())
}

/// Installs the process-wide menu. Returns `false` when a menu is already
/// installed, which is the case for every window after the first.
pub(crate) fn install_app_menu(app_handle: &AppHandle) -> Result<bool, ShellError> {
    if let Some(installed) = app_handle.try_state::<InstalledMenu>() {
        append_desktop_log(&format!(
            "app menu already installed ({}), skipping",
            installed.0.labels().join(", ")
        ));
        return Ok(false);
    }

    let app_name = app_handle.package_info().name.clone();
    let model = app_menu::build_menu_model(MenuPlatform::current(), &app_name);
    set_app_menu(app_handle, &model)?;

    if !app_handle.manage(InstalledMenu(model)) {
        append_desktop_log("installed menu state already exists, skipping manage");
    }
    append_desktop_log("app menu installed");
    Ok(true)
}
