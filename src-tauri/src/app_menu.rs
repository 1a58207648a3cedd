//! Application menu template.
//!
//! The template is plain data so the platform differences can be checked
//! without a running app. `menu_setup` turns it into native menus.

use crate::menu_actions::MenuAction;

/// Roles the OS implements itself (clipboard, app visibility).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NativeRole {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    About,
    Services,
    Hide,
    HideOthers,
    ShowAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuEntry {
    Native {
        label: String,
        accelerator: Option<&'static str>,
        role: NativeRole,
    },
    Action {
        label: String,
        accelerator: Option<&'static str>,
        action: MenuAction,
    },
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SubmenuModel {
    pub(crate) label: String,
    pub(crate) entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuModel {
    pub(crate) submenus: Vec<SubmenuModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuPlatform {
    /// Unified menu bar with an app-identity menu.
    MacOs,
    Standard,
}

impl MenuPlatform {
    pub(crate) fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Standard
        }
    }
}

fn native(label: &str, accelerator: Option<&'static str>, role: NativeRole) -> MenuEntry {
    MenuEntry::Native {
        label: label.to_string(),
        accelerator,
        role,
    }
}

fn action(label: &str, accelerator: Option<&'static str>, action: MenuAction) -> MenuEntry {
    MenuEntry::Action {
        label: label.to_string(),
        accelerator,
        action,
    }
}

fn submenu(label: &str, entries: Vec<MenuEntry>) -> SubmenuModel {
    SubmenuModel {
        label: label.to_string(),
        entries,
    }
}

fn app_identity_menu(app_name: &str) -> SubmenuModel {
    submenu(
        app_name,
        vec![
            native(&format!("About {app_name}"), None, NativeRole::About),
            MenuEntry::Separator,
            native("Services", None, NativeRole::Services),
            MenuEntry::Separator,
            native(&format!("Hide {app_name}"), Some("Command+H"), NativeRole::Hide),
            native("Hide Others", Some("Command+Shift+H"), NativeRole::HideOthers),
            native("Show All", None, NativeRole::ShowAll),
            MenuEntry::Separator,
            action("Quit", Some("Command+Q"), MenuAction::Quit),
        ],
    )
}

fn file_menu() -> SubmenuModel {
    submenu(
        "File",
        vec![
            action("New Chat", Some("CmdOrCtrl+N"), MenuAction::NewChat),
            MenuEntry::Separator,
            action("Close Window", Some("CmdOrCtrl+W"), MenuAction::CloseWindow),
        ],
    )
}

fn edit_menu() -> SubmenuModel {
    submenu(
        "Edit",
        vec![
            native("Undo", Some("CmdOrCtrl+Z"), NativeRole::Undo),
            native("Redo", Some("Shift+CmdOrCtrl+Z"), NativeRole::Redo),
            MenuEntry::Separator,
            native("Cut", Some("CmdOrCtrl+X"), NativeRole::Cut),
            native("Copy", Some("CmdOrCtrl+C"), NativeRole::Copy),
            native("Paste", Some("CmdOrCtrl+V"), NativeRole::Paste),
            native("Select All", Some("CmdOrCtrl+A"), NativeRole::SelectAll),
        ],
    )
}

fn view_menu() -> SubmenuModel {
    submenu(
        "View",
        vec![
            action("Reload", Some("CmdOrCtrl+R"), MenuAction::Reload),
            action("Force Reload", Some("CmdOrCtrl+Shift+R"), MenuAction::ForceReload),
            action("Toggle Developer Tools", Some("F12"), MenuAction::ToggleDevTools),
            MenuEntry::Separator,
            action("Actual Size", Some("CmdOrCtrl+0"), MenuAction::ResetZoom),
            action("Zoom In", Some("CmdOrCtrl+Plus"), MenuAction::ZoomIn),
            action("Zoom Out", Some("CmdOrCtrl+-"), MenuAction::ZoomOut),
            MenuEntry::Separator,
            action("Toggle Fullscreen", Some("F11"), MenuAction::ToggleFullscreen),
        ],
    )
}

fn window_menu(platform: MenuPlatform) -> SubmenuModel {
    let entries = match platform {
        MenuPlatform::MacOs => vec![
            action("Close", Some("CmdOrCtrl+W"), MenuAction::CloseWindow),
            action("Minimize", Some("CmdOrCtrl+M"), MenuAction::Minimize),
            action("Zoom", None, MenuAction::ZoomWindow),
            MenuEntry::Separator,
            action("Bring All to Front", None, MenuAction::BringAllToFront),
        ],
        MenuPlatform::Standard => vec![
            action("Minimize", Some("CmdOrCtrl+M"), MenuAction::Minimize),
            action("Close", Some("CmdOrCtrl+W"), MenuAction::CloseWindow),
        ],
    };
    submenu("Window", entries)
}

pub(crate) fn build_menu_model(platform: MenuPlatform, app_name: &str) -> MenuModel {
    let mut submenus = Vec::with_capacity(5);
    if platform == MenuPlatform::MacOs {
        submenus.push(app_identity_menu(app_name));
    }
    submenus.extend([file_menu(), edit_menu(), view_menu(), window_menu(platform)]);
    MenuModel { submenus }
}

impl MenuModel {
    pub(crate) fn labels(&self) -> Vec<&str> {
        self.submenus
            .iter()
            .map(|submenu| submenu.label.as_str())
            .collect()
    }
}

#[cfg(test)]
impl MenuModel {
    pub(crate) fn submenu(&self, label: &str) -> Option<&SubmenuModel> {
        self.submenus.iter().find(|submenu| submenu.label == label)
    }

    pub(crate) fn actions(&self) -> impl Iterator<Item = MenuAction> + '_ {
        self.submenus
            .iter()
            .flat_map(|submenu| submenu.entries.iter())
            .filter_map(|entry| match entry {
                MenuEntry::Action { action, .. } => Some(*action),
                _ => None,
            })
    }
}
