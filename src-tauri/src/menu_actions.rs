pub const MENU_NEW_CHAT: &str = "menu_new_chat";
pub const MENU_CLOSE_WINDOW: &str = "menu_close_window";
pub const MENU_MINIMIZE: &str = "menu_minimize";
pub const MENU_ZOOM_WINDOW: &str = "menu_zoom_window";
pub const MENU_BRING_ALL_TO_FRONT: &str = "menu_bring_all_to_front";
pub const MENU_RELOAD: &str = "menu_reload";
pub const MENU_FORCE_RELOAD: &str = "menu_force_reload";
pub const MENU_TOGGLE_DEVTOOLS: &str = "menu_toggle_devtools";
pub const MENU_RESET_ZOOM: &str = "menu_reset_zoom";
pub const MENU_ZOOM_IN: &str = "menu_zoom_in";
pub const MENU_ZOOM_OUT: &str = "menu_zoom_out";
pub const MENU_TOGGLE_FULLSCREEN: &str = "menu_toggle_fullscreen";
pub const MENU_QUIT: &str = "menu_quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewChat,
    CloseWindow,
    Minimize,
    ZoomWindow,
    BringAllToFront,
    Reload,
    ForceReload,
    ToggleDevTools,
    ResetZoom,
    ZoomIn,
    ZoomOut,
    ToggleFullscreen,
    Quit,
}

impl MenuAction {
    pub fn menu_id(self) -> &'static str {
        match self {
            Self::NewChat => MENU_NEW_CHAT,
            Self::CloseWindow => MENU_CLOSE_WINDOW,
            Self::Minimize => MENU_MINIMIZE,
            Self::ZoomWindow => MENU_ZOOM_WINDOW,
            Self::BringAllToFront => MENU_BRING_ALL_TO_FRONT,
            Self::Reload => MENU_RELOAD,
            Self::ForceReload => MENU_FORCE_RELOAD,
            Self::ToggleDevTools => MENU_TOGGLE_DEVTOOLS,
            Self::ResetZoom => MENU_RESET_ZOOM,
            Self::ZoomIn => MENU_ZOOM_IN,
            Self::ZoomOut => MENU_ZOOM_OUT,
            Self::ToggleFullscreen => MENU_TOGGLE_FULLSCREEN,
            Self::Quit => MENU_QUIT,
        }
    }
}

pub fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_NEW_CHAT => Some(MenuAction::NewChat),
        MENU_CLOSE_WINDOW => Some(MenuAction::CloseWindow),
        MENU_MINIMIZE => Some(MenuAction::Minimize),
        MENU_ZOOM_WINDOW => Some(MenuAction::ZoomWindow),
        MENU_BRING_ALL_TO_FRONT => Some(MenuAction::BringAllToFront),
        MENU_RELOAD => Some(MenuAction::Reload),
        MENU_FORCE_RELOAD => Some(MenuAction::ForceReload),
        MENU_TOGGLE_DEVTOOLS => Some(MenuAction::ToggleDevTools),
        MENU_RESET_ZOOM => Some(MenuAction::ResetZoom),
        MENU_ZOOM_IN => Some(MenuAction::ZoomIn),
        MENU_ZOOM_OUT => Some(MenuAction::ZoomOut),
        MENU_TOGGLE_FULLSCREEN => Some(MenuAction::ToggleFullscreen),
        MENU_QUIT => Some(MenuAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACTIONS: [MenuAction; 13] = [
        MenuAction::NewChat,
        MenuAction::CloseWindow,
        MenuAction::Minimize,
        MenuAction::ZoomWindow,
        MenuAction::BringAllToFront,
        MenuAction::Reload,
        MenuAction::ForceReload,
        MenuAction::ToggleDevTools,
        MenuAction::ResetZoom,
        MenuAction::ZoomIn,
        MenuAction::ZoomOut,
        MenuAction::ToggleFullscreen,
        MenuAction::Quit,
    ];

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        for action in ALL_ACTIONS {
            assert_eq!(action_from_menu_id(action.menu_id()), Some(action));
        }
    }

    #[test]
    fn menu_ids_are_unique() {
        let mut ids: Vec<&str> = ALL_ACTIONS.iter().map(|action| action.menu_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ALL_ACTIONS.len());
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
        assert_eq!(action_from_menu_id("menu_open_settings"), None);
    }
}
