// Drawer menu entries, defined once as data

use crate::nav::types::Route;

use egui_phosphor::regular as icons;

/// What selecting a drawer entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(Route),
    Logout,
}

pub struct MenuEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub action: MenuAction,
}

/// The main navigation section of the drawer, in display order
pub fn drawer_entries() -> [MenuEntry; 3] {
    [
        MenuEntry {
            label: "Dashboard",
            icon: icons::SQUARES_FOUR,
            action: MenuAction::Navigate(Route::Home),
        },
        MenuEntry {
            label: "Mensagens",
            icon: icons::CHAT_TEXT,
            action: MenuAction::Navigate(Route::Messages),
        },
        MenuEntry {
            label: "Contatos",
            icon: icons::ADDRESS_BOOK,
            action: MenuAction::Navigate(Route::Contact),
        },
    ]
}

/// The logout entry, pinned to the bottom section of the drawer
pub fn logout_entry() -> MenuEntry {
    MenuEntry {
        label: "Logout",
        icon: icons::SIGN_OUT,
        action: MenuAction::Logout,
    }
}
