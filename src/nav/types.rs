use crate::ui::theme::colors;

use eframe::egui::Color32;

/// A named destination screen within the shell
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Route {
    Home,     // Dashboard view
    Messages, // "Mensagens" view
    Contact,  // "Contatos" view
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Messages, Route::Contact];

    /// Stable route name, referenced by the CLI and config.
    /// The drawer menu maps to these symbolically, never by string.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Messages => "Messages",
            Route::Contact => "Contact",
        }
    }

    pub fn from_name(name: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.name() == name)
    }

    /// Background color of the route's screen card
    pub fn background(&self) -> Color32 {
        match self {
            Route::Home => colors::DASHBOARD_BG,
            Route::Messages => colors::MESSAGES_BG,
            Route::Contact => colors::CONTACT_BG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_name(route.name()), Some(route));
        }
        assert_eq!(Route::from_name("Nowhere"), None);
    }

    #[test]
    fn test_route_backgrounds() {
        // Colors carried over from the screens this shell wraps
        assert_eq!(
            Route::Messages.background(),
            Color32::from_rgb(0x5B, 0x2A, 0x86)
        );
        assert_eq!(
            Route::Contact.background(),
            Color32::from_rgb(0xEA, 0xD6, 0x37)
        );
        assert_eq!(Route::Home.background(), Color32::WHITE);
    }
}
