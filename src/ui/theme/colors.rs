//! Color palette and theme application for the shell

use eframe::egui::{self, Color32, Context, FontDefinitions};

/// Backdrop behind the drawer and the receded screen card
pub const BG_DARK: Color32 = Color32::from_rgb(0x1B, 0x24, 0x32);
/// Lifted surface (toast background)
pub const BG_MID: Color32 = Color32::from_rgb(0x25, 0x30, 0x41);
pub const BG_LIGHT: Color32 = Color32::from_rgb(0x32, 0x40, 0x55);

pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xB8, 0xC0, 0xCC);

/// Initials disc when no avatar image is configured
pub const ACCENT: Color32 = Color32::from_rgb(0xEA, 0xD6, 0x37);

// Screen card backgrounds
pub const DASHBOARD_BG: Color32 = Color32::WHITE;
pub const MESSAGES_BG: Color32 = Color32::from_rgb(0x5B, 0x2A, 0x86);
pub const CONTACT_BG: Color32 = Color32::from_rgb(0xEA, 0xD6, 0x37);

/// Foreground for content drawn on the screen cards
pub const SCREEN_FG: Color32 = Color32::BLACK;

/// Register the icon font and apply dark visuals
pub fn apply_theme(ctx: &Context) {
    let mut fonts = FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_MID;
    visuals.widgets.noninteractive.bg_fill = BG_MID;
    visuals.widgets.hovered.bg_fill = BG_LIGHT;
    visuals.selection.bg_fill = BG_LIGHT;
    ctx.set_visuals(visuals);
}
