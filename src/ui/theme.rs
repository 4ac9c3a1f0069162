pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, ACCENT, BG_DARK, BG_LIGHT, BG_MID, CONTACT_BG, DASHBOARD_BG, MESSAGES_BG,
    SCREEN_FG, TEXT_MUTED, TEXT_PRIMARY,
};
