//! Circular avatar for the drawer identity card
//!
//! Renders a configured image clipped to a circle, or falls back to an
//! initials disc when no image path is set.

use crate::ui::theme::colors;

use eframe::egui::{self, Align2, Color32, FontId, Response, Sense, Stroke, Ui, Vec2};

/// Render a circular avatar of the given diameter
pub fn circular_avatar(
    ui: &mut Ui,
    size: f32,
    image_path: Option<&str>,
    display_name: &str,
) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    match image_path {
        Some(path) => {
            egui::Image::new(format!("file://{}", path))
                .corner_radius(size / 2.0)
                .paint_at(ui, rect);
        }
        None => {
            ui.painter()
                .circle_filled(rect.center(), size / 2.0, colors::ACCENT);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                initials(display_name),
                FontId::proportional(size * 0.4),
                colors::BG_DARK,
            );
        }
    }

    // Hairline border around the avatar
    ui.painter()
        .circle_stroke(rect.center(), size / 2.0, Stroke::new(1.0, Color32::WHITE));

    response
}

/// Up to two initials from the display name, uppercased
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Lucas Krul"), "LK");
        assert_eq!(initials("madonna"), "M");
        assert_eq!(initials("Ana Maria de Souza"), "AM"); // Only first two words
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }
}
