// Drawer content panel: identity card, navigation entries, logout

use crate::app::app::Veranda;
use crate::nav::menu::{self, MenuAction, MenuEntry};
use crate::ui::components::avatar::circular_avatar;
use crate::ui::theme::colors;

use eframe::egui::{self, RichText, Ui};

impl Veranda {
    pub fn display_drawer_panel(&mut self, ui: &mut Ui) {
        // Identity card
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            circular_avatar(
                ui,
                60.0,
                self.options.profile.avatar_path.as_deref(),
                &self.options.profile.display_name,
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(&self.options.profile.display_name)
                    .strong()
                    .size(18.0)
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                RichText::new(&self.options.profile.email)
                    .size(12.0)
                    .color(colors::TEXT_MUTED),
            );
        });
        ui.add_space(24.0);

        let mut action = None;
        for entry in menu::drawer_entries() {
            if drawer_item(ui, &entry).clicked() {
                action = Some(entry.action);
            }
        }

        // Logout pinned to the bottom section
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.add_space(16.0);
            let entry = menu::logout_entry();
            if drawer_item(ui, &entry).clicked() {
                action = Some(entry.action);
            }
        });

        match action {
            Some(MenuAction::Navigate(route)) => self.navigate(route),
            Some(MenuAction::Logout) => self.request_logout(),
            None => {}
        }
    }
}

fn drawer_item(ui: &mut Ui, entry: &MenuEntry) -> egui::Response {
    let text = format!("{}  {}", entry.icon, entry.label);
    ui.add(
        egui::Button::new(RichText::new(text).color(colors::TEXT_PRIMARY))
            .frame(false)
            .min_size(egui::vec2(ui.available_width(), 28.0)),
    )
}
