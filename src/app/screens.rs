// Screen card composition: transform, clip, header, active route body

mod contact;
mod dashboard;
mod messages;

use crate::app::app::Veranda;
use crate::nav::{Route, StackTransform};
use crate::ui::theme::colors;

use eframe::egui::{self, RichText, Sense, Ui, UiBuilder};
use egui_phosphor::regular as icons;

impl Veranda {
    /// Render the receding screen card for the active route
    pub fn display_screen_stack(&mut self, ui: &mut Ui, progress: f32) {
        let transform = StackTransform::from_progress(progress);
        let card_rect = transform.apply_to(ui.available_rect_before_wrap());

        // Tapping the receded card dismisses the drawer instead of
        // interacting with the screen underneath
        if self.nav.drawer_open {
            let response = ui.interact(card_rect, egui::Id::new("card_dismiss"), Sense::click());
            if response.clicked() {
                self.nav.close_drawer();
            }
        }

        ui.painter().rect_filled(
            card_rect,
            transform.corner_radius,
            self.nav.route.background(),
        );

        ui.scope_builder(UiBuilder::new().max_rect(card_rect), |ui| {
            ui.set_clip_rect(card_rect);
            self.display_screen_header(ui);
            match self.nav.route {
                Route::Home => self.display_screen_dashboard(ui),
                Route::Messages => self.display_screen_messages(ui),
                Route::Contact => self.display_screen_contact(ui),
            }
        });
    }

    /// Header-left menu control, present on every route
    fn display_screen_header(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(10.0);
            let menu_btn = ui.add(
                egui::Button::new(RichText::new(icons::LIST).size(18.0).color(colors::SCREEN_FG))
                    .frame(false),
            );
            if menu_btn.clicked() {
                self.nav.open_drawer();
            }
        });
    }
}
