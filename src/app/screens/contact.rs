//! Contact placeholder screen

use crate::app::app::Veranda;
use crate::ui::theme::colors;

use eframe::egui::{RichText, Ui};

impl Veranda {
    pub(super) fn display_screen_contact(&mut self, ui: &mut Ui) {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("Contatos").color(colors::SCREEN_FG));
        });
    }
}
