// Core app structure and main update loop

use super::config::*;
use crate::nav::{NavState, Route};
use crate::session::{DialogSession, LogoutDecision, SessionPrompt};
use crate::ui::theme::colors;

use eframe::egui;

/// Duration of the drawer open/close tween, in seconds
const DRAWER_ANIM_SECS: f32 = 0.25;

pub struct Veranda {
    pub options: ShellConfig,
    pub nav: NavState,
    pub session: Box<dyn SessionPrompt>,
    pub infotext: String,
}

impl Veranda {
    pub fn new(start_route: Route) -> Self {
        let options = load_cfg();

        Self {
            options,
            nav: NavState::new(start_route),
            session: Box::new(DialogSession),
            infotext: String::new(),
        }
    }

    /// Switch the active route (drawer closes as a side effect)
    pub fn navigate(&mut self, route: Route) {
        self.infotext.clear();
        self.nav.navigate(route);
    }

    /// Resolve a logout request through the injected session collaborator.
    /// There is no session to terminate; a confirmed logout resets the shell.
    pub fn request_logout(&mut self) {
        match self.session.confirm_logout() {
            LogoutDecision::Confirmed => {
                println!("[veranda] Logout confirmed");
                self.nav.navigate(Route::Home);
                self.infotext = "Sessão encerrada".to_string();
            }
            LogoutDecision::Cancelled => {}
        }
    }
}

impl eframe::App for Veranda {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Paint full-screen background behind the drawer and the card
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::background())
            .rect_filled(screen_rect, 0.0, colors::BG_DARK);

        // The framework owns the open fraction: the shell only flips the
        // target bool and reads the interpolated value back each frame.
        let progress = ctx.animate_bool_with_time(
            egui::Id::new("drawer_progress"),
            self.nav.drawer_open,
            DRAWER_ANIM_SECS,
        );

        // Left drawer panel, sliding out to its configured width
        let drawer_width = screen_rect.width() * self.options.drawer_fraction;
        if progress > 0.0 {
            egui::SidePanel::left("drawer_panel")
                .resizable(false)
                .exact_width(drawer_width * progress)
                .show_separator_line(false)
                .frame(
                    egui::Frame::NONE
                        .fill(colors::BG_DARK)
                        .inner_margin(egui::Margin::symmetric(16, 12)),
                )
                .show(ctx, |ui| self.display_drawer_panel(ui));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::TRANSPARENT))
            .show(ctx, |ui| self.display_screen_stack(ui, progress));

        if !self.infotext.is_empty() {
            egui::Area::new("infotext".into())
                .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::NONE
                        .fill(colors::BG_MID)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(16, 8))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&self.infotext)
                                    .small()
                                    .color(colors::TEXT_PRIMARY),
                            );
                        });
                });
        }

        if ctx.input(|input| input.focused) {
            ctx.request_repaint_after(std::time::Duration::from_millis(33)); // 30 fps
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = save_cfg(&self.options) {
            eprintln!("[veranda] Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StubSession;

    fn shell_with(decision: LogoutDecision) -> Veranda {
        Veranda {
            options: ShellConfig::default(),
            nav: NavState::new(Route::Messages),
            session: Box::new(StubSession(decision)),
            infotext: String::new(),
        }
    }

    #[test]
    fn test_confirmed_logout_resets_shell() {
        let mut shell = shell_with(LogoutDecision::Confirmed);
        shell.nav.open_drawer();

        shell.request_logout();
        assert_eq!(shell.nav.route, Route::Home);
        assert!(!shell.nav.drawer_open);
        assert!(!shell.infotext.is_empty());
    }

    #[test]
    fn test_cancelled_logout_keeps_state() {
        let mut shell = shell_with(LogoutDecision::Cancelled);
        shell.nav.open_drawer();

        shell.request_logout();
        // Drawer stays open on the same route, nothing acknowledged
        assert_eq!(shell.nav.route, Route::Messages);
        assert!(shell.nav.drawer_open);
        assert!(shell.infotext.is_empty());
    }

    #[test]
    fn test_navigate_clears_infotext() {
        let mut shell = shell_with(LogoutDecision::Confirmed);
        shell.request_logout();

        shell.navigate(Route::Contact);
        assert_eq!(shell.nav.route, Route::Contact);
        assert!(shell.infotext.is_empty());
    }
}
