mod app;
mod nav;
mod paths;
mod session;
mod ui;

use crate::app::Veranda;
use crate::nav::Route;

fn main() -> eframe::Result {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let fullscreen = args.iter().any(|arg| arg == "--fullscreen");

    let mut start_route = Route::Home;
    if let Some(route_index) = args.iter().position(|arg| arg == "--route") {
        match args.get(route_index + 1).and_then(|name| Route::from_name(name)) {
            Some(route) => start_route = route,
            None => {
                eprintln!("{}", USAGE_TEXT);
                std::process::exit(1);
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([320.0, 480.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    println!("[veranda] Starting eframe app...");

    eframe::run_native(
        "Veranda",
        options,
        Box::new(move |cc| {
            // This gives us image support:
            egui_extras::install_image_loaders(&cc.egui_ctx);

            // Apply custom theme
            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(Veranda::new(start_route)))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: veranda [OPTIONS]

Options:
    --route <Name>   Start on the given route (Home, Messages, Contact)
    --fullscreen     Start the GUI in fullscreen mode
    --help           Print this help text
"#;
