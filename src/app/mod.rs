mod app;
mod config;
mod drawer;
mod screens;

pub use app::Veranda;
pub use config::{load_cfg, save_cfg, ShellConfig};
