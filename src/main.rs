//! Subtitle Studio
//!
//! A desktop subtitle editor: zoomable timeline, movable caption
//! overlay, and per-word reveal animations.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod state;
mod timeline;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Subtitle Studio")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
