#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use tracing::Level;

use fuzzy_picker::PickerDemoApp;

fn main() -> eframe::Result<()> {
    // Log to stdout (if you run with `RUST_LOG=debug`).
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Fuzzy Picker",
        native_options,
        Box::new(|cc| Box::new(PickerDemoApp::new(cc))),
    )
}
