//! tally - a four-function calculator
//!
//! A display and a 4x4 keypad. Presses build an expression; `=` evaluates it.

mod app;
mod calculator;
mod keypad;
mod settings;

use app::TallyApp;
use eframe::NativeOptions;
use settings::Settings;

fn main() -> eframe::Result<()> {
    tallycore::logging::init();

    let settings = Settings::load();
    tracing::info!(
        config = %Settings::config_path().display(),
        width = settings.window_width,
        height = settings.window_height,
        "starting calculator"
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("calculator"),
        centered: settings.centered,
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| Box::new(TallyApp::new(cc, settings))),
    )
}
