// main.rs - Game of Life window with a background tick loop

use conway_live::ui::LifeApp;
use conway_live::{Config, Result, logging};

fn main() -> Result<()> {
    logging::init_logging()?;

    let config = Config::default();
    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Game of Life"),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeApp::new(cc, config, runtime))),
    )?;
    Ok(())
}
