use clap::Parser;
use mpad::args::Args;
use mpad::gui::{theme, GuiApp};
use mpad::logging::{self, Fallback};
use mpad::{Config, Workspace};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = Config::discover(args.config.as_deref())?;
    logging::init(&config.log, Fallback::Stderr)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "gui editor starting");

    let app_name = config.app_name.clone();
    let mut workspace = Workspace::new(config);
    if let Some(path) = args.file {
        workspace.open_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title(workspace.active().title()),
        ..Default::default()
    };

    eframe::run_native(
        &app_name,
        options,
        Box::new(|cc| {
            theme::setup_theme(&cc.egui_ctx);
            Ok(Box::new(GuiApp::new(cc, workspace)))
        }),
    )?;
    Ok(())
}
