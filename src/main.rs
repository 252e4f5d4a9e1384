use clap::Parser;
use mpad::args::Args;
use mpad::logging::{self, Fallback};
use mpad::ui::{init, render, restore, App, Tui};
use mpad::{Config, Workspace};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = Config::discover(args.config.as_deref())?;
    logging::init(&config.log, Fallback::Silent)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "terminal editor starting");

    let mut workspace = Workspace::new(config);
    if let Some(path) = args.file {
        workspace.open_path(path);
    }
    let mut app = App::new(workspace);

    // Initialize terminal
    let mut terminal = init()?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    restore()?;

    Ok(result?)
}

fn run_app(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| render(app, frame))?;
        app.handle_input()?;
    }
    Ok(())
}
