use crate::config::LogConfig;
use std::fs::OpenOptions;
use std::io;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

/// Where log records go when no file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Drop them (the terminal UI owns stdout/stderr)
    Silent,
    Stderr,
}

/// Level named by `name`, `None` when it is not one tracing knows
fn parse_level(name: &str) -> Option<Level> {
    Level::from_str(name.trim()).ok()
}

/// Install the global fmt subscriber described by `config`.
///
/// An unknown level falls back to `info` and is reported once the
/// subscriber is up.
pub fn init(config: &LogConfig, fallback: Fallback) -> io::Result<()> {
    let parsed = parse_level(&config.level);
    let level = parsed.unwrap_or(Level::INFO);

    match (&config.file, fallback) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, Fallback::Stderr) => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .init();
        }
        (None, Fallback::Silent) => {}
    }

    if parsed.is_none() {
        tracing::warn!(level = %config.level, "unknown log level, using info");
    }
    Ok(())
}
