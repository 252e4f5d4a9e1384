use clap::Parser;
use std::path::PathBuf;

/// Command line shared by both frontends
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "mpad", version, about = "A minimal text editor", long_about = None)]
pub struct Args {
    /// Config file (default: $MPAD_CONFIG, then ./mpad.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Document to open at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}
