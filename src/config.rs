use crate::search::FindOptions;
use crate::tools::{self, DEFAULT_DATE_FORMAT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "MPAD_CONFIG";

/// Config file picked up from the working directory
pub const LOCAL_CONFIG: &str = "mpad.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid date_format {format:?} in {}", path.display())]
    DateFormat { path: PathBuf, format: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shown in window titles
    pub app_name: String,

    /// Tab stop width in columns (terminal UI)
    pub tab_width: usize,

    /// strftime format for "Insert date/time"
    pub date_format: String,

    pub view: ViewConfig,
    pub find: FindOptions,
    pub log: LogConfig,
}

/// Initial visibility of the window bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub menu_bar: bool,
    pub tool_bar: bool,
    pub status_bar: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,

    /// Log destination. The terminal UI does not log without one.
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "MandeepPAD".to_string(),
            tab_width: 8,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            view: ViewConfig::default(),
            find: FindOptions::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            menu_bar: true,
            tool_bar: true,
            status_bar: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if !tools::is_valid_date_format(&config.date_format) {
            return Err(ConfigError::DateFormat {
                path: path.to_path_buf(),
                format: config.date_format,
            });
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &text)
    }

    /// Resolve the config: an explicit path must load; otherwise try
    /// `$MPAD_CONFIG`, then `./mpad.toml`, then fall back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        let local = Path::new(LOCAL_CONFIG);
        if local.is_file() {
            return Self::load(local);
        }
        Ok(Self::default())
    }
}
