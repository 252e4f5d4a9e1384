use mpad::config::{Config, ConfigError};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.app_name, "MandeepPAD");
    assert_eq!(config.tab_width, 8);
    assert_eq!(config.date_format, "%Y-%m-%d %H:%M:%S");
    assert!(config.view.menu_bar && config.view.tool_bar && config.view.status_bar);
    assert!(config.find.case_sensitive);
    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.file, None);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let text = r#"
tab_width = 4

[view]
tool_bar = false

[find]
case_sensitive = false

[log]
level = "debug"
file = "/tmp/mpad.log"
"#;
    let config = Config::from_toml(Path::new("mpad.toml"), text).unwrap();

    assert_eq!(config.tab_width, 4);
    assert_eq!(config.app_name, "MandeepPAD");
    assert!(config.view.menu_bar);
    assert!(!config.view.tool_bar);
    assert!(!config.find.case_sensitive);
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.file, Some(PathBuf::from("/tmp/mpad.log")));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let err = Config::from_toml(Path::new("bad.toml"), "tab_width = \"wide\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_unknown_date_format_is_an_error() {
    let path = Path::new("mpad.toml");
    let err = Config::from_toml(path, "date_format = \"%Q\"").unwrap_err();
    match err {
        ConfigError::DateFormat { path, format } => {
            assert_eq!(path, PathBuf::from("mpad.toml"));
            assert_eq!(format, "%Q");
        }
        other => panic!("unexpected error: {other}"),
    }

    let config = Config::from_toml(path, "date_format = \"%d/%m/%Y\"").unwrap();
    assert_eq!(config.date_format, "%d/%m/%Y");
}

#[test]
fn test_load_and_discover_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "app_name = \"Scratch\"\n").unwrap();

    assert_eq!(Config::load(&path).unwrap().app_name, "Scratch");
    assert_eq!(Config::discover(Some(&path)).unwrap().app_name, "Scratch");
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = Config::discover(Some(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_round_trips_through_toml() {
    let mut config = Config::default();
    config.tab_width = 2;
    config.view.status_bar = false;

    let text = toml::to_string(&config).unwrap();
    assert_eq!(Config::from_toml(Path::new("x.toml"), &text).unwrap(), config);
}
