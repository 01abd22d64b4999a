//! Configuration file loading tests
use kalnirnay::{Config, ConfigFile};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigFile::new(dir.path().join("absent.toml")).load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_display_settings() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nshow_banner = false\nrule_width = 30").unwrap();

    let config = ConfigFile::new(file.path()).load().unwrap();
    assert!(!config.display.show_banner);
    assert_eq!(config.display.rule_width, 30);
}

#[test]
fn test_invalid_toml_reports_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[display\nshow_banner = ").unwrap();

    let err = ConfigFile::new(file.path()).load().unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("failed to parse config"));
    assert!(message.contains(&file.path().display().to_string()));
}
