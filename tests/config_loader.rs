use brandui::config::{ColorScheme, Config, ConfigError, ConfigStore, MIN_MODAL_WIDTH};
use brandui::ui::modal::DialogController;
use brandui::ui::surface::Surface;
use crossterm::event::KeyCode;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.theme.scheme, ColorScheme::Light);
    assert!(config.modal.close_on_backdrop_click);
    assert!(config.modal.show_close_button);
    assert_eq!(config.modal.dismiss_key, "esc");
    assert_eq!(config.modal.max_width, 56);
    assert_eq!(config.runtime.tick_rate(), Duration::from_millis(250));
    assert!(config.runtime.mouse_capture);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("brandui/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[theme]
scheme = "dark"

[modal]
close_on_backdrop_click = false
dismiss_key = "q"
"#,
    );

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.theme.scheme, ColorScheme::Dark);
    assert!(!config.modal.close_on_backdrop_click);
    assert!(config.modal.show_close_button);
    assert_eq!(config.modal.dismiss_key_code().expect("key"), KeyCode::Char('q'));
    assert_eq!(config.runtime.tick_rate_ms, 250);
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[modal\nmax_width = ");
    let err = Config::load_from(&path).expect_err("parse error");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_narrow_modal_fails_validation() {
    let mut config = Config::default();
    config.modal.max_width = MIN_MODAL_WIDTH - 1;
    let err = config.validate().expect_err("too narrow");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("max_width"));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let mut config = Config::default();
    config.runtime.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_tab_cannot_be_dismiss_key() {
    let mut config = Config::default();
    config.modal.dismiss_key = "tab".to_string();
    assert!(config.validate().is_err());
    assert!(DialogController::with_defaults(Surface::new(), &config.modal).is_err());
}

#[test]
fn test_named_dismiss_keys() {
    let mut config = Config::default();
    for (name, code) in [
        ("Escape", KeyCode::Esc),
        ("enter", KeyCode::Enter),
        ("F2", KeyCode::F(2)),
    ] {
        config.modal.dismiss_key = name.to_string();
        assert_eq!(config.modal.dismiss_key_code().expect(name), code);
    }
}

#[test]
fn test_store_reload_picks_up_changes() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[modal]\nmax_width = 40\n");
    let store = ConfigStore::new(Config::load_from(&path).expect("load"), path.clone());
    assert_eq!(store.get().modal.max_width, 40);

    fs::write(&path, "[modal]\nmax_width = 60\n").expect("rewrite");
    store.reload().expect("reload");
    assert_eq!(store.get().modal.max_width, 60);
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn test_store_reload_keeps_old_config_on_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[modal]\nmax_width = 40\n");
    let store = ConfigStore::new(Config::load_from(&path).expect("load"), path.clone());

    fs::write(&path, "[modal]\nmax_width = 5\n").expect("rewrite");
    assert!(store.reload().is_err());
    assert_eq!(store.get().modal.max_width, 40);
}
