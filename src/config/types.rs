use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub modal: ModalDefaults,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Light or dark token set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub scheme: ColorScheme,
}

/// Defaults applied to every modal unless the host overrides them per render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalDefaults {
    /// Dismiss when a click starts and ends on the backdrop (default: true).
    #[serde(default = "default_true")]
    pub close_on_backdrop_click: bool,
    /// Render the header close button (default: true).
    #[serde(default = "default_true")]
    pub show_close_button: bool,
    /// Key name that dismisses an open dialog (default: "esc").
    #[serde(default = "default_dismiss_key")]
    pub dismiss_key: String,
    /// Maximum width of the content box in columns (default: 56).
    #[serde(default = "default_modal_max_width")]
    pub max_width: u16,
}

/// Terminal event loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Poll interval; also drives spinner animation (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse events so backdrop clicks reach the dialog (default: true).
    #[serde(default = "default_true")]
    pub mouse_capture: bool,
}

/// Log output. Nothing is written to stdout since the terminal belongs to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Logging stays off when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_dismiss_key() -> String {
    "esc".to_string()
}

fn default_modal_max_width() -> u16 {
    56
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ModalDefaults {
    fn default() -> Self {
        Self {
            close_on_backdrop_click: true,
            show_close_button: true,
            dismiss_key: default_dismiss_key(),
            max_width: default_modal_max_width(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse_capture: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
