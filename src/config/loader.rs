use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::KeyCode;
use thiserror::Error;

use crate::config::types::{Config, ModalDefaults, RuntimeConfig};

/// Narrowest content box that still fits a header with a close button.
pub const MIN_MODAL_WIDTH: u16 = 20;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/brandui/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("brandui").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The dismissal key names a usable key
    /// - The modal width leaves room for a header
    /// - The tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.modal.dismiss_key_code()?;

        if self.modal.max_width < MIN_MODAL_WIDTH {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "modal.max_width must be at least {}, got {}",
                    MIN_MODAL_WIDTH, self.modal.max_width
                ),
            });
        }

        if self.runtime.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "runtime.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

impl ModalDefaults {
    /// Resolve `dismiss_key` to a key code.
    ///
    /// Tab and BackTab are rejected: they move focus inside an open dialog.
    pub fn dismiss_key_code(&self) -> Result<KeyCode, ConfigError> {
        parse_key_name(&self.dismiss_key).ok_or_else(|| ConfigError::ValidationError {
            message: format!("Unsupported modal.dismiss_key '{}'", self.dismiss_key),
        })
    }
}

impl RuntimeConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    let lowered = name.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "esc" | "escape" => return Some(KeyCode::Esc),
        "enter" | "return" => return Some(KeyCode::Enter),
        "backspace" => return Some(KeyCode::Backspace),
        "delete" | "del" => return Some(KeyCode::Delete),
        _ => {}
    }

    if let Some(number) = lowered.strip_prefix('f') {
        if let Ok(n) = number.parse::<u8>() {
            return (1..=12).contains(&n).then_some(KeyCode::F(n));
        }
    }

    let mut chars = name.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Some(KeyCode::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal_with_key(key: &str) -> ModalDefaults {
        ModalDefaults {
            dismiss_key: key.to_string(),
            ..ModalDefaults::default()
        }
    }

    #[test]
    fn named_keys_resolve() {
        assert_eq!(modal_with_key("esc").dismiss_key_code().unwrap(), KeyCode::Esc);
        assert_eq!(modal_with_key("Escape").dismiss_key_code().unwrap(), KeyCode::Esc);
        assert_eq!(modal_with_key("f10").dismiss_key_code().unwrap(), KeyCode::F(10));
        assert_eq!(modal_with_key("q").dismiss_key_code().unwrap(), KeyCode::Char('q'));
    }

    #[test]
    fn focus_keys_are_rejected() {
        assert!(modal_with_key("tab").dismiss_key_code().is_err());
        assert!(modal_with_key("backtab").dismiss_key_code().is_err());
        assert!(modal_with_key("f13").dismiss_key_code().is_err());
        assert!(modal_with_key(" ").dismiss_key_code().is_err());
    }

    #[test]
    fn narrow_modal_fails_validation() {
        let mut config = Config::default();
        config.modal.max_width = MIN_MODAL_WIDTH - 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
