mod loader;
mod store;
mod types;

pub use loader::{ConfigError, MIN_MODAL_WIDTH};
pub use store::ConfigStore;
pub use types::{ColorScheme, Config, LoggingConfig, ModalDefaults, RuntimeConfig, ThemeConfig};
