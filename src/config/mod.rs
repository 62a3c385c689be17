//! Editor configuration: TOML file, defaults and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DisplayConfig, EditorConfig, LayoutConfig, LoggingConfig};
