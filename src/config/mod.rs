//! Application configuration.
//!
//! Loaded from `~/.config/hongik-timer/config.toml` (or the platform
//! equivalent). Every field has a default, so a missing file is not an error.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, AppConfig, LoggingConfig};
