//! Configuration loading and defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogEntry, Config, LoggingConfig, UiConfig};
