use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::CatalogItem;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Replaces the built-in dessert list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<CatalogEntry>>,
}

/// Terminal UI timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a notice stays on screen in milliseconds (default: 3500).
    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to the user cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// One `[[catalog]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default = "default_glyph")]
    pub glyph: String,
    pub price: u64,
    pub threshold: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notice_duration_ms() -> u64 {
    3500
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_glyph() -> String {
    "🍰".to_string()
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notice_duration_ms: default_notice_duration_ms(),
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

impl From<&CatalogEntry> for CatalogItem {
    fn from(entry: &CatalogEntry) -> Self {
        CatalogItem::new(
            entry.name.clone(),
            entry.glyph.clone(),
            entry.price,
            entry.threshold,
        )
    }
}
