//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hint text shown while the URL field is empty.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Oldest activity lines are dropped past this many entries.
    #[serde(default = "default_max_activity")]
    pub max_activity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            timestamp_format: default_timestamp_format(),
            max_activity: default_max_activity(),
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_placeholder() -> String {
    "http://image.com".to_string()
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_max_activity() -> usize {
    1000
}
fn default_log_filter() -> String {
    "info,emojiform=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.ui.placeholder, "http://image.com");
        assert!(config.ui.max_activity > 0);
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.timestamp_format, "%H:%M:%S");
        assert_eq!(config.logging.filter, "info,emojiform=debug");
    }

    #[test]
    fn unknown_sections_are_tolerated() {
        let config: AppConfig = toml::from_str("[future]\nkey = 1\n").unwrap();
        assert_eq!(config.ui.placeholder, "http://image.com");
    }
}
