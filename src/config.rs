//! Widget Configuration
//!
//! Read from the `data-js-todo-config` attribute of the root element.
//! Every field is optional.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "todo-items";
pub const DEFAULT_REMOVAL_DELAY_MS: u32 = 400;
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure you want to delete all the tasks?";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Local storage key holding the task list
    pub storage_key: String,
    /// Delay between marking a row as disappearing and removing it
    pub removal_delay_ms: u32,
    /// Question shown before deleting every task
    pub confirm_message: String,
    pub log_level: String,
    pub log_capacity: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            removal_delay_ms: DEFAULT_REMOVAL_DELAY_MS,
            confirm_message: DEFAULT_CONFIRM_MESSAGE.to_string(),
            log_level: "info".to_string(),
            log_capacity: ring_logger::DEFAULT_CAPACITY,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Configured level, `Info` when unrecognised
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.storage_key, "todo-items");
        assert_eq!(config.removal_delay_ms, 400);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{"storageKey":"my-list","logLevel":"debug"}"#).unwrap();
        assert_eq!(config.storage_key, "my-list");
        assert_eq!(config.removal_delay_ms, DEFAULT_REMOVAL_DELAY_MS);
        assert_eq!(config.confirm_message, DEFAULT_CONFIRM_MESSAGE);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = WidgetConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(WidgetConfig::from_json("{storageKey:").is_err());
    }
}
