//! Widget settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Largest accepted upload: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const DEFAULT_SUBMIT_LABEL: &str = "Envoyer ma demande";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Upload ceiling in bytes, inclusive.
    pub max_file_size: u64,
    /// Simulated network latency of a submission.
    pub submit_delay_ms: u64,
    /// Delay before scrolling to the form after a card is picked.
    pub scroll_delay_ms: u64,
    pub channel_buffer: usize,
    pub submit_label: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            submit_delay_ms: 1500,
            scroll_delay_ms: 300,
            channel_buffer: 32,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parses a config document; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_size == 0 {
            return Err(ConfigError::Invalid {
                field: "max_file_size",
                reason: "must be greater than zero",
            });
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid {
                field: "channel_buffer",
                reason: "must be greater than zero",
            });
        }
        if self.submit_label.is_empty() {
            return Err(ConfigError::Invalid {
                field: "submit_label",
                reason: "must not be empty",
            });
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.max_file_size, 10_485_760);
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = WidgetConfig::from_json(r#"{ "submit_delay_ms": 10 }"#).unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.max_file_size, MAX_FILE_SIZE);
    }

    #[test]
    fn test_from_json_rejects_zero_buffer() {
        let err = WidgetConfig::from_json(r#"{ "channel_buffer": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "channel_buffer", .. }));
    }
}
