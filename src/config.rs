//! Application configuration
//!
//! Centralized configuration for the assistant and the voice bridge.

use crate::bridge::config::BridgeConfig;

/// Configuration for the complete application
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Delay before the scripted reply to a typed message, in milliseconds
    pub reply_delay_ms: u64,

    /// Voice bridge configuration
    pub bridge: BridgeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            bridge: BridgeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Set the scripted reply delay
    pub fn with_reply_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reply_delay_ms = delay_ms;
        self
    }

    /// Set the bridge configuration
    pub fn with_bridge(mut self, bridge: BridgeConfig) -> Self {
        self.bridge = bridge;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.bridge.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.reply_delay_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = AppConfig::default()
            .with_reply_delay_ms(50)
            .with_bridge(BridgeConfig::default().with_greeting_delay_ms(10));

        assert_eq!(config.reply_delay_ms, 50);
        assert_eq!(config.bridge.greeting_delay_ms, 10);
    }
}
