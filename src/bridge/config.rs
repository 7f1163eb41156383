//! Configuration for the voice bridge

/// Configuration for the embedded voice widget integration
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Identifier of the UI container the external widget renders into
    pub mount_point: String,

    /// Delay before the greeting is sent after voice mode turns on, in
    /// milliseconds. Gives the container a frame to materialize.
    pub greeting_delay_ms: u64,

    /// Capacity of the command and event channels
    pub queue_size: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            mount_point: "voice-widget-container".to_string(),
            greeting_delay_ms: 300,
            queue_size: 100,
        }
    }
}

impl BridgeConfig {
    /// Set the mount point identifier
    pub fn with_mount_point(mut self, mount_point: impl Into<String>) -> Self {
        self.mount_point = mount_point.into();
        self
    }

    /// Set the greeting delay
    pub fn with_greeting_delay_ms(mut self, delay_ms: u64) -> Self {
        self.greeting_delay_ms = delay_ms;
        self
    }

    /// Set the channel capacity
    pub fn with_queue_size(mut self, queue_size: usize) -> Self {
        self.queue_size = queue_size;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.mount_point.trim().is_empty() {
            return Err("Bridge mount point is required".to_string());
        }
        if self.queue_size == 0 {
            return Err("Bridge queue size must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.mount_point, "voice-widget-container");
        assert_eq!(config.greeting_delay_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_mount_point() {
        let config = BridgeConfig::default().with_mount_point("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_queue() {
        let config = BridgeConfig::default().with_queue_size(0);
        assert!(config.validate().is_err());
    }
}
