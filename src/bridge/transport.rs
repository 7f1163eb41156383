//! Transport boundary to the embedded voice widget
//!
//! The widget is an external collaborator; the core only exchanges JSON
//! frames with it and never looks inside.

use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single frame on the widget wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireFrame {
    /// Outbound text from the user to the widget
    UserMessage { text: String },

    /// Inbound text spoken by the widget's agent
    AgentResponse { text: String },
}

/// Connection to the external conversational widget.
///
/// `send` is fire-and-forget from the core's perspective; failures are
/// logged at the bridge and never surface to the UI. `poll` returns the
/// next raw inbound frame, if any.
pub trait ConvaiTransport: Send {
    fn send(&mut self, frame: &str) -> Result<()>;
    fn poll(&mut self) -> Option<String>;
}

/// Transport used when no widget is attached. Discards outbound frames
/// and never produces inbound ones.
#[derive(Debug, Default)]
pub struct NullTransport;

impl NullTransport {
    pub fn new() -> Self {
        Self
    }
}

impl ConvaiTransport for NullTransport {
    fn send(&mut self, frame: &str) -> Result<()> {
        debug!("No widget attached, discarding frame: {}", frame);
        Ok(())
    }

    fn poll(&mut self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_wire_format() {
        let frame = WireFrame::UserMessage {
            text: "How long do I knead the dough?".to_string(),
        };
        let encoded = serde_json::to_string(&frame).unwrap();
        assert_eq!(
            encoded,
            r#"{"type":"user_message","text":"How long do I knead the dough?"}"#
        );
    }

    #[test]
    fn test_agent_response_decodes() {
        let raw = r#"{"type":"agent_response","text":"Knead for about ten minutes."}"#;
        let frame: WireFrame = serde_json::from_str(raw).unwrap();
        assert_eq!(
            frame,
            WireFrame::AgentResponse {
                text: "Knead for about ten minutes.".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_frame_is_an_error() {
        assert!(serde_json::from_str::<WireFrame>("{\"type\":\"mystery\"}").is_err());
        assert!(serde_json::from_str::<WireFrame>("not json").is_err());
    }

    #[test]
    fn test_null_transport_is_silent() {
        let mut transport = NullTransport::new();
        assert!(transport.send("{}").is_ok());
        assert!(transport.poll().is_none());
    }
}
