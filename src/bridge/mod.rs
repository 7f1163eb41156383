//! Voice bridge to the embedded conversational widget
//!
//! Provides a channel-based interface between the UI and the external
//! widget: outbound text goes in as commands, inbound agent speech comes
//! back as events at arbitrary times.

pub mod config;
pub mod transport;

use crate::Result;
use config::BridgeConfig;
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use std::time::Duration;
use tracing::{debug, info, warn};
use transport::{ConvaiTransport, WireFrame};

/// Commands that can be sent to the bridge
#[derive(Debug, Clone)]
pub enum BridgeCommand {
    /// Forward text to the widget. Fire-and-forget.
    Say(String),

    /// Shutdown the bridge worker
    Shutdown,
}

/// Events emitted by the bridge
#[derive(Debug, Clone)]
pub enum BridgeEvent {
    /// Text spoken by the widget's agent, in arrival order
    Message(String),

    /// The bridge worker has shut down
    Shutdown,
}

/// Bridge with channel-based communication
///
/// The UI holds the command sender and event receiver; the worker thread
/// owns the transport and pumps frames in both directions.
pub struct ConvaiBridge {
    /// Configuration
    config: BridgeConfig,

    /// Command sender
    command_tx: Sender<BridgeCommand>,

    /// Command receiver (for worker)
    command_rx: Receiver<BridgeCommand>,

    /// Event sender (for worker)
    event_tx: Sender<BridgeEvent>,

    /// Event receiver
    event_rx: Receiver<BridgeEvent>,
}

impl ConvaiBridge {
    /// Create a new bridge
    pub fn new(config: BridgeConfig) -> Self {
        let (command_tx, command_rx) = bounded(config.queue_size);
        let (event_tx, event_rx) = bounded(config.queue_size);

        Self {
            config,
            command_tx,
            command_rx,
            event_tx,
            event_rx,
        }
    }

    /// Get the bridge configuration
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Get a sender for commands
    pub fn command_sender(&self) -> Sender<BridgeCommand> {
        self.command_tx.clone()
    }

    /// Get a receiver for events
    pub fn event_receiver(&self) -> Receiver<BridgeEvent> {
        self.event_rx.clone()
    }

    /// Start the bridge worker thread
    ///
    /// The worker encodes outgoing commands as `user_message` frames,
    /// decodes inbound frames into events, and drops anything malformed.
    pub fn start_worker(self, mut transport: Box<dyn ConvaiTransport>) -> Result<()> {
        let command_rx = self.command_rx.clone();
        let event_tx = self.event_tx.clone();

        std::thread::spawn(move || {
            info!("Voice bridge worker starting");

            loop {
                match command_rx.try_recv() {
                    Ok(BridgeCommand::Say(text)) => {
                        let frame = WireFrame::UserMessage { text };
                        match serde_json::to_string(&frame) {
                            Ok(encoded) => {
                                debug!("Forwarding frame to widget");
                                if let Err(e) = transport.send(&encoded) {
                                    warn!("Widget send failed: {}", e);
                                }
                            }
                            Err(e) => {
                                warn!("Failed to encode outbound frame: {}", e);
                            }
                        }
                    }
                    Ok(BridgeCommand::Shutdown) => {
                        info!("Voice bridge worker shutting down");
                        let _ = event_tx.send(BridgeEvent::Shutdown);
                        break;
                    }
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => {
                        warn!("Bridge command channel disconnected");
                        break;
                    }
                }

                // Drain whatever the widget produced since the last pass
                while let Some(raw) = transport.poll() {
                    match serde_json::from_str::<WireFrame>(&raw) {
                        Ok(WireFrame::AgentResponse { text }) => {
                            let _ = event_tx.send(BridgeEvent::Message(text));
                        }
                        Ok(frame) => {
                            debug!("Ignoring unexpected inbound frame: {:?}", frame);
                        }
                        Err(e) => {
                            warn!("Dropping malformed widget frame: {}", e);
                        }
                    }
                }

                std::thread::sleep(Duration::from_millis(10));
            }

            info!("Voice bridge worker stopped");
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::time::Instant;

    /// Transport double that records outbound frames and serves scripted
    /// inbound ones.
    #[derive(Clone, Default)]
    struct ScriptedTransport {
        sent: Arc<Mutex<Vec<String>>>,
        inbound: Arc<Mutex<VecDeque<String>>>,
    }

    impl ScriptedTransport {
        fn new() -> Self {
            Self::default()
        }

        fn queue_inbound(&self, raw: &str) {
            self.inbound.lock().push_back(raw.to_string());
        }

        fn sent_frames(&self) -> Vec<String> {
            self.sent.lock().clone()
        }
    }

    impl ConvaiTransport for ScriptedTransport {
        fn send(&mut self, frame: &str) -> Result<()> {
            self.sent.lock().push(frame.to_string());
            Ok(())
        }

        fn poll(&mut self) -> Option<String> {
            self.inbound.lock().pop_front()
        }
    }

    fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_bridge_creation() {
        let bridge = ConvaiBridge::new(BridgeConfig::default());
        let _cmd_tx = bridge.command_sender();
        let _event_rx = bridge.event_receiver();
        assert_eq!(bridge.config().mount_point, "voice-widget-container");
    }

    #[test]
    fn test_say_reaches_transport_as_user_message() {
        let bridge = ConvaiBridge::new(BridgeConfig::default());
        let command_tx = bridge.command_sender();
        let transport = ScriptedTransport::new();
        let probe = transport.clone();

        bridge.start_worker(Box::new(transport)).unwrap();

        command_tx
            .send(BridgeCommand::Say("Do I need bread flour?".to_string()))
            .unwrap();

        assert!(wait_until(|| !probe.sent_frames().is_empty()));
        let frames = probe.sent_frames();
        assert_eq!(
            frames[0],
            r#"{"type":"user_message","text":"Do I need bread flour?"}"#
        );

        command_tx.send(BridgeCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_agent_responses_surface_as_events() {
        let bridge = ConvaiBridge::new(BridgeConfig::default());
        let command_tx = bridge.command_sender();
        let event_rx = bridge.event_receiver();
        let transport = ScriptedTransport::new();
        transport.queue_inbound(r#"{"type":"agent_response","text":"All-purpose works fine."}"#);

        bridge.start_worker(Box::new(transport)).unwrap();

        let mut received = None;
        assert!(wait_until(|| {
            if let Ok(BridgeEvent::Message(text)) = event_rx.try_recv() {
                received = Some(text);
            }
            received.is_some()
        }));
        assert_eq!(received.as_deref(), Some("All-purpose works fine."));

        command_tx.send(BridgeCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_malformed_inbound_frames_are_dropped() {
        let bridge = ConvaiBridge::new(BridgeConfig::default());
        let command_tx = bridge.command_sender();
        let event_rx = bridge.event_receiver();
        let transport = ScriptedTransport::new();
        transport.queue_inbound("not json at all");
        transport.queue_inbound(r#"{"type":"agent_response","text":"Still here."}"#);

        bridge.start_worker(Box::new(transport)).unwrap();

        // Only the well-formed frame comes through
        let mut received = None;
        assert!(wait_until(|| {
            if let Ok(BridgeEvent::Message(text)) = event_rx.try_recv() {
                received = Some(text);
            }
            received.is_some()
        }));
        assert_eq!(received.as_deref(), Some("Still here."));
        assert!(event_rx.try_recv().is_err());

        command_tx.send(BridgeCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_send_failures_are_swallowed() {
        let bridge = ConvaiBridge::new(BridgeConfig::default());
        let command_tx = bridge.command_sender();
        let event_rx = bridge.event_receiver();
        let transport = FailingTransport {
            inbound: Arc::new(Mutex::new(VecDeque::new())),
        };
        transport
            .inbound
            .lock()
            .push_back(r#"{"type":"agent_response","text":"Back online."}"#.to_string());

        bridge.start_worker(Box::new(transport)).unwrap();

        command_tx
            .send(BridgeCommand::Say("anyone there?".to_string()))
            .unwrap();

        // The failed send produces no event; the worker keeps pumping and
        // still delivers the inbound frame
        let mut received = None;
        assert!(wait_until(|| {
            if let Ok(BridgeEvent::Message(text)) = event_rx.try_recv() {
                received = Some(text);
            }
            received.is_some()
        }));
        assert_eq!(received.as_deref(), Some("Back online."));

        command_tx.send(BridgeCommand::Shutdown).unwrap();
    }

    struct FailingTransport {
        inbound: Arc<Mutex<VecDeque<String>>>,
    }

    impl ConvaiTransport for FailingTransport {
        fn send(&mut self, _frame: &str) -> Result<()> {
            Err(crate::QuickRecipeError::BridgeError(
                "widget offline".to_string(),
            ))
        }

        fn poll(&mut self) -> Option<String> {
            self.inbound.lock().pop_front()
        }
    }

    #[test]
    fn test_shutdown_emits_event_and_stops_worker() {
        let bridge = ConvaiBridge::new(BridgeConfig::default());
        let command_tx = bridge.command_sender();
        let event_rx = bridge.event_receiver();

        bridge.start_worker(Box::new(NullTransportForTest)).unwrap();

        command_tx.send(BridgeCommand::Shutdown).unwrap();

        let mut saw_shutdown = false;
        assert!(wait_until(|| {
            if let Ok(BridgeEvent::Shutdown) = event_rx.try_recv() {
                saw_shutdown = true;
            }
            saw_shutdown
        }));
    }

    struct NullTransportForTest;

    impl ConvaiTransport for NullTransportForTest {
        fn send(&mut self, _frame: &str) -> Result<()> {
            Ok(())
        }

        fn poll(&mut self) -> Option<String> {
            None
        }
    }
}
