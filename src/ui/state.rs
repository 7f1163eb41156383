//! Application state management
//!
//! This module provides the central state for the QuickRecipe UI: the
//! current screen, the selected category and recipe, the conversation log,
//! and the voice mode flag, plus the two scheduled deadlines (scripted
//! reply, bridge greeting).

use crate::bridge::{BridgeCommand, BridgeEvent};
use crate::catalog::{Category, Recipe};
use crate::chat::{script, ChatMessage, MessageLog};
use crate::config::AppConfig;
use crossbeam_channel::{Receiver, Sender as ChannelSender};
use std::time::{Duration, Instant};
use tracing::debug;

/// Top-level UI screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Category grid and entry points
    Home,
    /// Recipe list for the selected category
    Category,
    /// Conversation with the assistant
    Chat,
}

/// Central application state
///
/// Owned exclusively by the rendering app for the duration of a session;
/// every mutation happens on the UI event loop.
pub struct AppState {
    /// Current screen
    pub view_state: ViewState,

    /// Category being browsed. Set only while on the category screen.
    pub selected_category: Option<Category>,

    /// Recipe the current walkthrough is about
    pub selected_recipe: Option<Recipe>,

    /// Conversation log (thread-safe)
    pub messages: MessageLog,

    /// Current text input
    pub input_text: String,

    /// Whether the embedded voice widget is driving the conversation
    pub voice_mode: bool,

    /// Channel to send bridge commands
    pub bridge_tx: Option<ChannelSender<BridgeCommand>>,

    /// Channel to receive bridge events
    pub bridge_rx: Option<Receiver<BridgeEvent>>,

    /// Configuration
    pub config: AppConfig,

    /// Deadline for the scripted reply to the last typed message.
    /// Cleared when voice mode turns on or a recipe walkthrough replaces
    /// the log, so a stale reply never fires.
    pending_reply: Option<Instant>,

    /// Deadline for the greeting sent to the widget after voice mode
    /// turns on. Cleared when voice mode turns off.
    pending_greeting: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new application state with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application state
    ///
    /// The log starts with the assistant's welcome message.
    pub fn with_config(config: AppConfig) -> Self {
        let messages = MessageLog::new();
        messages.add(ChatMessage::bot(script::WELCOME));

        Self {
            view_state: ViewState::Home,
            selected_category: None,
            selected_recipe: None,
            messages,
            input_text: String::new(),
            voice_mode: false,
            bridge_tx: None,
            bridge_rx: None,
            config,
            pending_reply: None,
            pending_greeting: None,
        }
    }

    /// Return to the home screen, clearing both selections
    pub fn go_to_home(&mut self) {
        self.view_state = ViewState::Home;
        self.selected_category = None;
        self.selected_recipe = None;
    }

    /// Open the recipe list for a category
    pub fn select_category(&mut self, category: Category) {
        debug!("Browsing category: {}", category.id);
        self.selected_category = Some(category);
        self.view_state = ViewState::Category;
    }

    /// Switch to the chat screen without touching selection or log
    pub fn go_to_chat(&mut self) {
        self.view_state = ViewState::Chat;
    }

    /// Open the chat with a full walkthrough of the given recipe
    ///
    /// Replaces the entire log with the four walkthrough messages and
    /// drops any scripted reply still pending for an earlier question.
    pub fn select_recipe(&mut self, recipe: Recipe) {
        debug!("Selected recipe: {}", recipe.id);
        self.messages.replace(script::recipe_walkthrough(&recipe));
        self.selected_recipe = Some(recipe);
        self.view_state = ViewState::Chat;
        self.pending_reply = None;
    }

    /// Send the current text input to the assistant
    ///
    /// Empty or whitespace-only input is silently ignored. The text is
    /// always forwarded to the bridge; the scripted reply is scheduled
    /// only when voice mode is off.
    pub fn send_message(&mut self) {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.messages.add(ChatMessage::user(text.clone()));

        if let Some(tx) = &self.bridge_tx {
            let _ = tx.send(BridgeCommand::Say(text));
        }

        if !self.voice_mode {
            self.pending_reply =
                Some(Instant::now() + Duration::from_millis(self.config.reply_delay_ms));
        }

        self.input_text.clear();
    }

    /// Append a bot message to the log
    pub fn append_bot_message(&mut self, text: impl Into<String>) {
        self.messages.add(ChatMessage::bot(text));
    }

    /// Toggle between typed and voice conversation
    ///
    /// Turning voice on hands the conversation to the widget: a status
    /// message is appended, a greeting is scheduled so the widget container
    /// has time to materialize, and any pending scripted reply is dropped.
    /// Turning voice off appends the other status message and drops a
    /// greeting that has not fired yet.
    pub fn toggle_voice_mode(&mut self) {
        if self.voice_mode {
            self.voice_mode = false;
            self.append_bot_message(script::VOICE_OFF_STATUS);
            self.pending_greeting = None;
            debug!("Voice mode off");
        } else {
            self.voice_mode = true;
            self.append_bot_message(script::VOICE_ON_STATUS);
            self.pending_greeting = Some(
                Instant::now() + Duration::from_millis(self.config.bridge.greeting_delay_ms),
            );
            self.pending_reply = None;
            debug!("Voice mode on");
        }
    }

    /// Fire any deadline that has passed
    pub fn poll_timers(&mut self, now: Instant) {
        if self.pending_reply.is_some_and(|deadline| deadline <= now) {
            self.pending_reply = None;
            self.append_bot_message(script::CANNED_REPLY);
        }

        if self.pending_greeting.is_some_and(|deadline| deadline <= now) {
            self.pending_greeting = None;
            if let Some(tx) = &self.bridge_tx {
                let _ = tx.send(BridgeCommand::Say(script::VOICE_GREETING.to_string()));
            }
        }
    }

    /// Process incoming events from the bridge
    ///
    /// Inbound widget messages append in arrival order on every screen,
    /// not just the chat view.
    pub fn poll_events(&mut self) {
        let incoming: Vec<BridgeEvent> = if let Some(rx) = &self.bridge_rx {
            let mut events = Vec::new();
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
            events
        } else {
            Vec::new()
        };

        for event in incoming {
            match event {
                BridgeEvent::Message(text) => {
                    self.append_bot_message(text);
                }
                BridgeEvent::Shutdown => {
                    debug!("Bridge worker shut down");
                }
            }
        }
    }

    /// The earliest pending deadline, if any. Drives repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.pending_reply, self.pending_greeting) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::recipes_for_category;
    use crate::chat::Role;
    use crossbeam_channel::bounded;

    fn state() -> AppState {
        AppState::new()
    }

    fn past_all_deadlines() -> Instant {
        Instant::now() + Duration::from_secs(5)
    }

    #[test]
    fn test_session_starts_at_home_with_welcome() {
        let state = state();
        assert_eq!(state.view_state, ViewState::Home);
        assert!(state.selected_category.is_none());
        assert!(state.selected_recipe.is_none());

        let messages = state.messages.get_all();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Bot);
        assert_eq!(messages[0].content, script::WELCOME);
    }

    #[test]
    fn test_send_message_appends_user_entry() {
        let mut state = state();
        state.input_text = "How do I proof yeast?".to_string();
        state.send_message();

        let messages = state.messages.get_all();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "How do I proof yeast?");
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_whitespace_input_is_a_no_op() {
        let mut state = state();
        state.input_text = "   \n  ".to_string();
        state.send_message();
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_scripted_reply_fires_after_delay() {
        let mut state = state();
        state.input_text = "hello".to_string();
        state.send_message();

        // Not due yet
        state.poll_timers(Instant::now());
        assert_eq!(state.messages.len(), 2);

        state.poll_timers(past_all_deadlines());
        let messages = state.messages.get_all();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].content, script::CANNED_REPLY);

        // Fires once only
        state.poll_timers(past_all_deadlines());
        assert_eq!(state.messages.len(), 3);
    }

    #[test]
    fn test_voice_mode_suppresses_scripted_reply() {
        let mut state = state();
        state.toggle_voice_mode();
        state.input_text = "hello".to_string();
        state.send_message();

        state.poll_timers(past_all_deadlines());
        let messages = state.messages.get_all();
        // welcome + voice-on status + user message, no scripted reply
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().all(|m| m.content != script::CANNED_REPLY));
    }

    #[test]
    fn test_voice_toggle_cancels_pending_reply() {
        let mut state = state();
        state.input_text = "hello".to_string();
        state.send_message();
        assert!(state.next_deadline().is_some());

        state.toggle_voice_mode();
        state.poll_timers(past_all_deadlines());

        let messages = state.messages.get_all();
        assert!(messages.iter().all(|m| m.content != script::CANNED_REPLY));
    }

    #[test]
    fn test_greeting_sent_to_bridge_after_delay() {
        let (tx, rx) = bounded(16);
        let mut state = state();
        state.bridge_tx = Some(tx);

        state.toggle_voice_mode();
        assert!(rx.try_recv().is_err());

        state.poll_timers(past_all_deadlines());
        match rx.try_recv() {
            Ok(BridgeCommand::Say(text)) => assert_eq!(text, script::VOICE_GREETING),
            other => panic!("expected greeting, got {:?}", other),
        }
    }

    #[test]
    fn test_voice_off_cancels_pending_greeting() {
        let (tx, rx) = bounded(16);
        let mut state = state();
        state.bridge_tx = Some(tx);

        state.toggle_voice_mode();
        state.toggle_voice_mode();
        state.poll_timers(past_all_deadlines());

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_select_recipe_replaces_log_and_cancels_reply() {
        let mut state = state();
        state.input_text = "hello".to_string();
        state.send_message();

        let recipe = recipes_for_category("pizza").remove(0);
        state.select_recipe(recipe.clone());

        assert_eq!(state.view_state, ViewState::Chat);
        assert_eq!(state.selected_recipe.as_ref().map(|r| r.id.as_str()), Some("pizza-1"));

        let messages = state.messages.get_all();
        assert_eq!(messages.len(), 4);
        assert!(messages.iter().all(|m| m.role == Role::Bot));
        assert!(messages[0].content.contains(&recipe.title));

        state.poll_timers(past_all_deadlines());
        assert_eq!(state.messages.len(), 4, "cancelled reply must not fire");
    }

    #[test]
    fn test_go_to_home_clears_selections_only() {
        let mut state = state();
        let category = crate::catalog::categories().remove(0);
        state.select_category(category);
        assert_eq!(state.view_state, ViewState::Category);

        let recipe = recipes_for_category("pizza").remove(0);
        state.select_recipe(recipe);

        state.go_to_home();
        assert_eq!(state.view_state, ViewState::Home);
        assert!(state.selected_category.is_none());
        assert!(state.selected_recipe.is_none());
        assert_eq!(state.messages.len(), 4, "log survives navigation");
    }

    #[test]
    fn test_bridge_messages_append_in_arrival_order() {
        let (tx, rx) = bounded(16);
        let mut state = state();
        state.bridge_rx = Some(rx);

        tx.send(BridgeEvent::Message("first".to_string())).unwrap();
        tx.send(BridgeEvent::Message("second".to_string())).unwrap();
        state.poll_events();

        let messages = state.messages.get_all();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, "first");
        assert_eq!(messages[2].content, "second");
    }

    #[test]
    fn test_bridge_messages_append_outside_chat_view() {
        let (tx, rx) = bounded(16);
        let mut state = state();
        state.bridge_rx = Some(rx);
        assert_eq!(state.view_state, ViewState::Home);

        tx.send(BridgeEvent::Message("heard you from home".to_string()))
            .unwrap();
        state.poll_events();

        assert_eq!(state.messages.len(), 2);
    }

    #[test]
    fn test_next_deadline_picks_earliest() {
        let mut state = AppState::with_config(
            AppConfig::default().with_reply_delay_ms(5000),
        );
        state.input_text = "hello".to_string();
        state.send_message();
        let reply_deadline = state.next_deadline().unwrap();

        state.toggle_voice_mode();
        // Reply was cancelled; only the (earlier) greeting remains
        let greeting_deadline = state.next_deadline().unwrap();
        assert!(greeting_deadline < reply_deadline);
    }
}
