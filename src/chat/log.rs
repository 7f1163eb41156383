use super::types::ChatMessage;
use parking_lot::RwLock;
use std::sync::Arc;

/// Ordered, append-only conversation log.
///
/// The log is only ever rewritten wholesale via `replace`, which recipe
/// selection uses to swap in a fresh walkthrough; nothing else removes or
/// edits entries.
#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: Arc<RwLock<Vec<ChatMessage>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn add(&self, message: ChatMessage) {
        self.messages.write().push(message);
    }

    pub fn replace(&self, messages: Vec<ChatMessage>) {
        *self.messages.write() = messages;
    }

    pub fn get_all(&self) -> Vec<ChatMessage> {
        self.messages.read().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::types::Role;

    #[test]
    fn test_add_preserves_order() {
        let log = MessageLog::new();
        log.add(ChatMessage::user("first"));
        log.add(ChatMessage::bot("second"));
        log.add(ChatMessage::user("third"));

        let messages = log.get_all();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[1].content, "second");
        assert_eq!(messages[2].content, "third");
    }

    #[test]
    fn test_replace_swaps_contents() {
        let log = MessageLog::new();
        log.add(ChatMessage::user("old"));
        log.add(ChatMessage::user("older"));

        log.replace(vec![ChatMessage::bot("fresh")]);

        let messages = log.get_all();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Bot);
        assert_eq!(messages[0].content, "fresh");
    }

    #[test]
    fn test_clones_share_storage() {
        let log = MessageLog::new();
        let view = log.clone();
        log.add(ChatMessage::user("shared"));
        assert_eq!(view.len(), 1);
    }
}
