//! Conversation directory
//!
//! Holds the conversation list and opens one [`ChatSession`] per conversation
//! on first selection. Sessions stay open so switching back keeps the thread.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;

use crate::chat::session::ChatSession;
use crate::chat::thread::MessageThread;
use crate::chat::ChatError;
use crate::reply::ReplyService;
use crate::storage::demo::{demo_conversations, demo_thread_messages, DEMO_THREAD_ID};
use crate::types::conversation::ConversationSummary;
use crate::types::message::Message;

pub struct ChatDirectory {
    conversations: Vec<ConversationSummary>,
    history: HashMap<String, Vec<Message>>,
    service: Arc<dyn ReplyService>,
    sessions: DashMap<String, Arc<ChatSession>>,
}

impl ChatDirectory {
    pub fn new(conversations: Vec<ConversationSummary>, service: Arc<dyn ReplyService>) -> Self {
        Self {
            conversations,
            history: HashMap::new(),
            service,
            sessions: DashMap::new(),
        }
    }

    /// Built-in conversations, with the seeded thread for the first one
    pub fn demo(service: Arc<dyn ReplyService>) -> Self {
        Self::new(demo_conversations(), service).with_history(DEMO_THREAD_ID, demo_thread_messages())
    }

    /// Messages a conversation starts with when first opened
    pub fn with_history(mut self, conversation_id: impl Into<String>, messages: Vec<Message>) -> Self {
        self.history.insert(conversation_id.into(), messages);
        self
    }

    pub fn conversations(&self) -> &[ConversationSummary] {
        &self.conversations
    }

    pub fn conversation(&self, id: &str) -> Option<&ConversationSummary> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// First conversation of the list, selected on startup
    pub fn default_conversation(&self) -> Option<&ConversationSummary> {
        self.conversations.first()
    }

    /// Make `id` the active thread, opening its session if needed
    pub fn select_conversation(&self, id: &str) -> Result<Arc<ChatSession>, ChatError> {
        if self.conversation(id).is_none() {
            return Err(ChatError::UnknownConversation(id.to_string()));
        }

        let session = self
            .sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                let history = self.history.get(id).cloned().unwrap_or_default();
                Arc::new(ChatSession::spawn(
                    MessageThread::with_messages(id, history),
                    self.service.clone(),
                ))
            })
            .value()
            .clone();

        tracing::debug!(conversation = id, "Conversation selected");
        Ok(session)
    }

    pub fn open_sessions(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::SimulatedReplyService;

    fn directory() -> ChatDirectory {
        ChatDirectory::demo(Arc::new(SimulatedReplyService::default()))
    }

    #[tokio::test]
    async fn test_select_seeded_conversation() {
        let directory = directory();
        let session = directory.select_conversation("1").unwrap();
        assert_eq!(session.conversation_id(), "1");
        assert_eq!(session.snapshot().messages.len(), 5);
    }

    #[tokio::test]
    async fn test_other_conversations_start_empty() {
        let directory = directory();
        let session = directory.select_conversation("3").unwrap();
        assert!(session.snapshot().messages.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_conversation() {
        let directory = directory();
        let err = directory.select_conversation("42").err();
        assert_eq!(err, Some(ChatError::UnknownConversation("42".to_string())));
        assert_eq!(directory.open_sessions(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_back_keeps_thread() {
        let directory = directory();

        let first = directory.select_conversation("1").unwrap();
        first.submit("hello").unwrap();

        directory.select_conversation("2").unwrap();
        let again = directory.select_conversation("1").unwrap();

        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(again.snapshot().messages.len(), 6);
        assert_eq!(directory.open_sessions(), 2);
    }

    #[test]
    fn test_default_conversation() {
        let directory = ChatDirectory::new(demo_conversations(), Arc::new(SimulatedReplyService::default()));
        assert_eq!(directory.default_conversation().map(|c| c.id.as_str()), Some("1"));
        assert_eq!(directory.conversations().len(), 4);
    }
}
