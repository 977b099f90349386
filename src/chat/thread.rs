//! Message thread model
//!
//! Owns the ordered messages of one conversation together with the draft
//! being composed and the typing flag.

use thiserror::Error;

use crate::types::message::{DeliveryStatus, Message, MessageId, Sender};

/// Reasons a submission is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Message is empty")]
    EmptyMessage,
}

/// Whether `text` is acceptable as a message body
pub fn is_sendable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Render-ready copy of a thread
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadSnapshot {
    pub messages: Vec<Message>,
    pub is_typing: bool,
}

/// Append-only message sequence of a single conversation.
///
/// Messages are never removed, reordered or edited once appended.
#[derive(Debug, Clone)]
pub struct MessageThread {
    conversation_id: String,
    messages: Vec<Message>,
    draft: String,
    /// Replies still owed by the counterpart; typing while non-zero
    pending_replies: usize,
    next_id: u64,
}

impl MessageThread {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self::with_messages(conversation_id, Vec::new())
    }

    /// Start a thread from existing history. New ids continue after the
    /// highest seeded id.
    pub fn with_messages(conversation_id: impl Into<String>, messages: Vec<Message>) -> Self {
        let next_id = messages.iter().map(|m| m.id.0).max().map_or(1, |id| id + 1);
        Self {
            conversation_id: conversation_id.into(),
            messages,
            draft: String::new(),
            pending_replies: 0,
            next_id,
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Look a message up by id. Ids are ascending along the sequence.
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages
            .binary_search_by_key(&id, |m| m.id)
            .ok()
            .map(|idx| &self.messages[idx])
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the current draft would be accepted by [`submit_draft`](Self::submit_draft)
    pub fn can_send(&self) -> bool {
        is_sendable(&self.draft)
    }

    /// Append a message authored by the local user.
    ///
    /// The new message starts as `Sending`, the draft is cleared and the
    /// thread starts waiting for a reply. Blank text leaves the thread as it was.
    pub fn submit(&mut self, text: &str) -> Result<MessageId, SubmitError> {
        if !is_sendable(text) {
            return Err(SubmitError::EmptyMessage);
        }

        let id = self.allocate_id();
        self.messages
            .push(Message::new(id, Sender::Me, text, DeliveryStatus::Sending));
        self.draft.clear();
        self.pending_replies += 1;

        tracing::debug!(
            conversation = %self.conversation_id,
            message = %id,
            "Message submitted"
        );
        Ok(id)
    }

    /// Submit whatever is currently in the draft
    pub fn submit_draft(&mut self) -> Result<MessageId, SubmitError> {
        let text = std::mem::take(&mut self.draft);
        match self.submit(&text) {
            Ok(id) => Ok(id),
            Err(e) => {
                self.draft = text;
                Err(e)
            }
        }
    }

    /// Append the counterpart's answer to the oldest outstanding message.
    ///
    /// The typing flag drops once no replies are outstanding.
    pub fn receive_reply(&mut self, content: impl Into<String>) -> MessageId {
        let id = self.allocate_id();
        self.messages.push(Message::new(
            id,
            Sender::Counterpart,
            content,
            DeliveryStatus::Sent,
        ));
        self.settle_reply();

        tracing::debug!(
            conversation = %self.conversation_id,
            message = %id,
            "Reply appended"
        );
        id
    }

    /// Give up on an outstanding reply without appending anything
    pub fn abandon_reply(&mut self) {
        self.settle_reply();
    }

    pub fn snapshot(&self) -> ThreadSnapshot {
        ThreadSnapshot {
            messages: self.messages.clone(),
            is_typing: self.is_typing(),
        }
    }

    fn settle_reply(&mut self) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}
