//! Counterpart reply generation
//!
//! Threads never produce replies themselves: they ask a [`ReplyService`].
//! The only implementation shipped with the demo is [`SimulatedReplyService`].

pub mod simulated;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::types::message::MessageId;

pub use simulated::SimulatedReplyService;

/// A request for the counterpart to answer a message
#[derive(Clone, Debug, PartialEq)]
pub struct ReplyRequest {
    pub id: Uuid,
    pub conversation_id: String,
    /// Message being answered
    pub message_id: MessageId,
    pub content: String,
}

impl ReplyRequest {
    pub fn new(
        conversation_id: impl Into<String>,
        message_id: MessageId,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation_id: conversation_id.into(),
            message_id,
            content: content.into(),
        }
    }
}

/// Reply errors
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("Reply service unavailable: {0}")]
    Unavailable(String),
}

/// Source of counterpart messages
#[async_trait]
pub trait ReplyService: Send + Sync {
    fn name(&self) -> &str;
    async fn reply(&self, request: &ReplyRequest) -> Result<String, ReplyError>;
}
