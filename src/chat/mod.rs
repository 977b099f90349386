//! Chat state
//!
//! Message threads, their reply sessions, the conversation directory and
//! sidebar filtering. Nothing in here depends on the UI.

pub mod directory;
pub mod filter;
pub mod session;
pub mod thread;

use thiserror::Error;

pub use directory::ChatDirectory;
pub use filter::{ChatTab, ConversationFilter};
pub use session::{ChatSession, ThreadEvent};
pub use thread::{is_sendable, MessageThread, SubmitError, ThreadSnapshot};

/// Chat errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Unknown conversation: {0}")]
    UnknownConversation(String),
}
