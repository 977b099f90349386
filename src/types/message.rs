//! Message types
//!
//! Defines chat message structures, senders and delivery states.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Identifier of a message inside its thread.
///
/// Ids are handed out by the owning thread in creation order, so comparing two
/// ids of the same thread compares their creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// The local user
    Me,
    /// The other party of the conversation
    Counterpart,
}

/// Delivery state of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Delivered,
    Read,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::Sending => write!(f, "sending"),
            DeliveryStatus::Sent => write!(f, "sent"),
            DeliveryStatus::Delivered => write!(f, "delivered"),
            DeliveryStatus::Read => write!(f, "read"),
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Text as typed by its author
    pub content: String,
    pub sender: Sender,
    /// Human readable creation time, e.g. "2:31 PM"
    pub timestamp: String,
    pub status: DeliveryStatus,
}

impl Message {
    /// Create a message stamped with the current local time
    pub fn new(
        id: MessageId,
        sender: Sender,
        content: impl Into<String>,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            timestamp: timestamp_label(Local::now()),
            status,
        }
    }

    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}

/// Format a time the way message bubbles show it
pub fn timestamp_label(at: DateTime<Local>) -> String {
    at.format("%-I:%M %p").to_string()
}
