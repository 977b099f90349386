//! Conversation types
//!
//! Summaries shown in the sidebar list.

use serde::{Deserialize, Serialize};

/// One entry of the conversation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    /// Display name of the other party
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
    /// Preview of the latest message
    pub last_message: String,
    /// Time label of the latest message ("2:30 PM", "Yesterday")
    pub timestamp: String,
    pub unread: u32,
    pub online: bool,
    /// Counterpart is an AI persona rather than a friend
    #[serde(default)]
    pub is_npc: bool,
}

impl ConversationSummary {
    /// First letter of the name, used when the avatar cannot be shown
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str) -> ConversationSummary {
        ConversationSummary {
            id: "1".to_string(),
            name: name.to_string(),
            avatar: String::new(),
            last_message: String::new(),
            timestamp: "Yesterday".to_string(),
            unread: 0,
            online: false,
            is_npc: false,
        }
    }

    #[test]
    fn test_initial() {
        assert_eq!(summary("Emma Wilson").initial(), "E");
        assert_eq!(summary("").initial(), "");
    }

    #[test]
    fn test_is_npc_defaults_to_false() {
        let json = r#"{"id":"4","name":"Alex Chen","avatar":"","last_message":"Thanks","timestamp":"Yesterday","unread":0,"online":false}"#;
        let parsed: ConversationSummary = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(!parsed.is_npc);
    }
}
