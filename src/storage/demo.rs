//! Built-in demo content

use crate::types::conversation::ConversationSummary;
use crate::types::message::{DeliveryStatus, Message, MessageId, Sender};
use crate::types::profile::Profile;

/// Conversation that opens with seeded history
pub const DEMO_THREAD_ID: &str = "1";

pub const SELF_AVATAR: &str = "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde";
const SARAH_AVATAR: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330";

pub fn demo_conversations() -> Vec<ConversationSummary> {
    let chat = |id: &str, name: &str, avatar: &str, last: &str, at: &str, unread: u32, online: bool, is_npc: bool| {
        ConversationSummary {
            id: id.to_string(),
            name: name.to_string(),
            avatar: avatar.to_string(),
            last_message: last.to_string(),
            timestamp: at.to_string(),
            unread,
            online,
            is_npc,
        }
    };

    vec![
        chat("1", "Sarah's AI", SARAH_AVATAR, "Looking forward to our coffee chat!", "2:30 PM", 2, true, true),
        chat(
            "2",
            "Mike's AI",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e",
            "That's an interesting perspective...",
            "Yesterday",
            0,
            false,
            true,
        ),
        chat(
            "3",
            "Emma Wilson",
            "https://images.unsplash.com/photo-1534528741775-53994a69daeb",
            "Let's meet up this weekend!",
            "9:45 AM",
            1,
            true,
            false,
        ),
        chat(
            "4",
            "Alex Chen",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d",
            "Thanks for the recommendation",
            "Yesterday",
            0,
            false,
            false,
        ),
    ]
}

/// History of the demo thread with Sarah's AI
pub fn demo_thread_messages() -> Vec<Message> {
    let seeded = |id: u64, sender: Sender, content: &str, at: &str, status: DeliveryStatus| Message {
        id: MessageId(id),
        content: content.to_string(),
        sender,
        timestamp: at.to_string(),
        status,
    };

    vec![
        seeded(
            1,
            Sender::Counterpart,
            "Hi! I'd love to learn more about your interests. What kind of activities do you enjoy?",
            "2:30 PM",
            DeliveryStatus::Read,
        ),
        seeded(
            2,
            Sender::Me,
            "I'm really into hiking and photography. I love capturing beautiful landscapes!",
            "2:31 PM",
            DeliveryStatus::Read,
        ),
        seeded(
            3,
            Sender::Counterpart,
            "That's fascinating! I can see why you'd enjoy combining those hobbies. Do you have a favorite hiking spot for photography?",
            "2:31 PM",
            DeliveryStatus::Read,
        ),
        seeded(
            4,
            Sender::Me,
            "Yes! There's this amazing trail near Mount Rainier that has stunning views. The sunrise there is absolutely breathtaking.",
            "2:32 PM",
            DeliveryStatus::Delivered,
        ),
        seeded(
            5,
            Sender::Counterpart,
            "Mount Rainier is incredible! The way the light hits the mountain during sunrise must create some spectacular photo opportunities. Do you prefer shooting during golden hour?",
            "2:33 PM",
            DeliveryStatus::Sent,
        ),
    ]
}

pub fn demo_profile() -> Profile {
    Profile {
        name: "Sarah Anderson".to_string(),
        headline: "AI Companion".to_string(),
        avatar: SARAH_AVATAR.to_string(),
        initials: "SA".to_string(),
        about: "I'm an AI companion trained to be empathetic, creative, and helpful. I love engaging in meaningful conversations and learning from our interactions.".to_string(),
        email: "sarah.ai@example.com".to_string(),
        location: "Seattle, WA".to_string(),
        created: "Created March 2024".to_string(),
        connected_to: Some("@sarah_real".to_string()),
        traits: words(&["Creative", "Empathetic", "Curious", "Supportive", "Adventurous"]),
        interests: words(&["Photography", "Hiking", "Art", "Technology", "Travel", "Music"]),
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_thread_is_ordered() {
        let messages = demo_thread_messages();
        assert_eq!(messages.len(), 5);
        assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(messages[0].sender, Sender::Counterpart);
    }

    #[test]
    fn test_demo_conversation_ids_are_unique() {
        let conversations = demo_conversations();
        let mut ids: Vec<&str> = conversations.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), conversations.len());
        assert!(ids.contains(&DEMO_THREAD_ID));
    }
}
