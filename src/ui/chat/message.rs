//! Message bubble component

use dioxus::prelude::*;

use crate::types::message::Message;

#[component]
pub fn MessageBubble(message: Message, avatar: String, initials: String) -> Element {
    let mine = message.is_mine();
    let row_class = if mine { "message-row mine" } else { "message-row" };
    let bubble_class = if mine { "bubble sent" } else { "bubble received" };
    // Delivery state only matters for our own messages
    let status = mine.then(|| format!("• {}", message.status));

    rsx! {
        div { class: "{row_class}",
            Avatar { src: avatar, fallback: initials, small: true }
            div { class: "{bubble_class}",
                p { class: "bubble-text", "{message.content}" }
                div { class: "bubble-meta",
                    span { "{message.timestamp}" }
                    if let Some(status) = status {
                        span { "{status}" }
                    }
                }
            }
        }
    }
}

/// Round avatar with an initials fallback underneath the image
#[component]
pub fn Avatar(src: String, fallback: String, #[props(default)] small: bool) -> Element {
    let class = if small { "avatar small" } else { "avatar" };

    rsx! {
        div { class: "{class}",
            span { class: "avatar-fallback", "{fallback}" }
            if !src.is_empty() {
                img { class: "avatar-image", src: "{src}", alt: "{fallback}" }
            }
        }
    }
}
