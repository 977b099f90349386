use dioxus::prelude::*;

use crate::app::AppState;
use crate::types::conversation::ConversationSummary;
use crate::ui::chat::message::Avatar;

#[component]
pub fn ConversationList() -> Element {
    let app_state = use_context::<AppState>();

    let filter = app_state.filter.read().clone();
    let selected_id = app_state.selected_conversation.read().clone();
    let conversations: Vec<ConversationSummary> = filter
        .apply(app_state.directory.conversations())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "conversation-list",
            if conversations.is_empty() {
                div { class: "conversation-empty", "No chats found" }
            }

            for conversation in conversations {
                ConversationRow {
                    key: "{conversation.id}",
                    is_selected: conversation.id == selected_id,
                    conversation,
                }
            }
        }
    }
}

#[component]
fn ConversationRow(conversation: ConversationSummary, is_selected: bool) -> Element {
    let app_state = use_context::<AppState>();
    let mut selected = app_state.selected_conversation;

    let row_class = if is_selected {
        "conversation-row selected"
    } else {
        "conversation-row"
    };
    let conversation_id = conversation.id.clone();

    rsx! {
        button {
            class: "{row_class}",
            onclick: move |_| {
                tracing::debug!("Switching to conversation {}", conversation_id);
                selected.set(conversation_id.clone());
            },

            div { class: "presence-holder",
                Avatar { src: conversation.avatar.clone(), fallback: conversation.initial() }
                if conversation.online {
                    span { class: "online-dot" }
                }
            }

            div { class: "conversation-text",
                div { class: "conversation-line",
                    span { class: "conversation-name",
                        "{conversation.name}"
                        if conversation.is_npc {
                            span { class: "badge", "AI" }
                        }
                    }
                    span { class: "muted small", "{conversation.timestamp}" }
                }
                div { class: "conversation-line",
                    span { class: "muted truncate", "{conversation.last_message}" }
                    if conversation.unread > 0 {
                        span { class: "unread", "{conversation.unread}" }
                    }
                }
            }
        }
    }
}
