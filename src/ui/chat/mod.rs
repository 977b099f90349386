//! Chat interface components
//!
//! Contains the thread view with its header, message list and input.

pub mod input;
pub mod message;

use dioxus::prelude::*;
use input::ChatInput;
use message::{Avatar, MessageBubble};
use tokio::sync::broadcast::error::RecvError;

use crate::app::AppState;
use crate::chat::{is_sendable, ThreadSnapshot};
use crate::storage::demo::SELF_AVATAR;

#[component]
pub fn ChatView() -> Element {
    let app_state = use_context::<AppState>();
    let selected = app_state.selected_conversation;

    // Render copy of the active thread, refreshed from session events
    let thread = use_signal(ThreadSnapshot::default);
    let draft = use_signal(String::new);

    // Follow the selected conversation: reading `selected` restarts this
    // future, which drops the previous subscription.
    {
        let directory = app_state.directory.clone();
        use_resource(move || {
            let directory = directory.clone();
            let conversation_id = selected();
            let mut thread = thread;
            let mut draft = draft;
            async move {
                let session = match directory.select_conversation(&conversation_id) {
                    Ok(session) => session,
                    Err(e) => {
                        tracing::error!("Failed to open conversation: {}", e);
                        thread.set(ThreadSnapshot::default());
                        return;
                    }
                };

                let mut events = session.subscribe();
                draft.set(session.draft());
                thread.set(session.snapshot());

                loop {
                    match events.recv().await {
                        Ok(_) => thread.set(session.snapshot()),
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::debug!("Thread view skipped {} events", skipped);
                            thread.set(session.snapshot());
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            }
        });
    }

    // Keep the newest message in view
    use_effect(move || {
        let _ = thread.read().messages.len();
        let _ = document::eval(
            "const list = document.getElementById('message-list'); if (list) { list.scrollTop = list.scrollHeight; }",
        );
    });

    let handle_input = {
        let directory = app_state.directory.clone();
        let mut draft = draft;
        move |text: String| {
            draft.set(text.clone());
            match directory.select_conversation(&selected()) {
                Ok(session) => session.set_draft(text),
                Err(e) => tracing::error!("Failed to keep draft: {}", e),
            }
        }
    };

    let handle_send = {
        let directory = app_state.directory.clone();
        let mut draft = draft;
        move |_: ()| {
            let session = match directory.select_conversation(&selected()) {
                Ok(session) => session,
                Err(e) => {
                    tracing::error!("Failed to send message: {}", e);
                    return;
                }
            };
            match session.submit_draft() {
                Ok(_) => draft.set(String::new()),
                Err(e) => tracing::debug!("Message not sent: {}", e),
            }
        }
    };

    let conversation = app_state.directory.conversation(&selected()).cloned();
    let Some(conversation) = conversation else {
        return rsx! {
            div { class: "chat-view empty", "Select a conversation" }
        };
    };

    let mut show_profile = app_state.show_profile;
    let user_initials = app_state.settings.read().user_initials.clone();
    let counterpart_initials = if conversation.is_npc {
        "AI".to_string()
    } else {
        conversation.initial()
    };
    let snapshot = thread.read().clone();
    let presence = if snapshot.is_typing {
        "Typing..."
    } else if conversation.online {
        "Online"
    } else {
        "Offline"
    };
    let can_send = is_sendable(&draft.read());

    rsx! {
        div { class: "chat-view",

            // Header
            div { class: "chat-header",
                div { class: "chat-header-who",
                    div {
                        class: "clickable presence-holder",
                        onclick: move |_| show_profile.set(true),
                        Avatar { src: conversation.avatar.clone(), fallback: conversation.initial() }
                        if conversation.online {
                            span { class: "online-dot" }
                        }
                    }
                    div {
                        div { class: "chat-title",
                            h2 { "{conversation.name}" }
                            if conversation.is_npc {
                                span { class: "badge", "AI" }
                            }
                        }
                        p { class: "muted", "{presence}" }
                    }
                }
                button {
                    class: "icon-button",
                    title: "Profile",
                    onclick: move |_| show_profile.set(true),
                    "ⓘ"
                }
            }

            // Messages
            div { id: "message-list", class: "message-list",
                for msg in snapshot.messages.iter() {
                    MessageBubble {
                        key: "{msg.id}",
                        message: msg.clone(),
                        avatar: if msg.is_mine() { SELF_AVATAR.to_string() } else { conversation.avatar.clone() },
                        initials: if msg.is_mine() { user_initials.clone() } else { counterpart_initials.clone() },
                    }
                }

                if snapshot.is_typing {
                    div { class: "typing-indicator",
                        span { class: "dot" }
                        span { class: "dot" }
                        span { class: "dot" }
                    }
                }
            }

            ChatInput {
                draft: draft(),
                can_send,
                on_input: handle_input,
                on_send: handle_send,
            }
        }
    }
}
